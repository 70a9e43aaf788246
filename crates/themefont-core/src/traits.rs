use crate::description::{FontStyle, FontWeight};
use crate::error::FontResult;
use crate::role::SystemFontRole;

/// Native font attributes reported by the platform for a role
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformFont {
    pub style: FontStyle,
    pub weight: FontWeight,
    pub pixel_size: f32,
    pub family: String,
}

impl PlatformFont {
    /// Normal style and weight at the given size
    pub fn new(pixel_size: f32, family: &str) -> Self {
        Self {
            style: FontStyle::Normal,
            weight: FontWeight::Normal,
            pixel_size,
            family: family.to_string(),
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Whether every attribute carries usable data
    pub fn is_complete(&self) -> bool {
        !self.family.trim().is_empty() && self.pixel_size.is_finite() && self.pixel_size > 0.0
    }
}

/// Maps a system font role to concrete platform font attributes
///
/// Implementations may be expensive (they can query the OS font system) and
/// are called synchronously. The system font cache calls `query` at most once
/// per role and treats the answer as final.
pub trait PlatformFontResolver: Send + Sync {
    fn query(&self, role: SystemFontRole) -> FontResult<PlatformFont>;
}

impl<F> PlatformFontResolver for F
where
    F: Fn(SystemFontRole) -> FontResult<PlatformFont> + Send + Sync,
{
    fn query(&self, role: SystemFontRole) -> FontResult<PlatformFont> {
        self(role)
    }
}
