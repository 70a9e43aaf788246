//! Static system font table for each platform

use std::collections::HashMap;

use crate::config::SystemFontConfig;
use crate::constants::{MINI_CONTROL_RATIO, SMALL_CONTROL_RATIO};
#[cfg(target_os = "macos")]
use crate::constants::MACOS_UI_FAMILY;
#[cfg(target_os = "windows")]
use crate::constants::WINDOWS_UI_FAMILY;
use crate::description::{FontStyle, FontWeight};
use crate::error::FontResult;
use crate::role::SystemFontRole;
use crate::traits::{PlatformFont, PlatformFontResolver};

/// Resolver answering from a built-in table of native UI fonts
///
/// Every role uses the platform UI family at the configured base size, except:
/// * control roles scale down (small 11/13, mini 9/13 of the base)
/// * small captions are one pixel smaller than the base
/// * captions and message boxes are bold on macOS
///
/// Per-role overrides from the config win over the table.
#[derive(Debug, Clone)]
pub struct DefaultFontResolver {
    family: String,
    base_size: f32,
    overrides: HashMap<SystemFontRole, PlatformFont>,
}

impl DefaultFontResolver {
    pub fn new(config: &SystemFontConfig) -> Self {
        Self::with_family(ui_family(config), config)
    }

    /// Use `family` for every role instead of the platform UI family
    pub fn with_family(family: &str, config: &SystemFontConfig) -> Self {
        Self {
            family: family.to_string(),
            base_size: config.base_size,
            overrides: config.overrides.clone(),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Whether the config pins the answer for `role`
    pub fn has_override(&self, role: SystemFontRole) -> bool {
        self.overrides.contains_key(&role)
    }

    fn size_for(&self, role: SystemFontRole) -> f32 {
        match role {
            SystemFontRole::SmallControl => (self.base_size * SMALL_CONTROL_RATIO).round(),
            SystemFontRole::MiniControl => (self.base_size * MINI_CONTROL_RATIO).round(),
            SystemFontRole::SmallCaption => (self.base_size - 1.0).max(1.0),
            _ => self.base_size,
        }
    }

    fn weight_for(&self, role: SystemFontRole) -> FontWeight {
        match role {
            SystemFontRole::Caption | SystemFontRole::MessageBox if cfg!(target_os = "macos") => {
                FontWeight::Bold
            }
            _ => FontWeight::Normal,
        }
    }
}

impl PlatformFontResolver for DefaultFontResolver {
    fn query(&self, role: SystemFontRole) -> FontResult<PlatformFont> {
        if let Some(font) = self.overrides.get(&role) {
            return Ok(font.clone());
        }

        Ok(PlatformFont {
            style: FontStyle::Normal,
            weight: self.weight_for(role),
            pixel_size: self.size_for(role),
            family: self.family.clone(),
        })
    }
}

/// Native UI family of the current platform
fn ui_family(config: &SystemFontConfig) -> &str {
    #[cfg(target_os = "windows")]
    {
        let _ = config;
        WINDOWS_UI_FAMILY
    }

    #[cfg(target_os = "macos")]
    {
        let _ = config;
        MACOS_UI_FAMILY
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        &config.fallback_family
    }
}
