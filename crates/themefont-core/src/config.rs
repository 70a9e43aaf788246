// src/config.rs
use std::collections::HashMap;

use crate::constants::{DEFAULT_BASE_SIZE, DEFAULT_FONTCONFIG_PATTERN, DEFAULT_FONT_FAMILY,
                       DEFAULT_FONT_SIZE};
use crate::description::{FontDescription, FontStyle, FontWeight};
use crate::role::SystemFontRole;
use crate::traits::PlatformFont;

#[derive(Clone, Debug)]
pub struct SystemFontConfig {
    /// Family sealed into a slot when its resolver fails
    pub fallback_family: String,
    /// Pixel size sealed into a slot when its resolver fails
    pub fallback_size: f32,
    /// Size the static platform table derives role sizes from
    pub base_size: f32,
    /// Pattern fontconfig is asked to match for the UI family
    pub fontconfig_pattern: String,
    /// Flag unrecognized role values with a debug assertion
    ///
    /// Off by default: unless this is set, debug builds only log a warning
    /// and degrade to the default role, like release builds.
    pub strict_roles: bool,
    /// Fixed answers that bypass the platform lookup for a role
    pub overrides: HashMap<SystemFontRole, PlatformFont>,
}

impl Default for SystemFontConfig {
    fn default() -> Self {
        Self {
            fallback_family: DEFAULT_FONT_FAMILY.to_string(),
            fallback_size: DEFAULT_FONT_SIZE,
            base_size: DEFAULT_BASE_SIZE,
            fontconfig_pattern: DEFAULT_FONTCONFIG_PATTERN.to_string(),
            strict_roles: false,
            overrides: HashMap::new(),
        }
    }
}

impl SystemFontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback_family(mut self, family: &str) -> Self {
        self.fallback_family = family.to_string();
        self
    }

    pub fn with_fallback_size(mut self, size: f32) -> Self {
        self.fallback_size = size;
        self
    }

    pub fn with_base_size(mut self, size: f32) -> Self {
        self.base_size = size;
        self
    }

    pub fn with_fontconfig_pattern(mut self, pattern: &str) -> Self {
        self.fontconfig_pattern = pattern.to_string();
        self
    }

    pub fn with_strict_roles(mut self, enabled: bool) -> Self {
        self.strict_roles = enabled;
        self
    }

    pub fn with_override(mut self, role: SystemFontRole, font: PlatformFont) -> Self {
        self.overrides.insert(role, font);
        self
    }

    /// Sealed description used when a resolver cannot answer
    pub fn fallback_description(&self) -> FontDescription {
        FontDescription::absolute(
            FontStyle::Normal,
            FontWeight::Normal,
            self.fallback_size,
            &self.fallback_family,
        )
    }
}
