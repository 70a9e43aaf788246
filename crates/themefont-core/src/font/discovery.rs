//! System font discovery through fontconfig

use crate::config::SystemFontConfig;
use crate::error::{FontError, FontResult};
use crate::font::platform::DefaultFontResolver;
use crate::role::SystemFontRole;
use crate::traits::{PlatformFont, PlatformFontResolver};

/// Resolver that asks fontconfig which family the desktop uses for UI text
///
/// Sizes, weights and overrides come from [`DefaultFontResolver`]; fontconfig
/// only decides the family. Available on Linux with the `font-discovery`
/// feature; everywhere else [`FontconfigResolver::new`] fails with
/// [`FontError::PlatformNotSupported`].
pub struct FontconfigResolver {
    #[cfg(all(target_os = "linux", feature = "font-discovery"))]
    fontconfig: fontconfig::Fontconfig,
    pattern: String,
    table: DefaultFontResolver,
}

impl FontconfigResolver {
    pub fn new(config: &SystemFontConfig) -> FontResult<Self> {
        #[cfg(all(target_os = "linux", feature = "font-discovery"))]
        {
            let fontconfig = fontconfig::Fontconfig::new().ok_or(FontError::PlatformNotSupported)?;
            Ok(Self {
                fontconfig,
                pattern: config.fontconfig_pattern.clone(),
                table: DefaultFontResolver::with_family(&config.fallback_family, config),
            })
        }

        #[cfg(not(all(target_os = "linux", feature = "font-discovery")))]
        {
            let _ = config;
            Err(FontError::PlatformNotSupported)
        }
    }

    /// Fontconfig pattern matched for the UI family
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Family name (`FC_FAMILY`) of the best match for the pattern
    ///
    /// The full face name (`FC_FULLNAME`) carries a style suffix such as
    /// "Regular" and is not a usable family.
    #[cfg(all(target_os = "linux", feature = "font-discovery"))]
    fn match_family(&self) -> FontResult<String> {
        use std::ffi::CString;

        use fontconfig::{Pattern, FC_FAMILY};

        let family = CString::new(self.pattern.as_str())
            .map_err(|_| FontError::FontNotFound(self.pattern.clone()))?;
        let mut pattern = Pattern::new(&self.fontconfig);
        pattern.add_string(FC_FAMILY, &family);

        let matched = pattern.font_match();
        let name = matched
            .get_string(FC_FAMILY)
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .ok_or_else(|| FontError::FontNotFound(self.pattern.clone()))?;
        tracing::debug!("Fontconfig matched {:?} to family {}", self.pattern, name);
        Ok(name)
    }

    #[cfg(not(all(target_os = "linux", feature = "font-discovery")))]
    fn match_family(&self) -> FontResult<String> {
        Err(FontError::PlatformNotSupported)
    }
}

impl PlatformFontResolver for FontconfigResolver {
    fn query(&self, role: SystemFontRole) -> FontResult<PlatformFont> {
        let mut font = self.table.query(role)?;
        if self.table.has_override(role) {
            return Ok(font);
        }
        font.family = self.match_family()?;
        Ok(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fontconfig_resolver() {
        let config = SystemFontConfig::default();
        match FontconfigResolver::new(&config) {
            Ok(resolver) => {
                assert_eq!(resolver.pattern(), config.fontconfig_pattern);
                match resolver.query(SystemFontRole::Menu) {
                    Ok(font) => {
                        println!("Fontconfig UI family: {}", font.family);
                        assert!(!font.family.is_empty());
                    }
                    Err(e) => {
                        // Acceptable on systems without any installed fonts
                        eprintln!("Fontconfig lookup failed: {}", e);
                    }
                }
            }
            Err(e) => {
                assert_eq!(e, FontError::PlatformNotSupported);
            }
        }
    }

    #[test]
    fn test_menu_family_has_no_style_suffix() {
        let config = SystemFontConfig::default();
        let Ok(resolver) = FontconfigResolver::new(&config) else {
            return;
        };
        let Ok(font) = resolver.query(SystemFontRole::Menu) else {
            // Acceptable on systems without any installed fonts
            return;
        };
        for suffix in [" Regular", " Bold", " Book", " Medium", " Italic", " Oblique"] {
            assert!(
                !font.family.ends_with(suffix),
                "family {:?} carries a style suffix",
                font.family
            );
        }
    }

    #[test]
    fn test_custom_pattern_reaches_resolver() {
        let config = SystemFontConfig::new().with_fontconfig_pattern("monospace");
        assert_eq!(config.fontconfig_pattern, "monospace");
        match FontconfigResolver::new(&config) {
            Ok(resolver) => assert_eq!(resolver.pattern(), "monospace"),
            Err(e) => assert_eq!(e, FontError::PlatformNotSupported),
        }
    }

    #[test]
    fn test_override_skips_fontconfig() {
        let config = SystemFontConfig::new()
            .with_override(SystemFontRole::Icon, PlatformFont::new(16.0, "Icon Sans"));
        if let Ok(resolver) = FontconfigResolver::new(&config) {
            let font = resolver.query(SystemFontRole::Icon).unwrap();
            assert_eq!(font.family, "Icon Sans");
        }
    }
}
