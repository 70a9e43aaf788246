//! Platform font resolvers
//!
//! This module provides the bundled [`PlatformFontResolver`] implementations:
//! a static per-platform table and, on Linux, a fontconfig-backed lookup.

pub mod discovery;
pub mod platform;

pub use discovery::FontconfigResolver;
pub use platform::DefaultFontResolver;

use crate::config::SystemFontConfig;
use crate::traits::PlatformFontResolver;

/// Pick the best resolver for the current platform
///
/// Prefers fontconfig where it can be loaded and falls back to the static
/// table everywhere else.
pub fn platform_resolver(config: &SystemFontConfig) -> Box<dyn PlatformFontResolver> {
    match FontconfigResolver::new(config) {
        Ok(resolver) => {
            tracing::debug!("Using fontconfig for system fonts");
            Box::new(resolver)
        }
        Err(e) => {
            tracing::debug!("Fontconfig unavailable ({}), using static system font table", e);
            Box::new(DefaultFontResolver::new(config))
        }
    }
}
