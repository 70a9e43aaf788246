//! Themefont Core - memoized system font resolution
//!
//! This crate maps abstract system font roles (caption, menu, status bar, ...)
//! to concrete font descriptions, asking a pluggable platform resolver at most
//! once per role.

pub mod cache;
pub mod config;
pub mod constants;
pub mod description;
pub mod dummy_resolver;
pub mod error;
pub mod font;
pub mod role;
pub mod traits;

// Re-export main types
pub use cache::{system_font, SystemFontCache};
pub use config::SystemFontConfig;
pub use description::{FontDescription, FontStyle, FontWeight, GenericFamily};
pub use dummy_resolver::ScriptedResolver;
pub use error::{FontError, FontResult};
pub use font::{platform_resolver, DefaultFontResolver, FontconfigResolver};
pub use role::SystemFontRole;

// Re-export traits and types
pub use traits::*;
