// src/error.rs
use thiserror::Error;

use crate::role::SystemFontRole;

/// Errors raised while mapping system font roles to platform fonts
///
/// None of these ever escape [`SystemFontCache::resolve`](crate::SystemFontCache::resolve):
/// the cache degrades to a fallback description instead. They surface from
/// resolvers and from keyword parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    #[error("Unknown system font keyword: {keyword}")]
    UnknownRole { keyword: String },

    #[error("Platform font discovery not supported")]
    PlatformNotSupported,

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Invalid font data for {role}: {message}")]
    InvalidFontData { role: SystemFontRole, message: String },

    #[error("Resolver failed for {role}: {message}")]
    ResolverFailed { role: SystemFontRole, message: String },
}

pub type FontResult<T> = Result<T, FontError>;
