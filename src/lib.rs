//! Themefont - system font roles resolved to concrete fonts
//!
//! This crate provides memoized system font lookup with support for:
//! - CSS system font keywords (`caption`, `menu`, `status-bar`, ...)
//! - Pluggable platform resolvers (fontconfig, static platform tables)
//! - Fallback fonts when the platform cannot answer
//! - A process-wide cache sealed once per role

pub use themefont_core::*;
