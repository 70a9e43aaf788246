// src/constants.rs

// Fallback used when the platform cannot answer for a role
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

// Base size the static platform table derives role sizes from
#[cfg(target_os = "macos")]
pub const DEFAULT_BASE_SIZE: f32 = 13.0;
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_BASE_SIZE: f32 = 12.0;

// Native UI families per platform
pub const WINDOWS_UI_FAMILY: &str = "Segoe UI";
pub const MACOS_UI_FAMILY: &str = "system-ui";

// Fontconfig pattern queried for the UI family on Linux
pub const DEFAULT_FONTCONFIG_PATTERN: &str = "sans-serif";

// Control size ratios (regular control is 13px on macOS, small 11px, mini 9px)
pub const SMALL_CONTROL_RATIO: f32 = 11.0 / 13.0;
pub const MINI_CONTROL_RATIO: f32 = 9.0 / 13.0;
