//! System font roles
//!
//! A role names a UI use-case for a font (menu text, status bar text, ...)
//! rather than a concrete font. Roles correspond to the CSS system font
//! keywords accepted by the `font` shorthand.

use std::fmt;
use std::str::FromStr;

use crate::error::FontError;

/// Abstract UI font use-case
///
/// The numeric discriminant is the role's stable raw id and also the index
/// of its cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SystemFontRole {
    Caption = 0,
    Icon = 1,
    Menu = 2,
    MessageBox = 3,
    SmallCaption = 4,
    StatusBar = 5,
    MiniControl = 6,
    SmallControl = 7,
    Control = 8,
    /// Fallback for `none` and for any unrecognized role value
    Default = 9,
}

impl SystemFontRole {
    /// Every role, in slot order
    pub const ALL: [SystemFontRole; 10] = [
        SystemFontRole::Caption,
        SystemFontRole::Icon,
        SystemFontRole::Menu,
        SystemFontRole::MessageBox,
        SystemFontRole::SmallCaption,
        SystemFontRole::StatusBar,
        SystemFontRole::MiniControl,
        SystemFontRole::SmallControl,
        SystemFontRole::Control,
        SystemFontRole::Default,
    ];

    /// Number of distinct roles (and cache slots)
    pub const COUNT: usize = Self::ALL.len();

    /// Convert a raw role id, `None` if it names no role
    pub fn from_raw(id: u16) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Convert a raw role id, degrading unknown ids to [`SystemFontRole::Default`]
    pub fn from_raw_or_default(id: u16) -> Self {
        Self::from_raw(id).unwrap_or(SystemFontRole::Default)
    }

    /// Stable raw id of this role
    pub fn raw(self) -> u16 {
        self as u16
    }

    /// Index of this role's cache slot
    pub(crate) fn slot(self) -> usize {
        self as usize
    }

    /// CSS keyword naming this role
    pub fn css_keyword(self) -> &'static str {
        match self {
            SystemFontRole::Caption => "caption",
            SystemFontRole::Icon => "icon",
            SystemFontRole::Menu => "menu",
            SystemFontRole::MessageBox => "message-box",
            SystemFontRole::SmallCaption => "small-caption",
            SystemFontRole::StatusBar => "status-bar",
            SystemFontRole::MiniControl => "-webkit-mini-control",
            SystemFontRole::SmallControl => "-webkit-small-control",
            SystemFontRole::Control => "-webkit-control",
            SystemFontRole::Default => "none",
        }
    }

    /// Whether this role sizes form controls
    pub fn is_control(self) -> bool {
        matches!(
            self,
            SystemFontRole::MiniControl | SystemFontRole::SmallControl | SystemFontRole::Control
        )
    }
}

impl Default for SystemFontRole {
    fn default() -> Self {
        SystemFontRole::Default
    }
}

impl fmt::Display for SystemFontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_keyword())
    }
}

impl FromStr for SystemFontRole {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.css_keyword().eq_ignore_ascii_case(keyword))
            .ok_or_else(|| FontError::UnknownRole {
                keyword: keyword.to_string(),
            })
    }
}

impl TryFrom<u16> for SystemFontRole {
    type Error = u16;

    fn try_from(id: u16) -> Result<Self, Self::Error> {
        Self::from_raw(id).ok_or(id)
    }
}
