//! Font descriptions handed out by the system font cache

use std::fmt;

/// Font style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// Font weight on the CSS ordinal scale (100..=900)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    const SCALE: [FontWeight; 9] = [
        FontWeight::Thin,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::Normal,
        FontWeight::Medium,
        FontWeight::SemiBold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::Black,
    ];

    /// Numeric CSS weight (400 for `Normal`, 700 for `Bold`)
    pub fn numeric(self) -> u16 {
        (self as u16 + 1) * 100
    }

    /// Snap a numeric weight to the nearest step of the scale
    pub fn from_numeric(weight: u16) -> Self {
        let step = (weight.clamp(100, 900) + 50) / 100;
        Self::SCALE[usize::from(step.clamp(1, 9) - 1)]
    }

    pub fn is_bold(self) -> bool {
        self >= FontWeight::SemiBold
    }
}

/// Generic family classifier attached to a description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenericFamily {
    /// The family is a concrete name, not a generic keyword
    #[default]
    None,
    Standard,
    Serif,
    SansSerif,
    Monospace,
    Cursive,
    Fantasy,
}

/// A fully or partially specified font
///
/// Descriptions start out empty with `is_absolute_size == false`. Once a
/// description has been resolved from a concrete source it is *absolute*
/// (sealed) and the system font cache never changes it again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontDescription {
    pub style: FontStyle,
    pub weight: FontWeight,
    /// Size in pixels
    pub specified_size: f32,
    /// Primary family name
    pub family: String,
    pub generic_family: GenericFamily,
    pub is_absolute_size: bool,
}

impl FontDescription {
    /// An empty, unresolved description
    pub fn new() -> Self {
        Self::default()
    }

    /// A sealed description built from concrete values
    pub fn absolute(style: FontStyle, weight: FontWeight, size: f32, family: &str) -> Self {
        Self {
            style,
            weight,
            specified_size: size,
            family: family.to_string(),
            generic_family: GenericFamily::None,
            is_absolute_size: true,
        }
    }

    pub fn is_absolute(&self) -> bool {
        self.is_absolute_size
    }
}

impl fmt::Display for FontDescription {
    /// Formats as a CSS `font` shorthand, omitting normal style and weight
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            FontStyle::Normal => {}
            FontStyle::Italic => f.write_str("italic ")?,
            FontStyle::Oblique => f.write_str("oblique ")?,
        }
        match self.weight {
            FontWeight::Normal => {}
            FontWeight::Bold => f.write_str("bold ")?,
            other => write!(f, "{} ", other.numeric())?,
        }
        write!(f, "{}px \"{}\"", self.specified_size, self.family)
    }
}
