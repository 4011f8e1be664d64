//! Describe the font a menu entry is rendered with.

/// A font description.
///
/// This is only a key for a [`Measure`](crate::Measure) implementation; the
/// core never loads or rasterizes fonts itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// The [`Family`] of the [`Font`].
    pub family: Family,
    /// The [`Weight`] of the [`Font`].
    pub weight: Weight,
    /// The size of the [`Font`], in logical pixels.
    pub size: u16,
}

impl Font {
    /// The default sans-serif menu font.
    pub const DEFAULT: Font = Font {
        family: Family::SansSerif,
        weight: Weight::Normal,
        size: 14,
    };

    /// A monospaced font with the default size.
    pub const MONOSPACE: Font = Font {
        family: Family::Monospace,
        weight: Weight::Normal,
        size: 14,
    };

    /// Creates a non-monospaced [`Font`] with the given [`Family::Name`] and
    /// default attributes.
    pub fn with_name(name: impl Into<String>) -> Self {
        Font {
            family: Family::Name(name.into()),
            ..Self::DEFAULT
        }
    }

    /// Returns this [`Font`] with the given size.
    #[must_use]
    pub fn size(self, size: u16) -> Self {
        Self { size, ..self }
    }

    /// Returns this [`Font`] with the given [`Weight`].
    #[must_use]
    pub fn weight(self, weight: Weight) -> Self {
        Self { weight, ..self }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A font family.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Family {
    /// The name of a font family of choice.
    Name(String),

    /// Serif fonts represent the formal text style for a script.
    Serif,

    /// Glyphs in sans-serif fonts, as the term is used in CSS, are generally low
    /// contrast and have stroke endings that are plain, without any flaring,
    /// cross stroke, or other ornamentation.
    #[default]
    SansSerif,

    /// The sole criterion of a monospace font is that all glyphs have the same
    /// fixed width.
    Monospace,
}

/// The weight of some text.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    Light,
    #[default]
    Normal,
    Bold,
}
