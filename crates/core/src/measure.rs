//! Query the rendered advance of single glyphs.
//!
//! The allocator never creates fonts. It only needs to know how wide a
//! character is when drawn with the [`Font`] of the entry being processed,
//! and it gets that through the [`Measure`] trait.
use crate::Font;
use crate::font::{Family, Weight};

use rustc_hash::FxHashMap;

/// The glyph used to decide whether a font context is usable at all, and
/// the reference a glyph has to be at least half as wide as to be
/// considered visually distinctive.
pub const REFERENCE: char = 'A';

/// A measurement error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The font could not be resolved by the measurer.
    #[error("font {0:?} is not available")]
    FontUnavailable(Font),
    /// The font has no glyph for the character.
    #[error("no glyph for {0:?}")]
    MissingGlyph(char),
    /// The measurer reported a width that is not finite and positive.
    #[error("invalid width {width} for {character:?}")]
    InvalidWidth {
        /// The measured character.
        character: char,
        /// The reported width.
        width: f32,
    },
}

/// Reports the rendered advance width of a single character.
pub trait Measure {
    /// Returns the advance width of `character` drawn with `font`.
    ///
    /// Widths only need to be comparable with each other for the same font.
    fn char_width(&self, character: char, font: &Font) -> Result<f32, Error>;

    /// Returns `true` if the [`Font`] can be measured at all.
    fn is_usable(&self, font: &Font) -> bool {
        width(self, REFERENCE, font).is_ok()
    }
}

impl<T> Measure for &T
where
    T: Measure + ?Sized,
{
    fn char_width(&self, character: char, font: &Font) -> Result<f32, Error> {
        (**self).char_width(character, font)
    }

    fn is_usable(&self, font: &Font) -> bool {
        (**self).is_usable(font)
    }
}

impl<T> Measure for Box<T>
where
    T: Measure + ?Sized,
{
    fn char_width(&self, character: char, font: &Font) -> Result<f32, Error> {
        (**self).char_width(character, font)
    }

    fn is_usable(&self, font: &Font) -> bool {
        (**self).is_usable(font)
    }
}

/// Measures `character`, rejecting widths that are not finite and positive.
pub fn width<M>(measure: &M, character: char, font: &Font) -> Result<f32, Error>
where
    M: Measure + ?Sized,
{
    let width = measure.char_width(character, font)?;

    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(Error::InvalidWidth { character, width })
    }
}

/// A [`Measure`] implementation backed by a closure.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Creates a [`Measure`] from a closure.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(char, &Font) -> Result<f32, Error>,
{
    FromFn(f)
}

impl<F> Measure for FromFn<F>
where
    F: Fn(char, &Font) -> Result<f32, Error>,
{
    fn char_width(&self, character: char, font: &Font) -> Result<f32, Error> {
        (self.0)(character, font)
    }
}

/// Every glyph has the same advance, like a terminal cell grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform(pub f32);

impl Default for Uniform {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Measure for Uniform {
    fn char_width(&self, _character: char, _font: &Font) -> Result<f32, Error> {
        Ok(self.0)
    }
}

/// An explicit table of glyph advances.
///
/// Characters without an entry use the fallback width, or fail with
/// [`Error::MissingGlyph`] when there is none. A table can be restricted to a
/// single [`Family`], in which case every other font is unavailable.
#[derive(Debug, Clone, Default)]
pub struct Widths {
    widths: FxHashMap<char, f32>,
    fallback: Option<f32>,
    family: Option<Family>,
}

impl Widths {
    /// Creates an empty [`Widths`] table without a fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the advance of a character.
    #[must_use]
    pub fn with(mut self, character: char, width: f32) -> Self {
        let _ = self.widths.insert(character, width);
        self
    }

    /// Sets the advance of every character in `characters`.
    #[must_use]
    pub fn with_all(mut self, characters: &str, width: f32) -> Self {
        self.widths
            .extend(characters.chars().map(|character| (character, width)));
        self
    }

    /// Sets the advance used for characters without an entry.
    #[must_use]
    pub fn fallback(mut self, width: f32) -> Self {
        self.fallback = Some(width);
        self
    }

    /// Restricts the table to fonts of the given [`Family`].
    #[must_use]
    pub fn family(mut self, family: Family) -> Self {
        self.family = Some(family);
        self
    }
}

impl Measure for Widths {
    fn char_width(&self, character: char, font: &Font) -> Result<f32, Error> {
        if self
            .family
            .as_ref()
            .is_some_and(|family| *family != font.family)
        {
            return Err(Error::FontUnavailable(font.clone()));
        }

        self.widths
            .get(&character)
            .copied()
            .or(self.fallback)
            .ok_or(Error::MissingGlyph(character))
    }
}

/// Approximate advances for common proportional and monospaced fonts.
///
/// Useful when no text shaping backend is around, e.g. in tests or for
/// menus that are rendered by a platform toolkit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heuristic;

impl Heuristic {
    fn em(character: char, family: &Family) -> f32 {
        if matches!(family, Family::Monospace) {
            return 0.6;
        }

        let em = match character {
            ' ' => 0.33,
            '_' | '-' => 0.33,
            '.' | ',' | ':' | ';' | '\'' | '!' => 0.28,
            '(' | ')' | '[' | ']' | '{' | '}' | '/' => 0.33,
            '+' | '*' | '=' | '\\' | '^' | '|' | '~' => 0.45,
            '0'..='9' => 0.56,
            'I' => 0.30,
            'J' => 0.50,
            'M' | 'W' => 0.85,
            'A'..='Z' => 0.65,
            'f' | 't' | 'r' => 0.36,
            'i' | 'j' | 'l' => 0.24,
            'm' => 0.83,
            'w' => 0.75,
            'a'..='z' => 0.53,
            _ => 0.60,
        };

        if matches!(family, Family::Serif) {
            em * 0.95
        } else {
            em
        }
    }
}

impl Measure for Heuristic {
    fn char_width(&self, character: char, font: &Font) -> Result<f32, Error> {
        if character.is_control() {
            return Err(Error::MissingGlyph(character));
        }

        let bold = if font.weight == Weight::Bold { 1.06 } else { 1.0 };

        Ok(Self::em(character, &font.family) * f32::from(font.size) * bold)
    }
}
