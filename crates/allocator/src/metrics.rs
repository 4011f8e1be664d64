//! A [`Measure`] bound to the font of one entry.
use crate::core::measure::{self, REFERENCE};
use crate::core::{Font, Measure};

/// Glyph widths for one [`Font`].
///
/// Measurement failures are logged and reported as `None`; they never
/// abort an allocation.
pub struct Metrics<'a> {
    measure: &'a dyn Measure,
    font: Font,
}

impl<'a> Metrics<'a> {
    /// Binds a [`Measure`] to a [`Font`].
    pub fn new(measure: &'a dyn Measure, font: Font) -> Self {
        Self { measure, font }
    }

    /// Returns the width of `character`, if it can be measured.
    pub fn width(&self, character: char) -> Option<f32> {
        match measure::width(self.measure, character, &self.font) {
            Ok(width) => Some(width),
            Err(error) => {
                log::warn!("Cannot measure {character:?} with {:?}: {error}", self.font);
                None
            }
        }
    }

    /// Returns `true` if `character` is at least half as wide as the
    /// [`REFERENCE`] glyph.
    pub fn is_wide(&self, character: char) -> bool {
        match (self.width(REFERENCE), self.width(character)) {
            (Some(reference), Some(width)) => reference <= 2.0 * width,
            _ => false,
        }
    }
}

impl std::fmt::Debug for Metrics<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}
