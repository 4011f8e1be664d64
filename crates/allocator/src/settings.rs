//! Configure the allocator.
use crate::core::{Font, mnemonics_enabled};
use crate::table::Table;

/// The breadcrumb prefix of recently opened sketches.
pub const SKETCHBOOK: &str = "sketchbook \u{2192} ";

/// The settings of an [`Allocator`](crate::Allocator).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// The predefined mnemonics, tried before any heuristic.
    ///
    /// By default, the [`KDE`](crate::table::KDE) accelerators.
    pub table: Table,

    /// Label prefixes that locate an entry inside a parent and are never
    /// considered for its mnemonic.
    ///
    /// By default, [`SKETCHBOOK`].
    pub breadcrumbs: Vec<String>,

    /// The font of entries without a font of their own, when none of their
    /// siblings has a usable one either.
    ///
    /// By default, [`Font::DEFAULT`].
    pub default_font: Option<Font>,

    /// Whether mnemonics are assigned at all.
    ///
    /// By default, `false` on macOS, where menus have no mnemonics.
    pub enabled: bool,
}

impl Settings {
    /// Parses [`Settings`] from [RON], using defaults for missing fields.
    ///
    /// ```ron
    /// (
    ///     table: ["&file", "open&recent"],
    ///     breadcrumbs: ["recent → "],
    /// )
    /// ```
    ///
    /// [RON]: https://github.com/ron-rs/ron
    #[cfg(feature = "serde")]
    #[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
    pub fn from_ron(source: &str) -> Result<Self, Error> {
        Ok(ron::from_str(source)?)
    }

    /// Sets the predefined [`Table`].
    #[must_use]
    pub fn table(mut self, table: Table) -> Self {
        self.table = table;
        self
    }

    /// Adds a breadcrumb prefix.
    #[must_use]
    pub fn breadcrumb(mut self, prefix: impl Into<String>) -> Self {
        self.breadcrumbs.push(prefix.into());
        self
    }

    /// Sets the fallback [`Font`].
    #[must_use]
    pub fn default_font(mut self, font: Option<Font>) -> Self {
        self.default_font = font;
        self
    }

    /// Sets whether mnemonics are assigned at all.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            table: Table::kde(),
            breadcrumbs: vec![SKETCHBOOK.to_owned()],
            default_font: Some(Font::DEFAULT),
            enabled: mnemonics_enabled(),
        }
    }
}

/// A settings error.
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The settings could not be parsed.
    #[error("invalid settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.table, Table::kde());
        assert_eq!(settings.breadcrumbs, vec!["sketchbook → ".to_owned()]);
        assert_eq!(settings.default_font, Some(Font::DEFAULT));
        assert_eq!(settings.enabled, !cfg!(target_os = "macos"));
    }

    #[test]
    fn test_builder() {
        let settings = Settings::default()
            .table(Table::empty())
            .breadcrumb("recent → ")
            .default_font(None)
            .enabled(true);

        assert!(settings.table.is_empty());
        assert_eq!(settings.breadcrumbs.len(), 2);
        assert_eq!(settings.default_font, None);
        assert!(settings.enabled);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_ron() {
        let settings = Settings::from_ron(
            r#"(
                table: ["&file", "open&recent"],
                breadcrumbs: [],
                enabled: true,
            )"#,
        )
        .unwrap();

        assert_eq!(settings.table.len(), 2);
        assert_eq!(settings.table.lookup("Open Recent"), Some('R'));
        assert!(settings.breadcrumbs.is_empty());
        assert_eq!(settings.default_font, Some(Font::DEFAULT));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_ron_rejects_invalid_templates() {
        assert!(Settings::from_ron(r#"(table: ["file"])"#).is_err());
    }
}
