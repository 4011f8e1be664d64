//! Predefined mnemonics for well-known menu entries.
//!
//! A [`Table`] is an ordered list of templates. Every template is a lowercase
//! phrase with its letters only, where `&` marks the mnemonic:
//!
//! - `"&file"` gives "File" the mnemonic `F`.
//! - `"open&recent"` gives "Open Recent…" the mnemonic `R`.
//! - `".+&handbook"` matches any label ending in "handbook", like
//!   "Sketch Handbook". A leading or trailing `.+` stands for one or more
//!   letters.
//! - `"&configure*"` repeats the last letter zero or more times.
//!
//! Labels are normalized the same way before comparison: everything but
//! ASCII letters is dropped and the rest is lowercased. The first template
//! that matches wins.
use std::fmt;
use std::sync::{Arc, LazyLock};

const MARKER: char = '&';
const WILDCARD: &str = ".+";
const REPEAT: char = '*';

/// The accelerators recommended by the KDE human interface guidelines.
///
/// Every template appears once; a repeated template could never match
/// before its first occurrence. `"&about.+"` extends the "About" entry to
/// any application name.
pub const KDE: &[&str] = &[
    "&file",
    "&new",
    "&open",
    "open&recent",
    "&save",
    "save&as",
    "saveacop&y",
    "saveas&template",
    "savea&ll",
    "reloa&d",
    "&print",
    "printpre&view",
    "&import",
    "e&xport",
    "&closefile",
    "clos&eallfiles",
    "&quit",
    "&edit",
    "&undo",
    "re&do",
    "cu&t&",
    "&copy",
    "&paste",
    "&delete",
    "select&all",
    "dese&lect",
    "&find",
    "find&next",
    "findpre&vious",
    "&replace",
    "&gotoline",
    "&view",
    "&newview",
    "close&allviews",
    "&splitview",
    "&removeview",
    "splitter&orientation",
    "&horizontal",
    "&vertical",
    "view&mode",
    "&fullscreenmode",
    "&zoom",
    "zoom&in",
    "zoom&out",
    "zoomtopage&width",
    "zoomwhole&page",
    "zoom&factor",
    "&insert",
    "&format",
    "&go",
    "&up",
    "&back",
    "&forward",
    "&home",
    "&previouspage",
    "&nextpage",
    "&firstpage",
    "&lastpage",
    "read&updocument",
    "read&downdocument",
    "&gotopage",
    "&bookmarks",
    "&addbookmark",
    "bookmark&tabsasfolder",
    "&editbookmarks",
    "&newbookmarksfolder",
    "&tools",
    "&settings",
    "&toolbars",
    "configure&shortcuts",
    "configuretool&bars",
    "&configure*",
    "&help",
    ".+&handbook",
    "&whatsthis",
    "report&bug",
    "&aboutprocessing",
    "about&kde",
    "&about.+",
    "&beenden",
];

static DEFAULT: LazyLock<Table> = LazyLock::new(|| {
    Table::from_patterns(
        KDE.iter()
            .filter_map(|template| Pattern::parse(template).ok())
            .collect(),
    )
});

/// A template error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The template has no letters.
    #[error("template {0:?} is empty")]
    Empty(String),
    /// The template does not mark a mnemonic.
    #[error("template {0:?} does not mark a mnemonic with '&'")]
    MissingMarker(String),
    /// The marker is not followed by a lowercase ASCII letter.
    #[error("the '&' of template {0:?} must be followed by a lowercase ASCII letter")]
    InvalidMarker(String),
    /// The template contains something other than lowercase ASCII letters.
    #[error("template {template:?} contains {character:?}")]
    InvalidCharacter {
        /// The offending template.
        template: String,
        /// The offending character.
        character: char,
    },
}

/// A compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    template: String,
    letters: String,
    mnemonic: usize,
    leading: bool,
    trailing: bool,
    repeat_last: bool,
}

impl Pattern {
    /// Compiles a template.
    pub fn parse(template: &str) -> Result<Self, Error> {
        let mut rest = template;

        let leading = if let Some(stripped) = rest.strip_prefix(WILDCARD) {
            rest = stripped;
            true
        } else {
            false
        };

        let trailing = if let Some(stripped) = rest.strip_suffix(WILDCARD) {
            rest = stripped;
            true
        } else {
            false
        };

        let repeat_last = if let Some(stripped) = rest.strip_suffix(REPEAT) {
            rest = stripped;
            true
        } else {
            false
        };

        let mut letters = String::with_capacity(rest.len());
        let mut mnemonic = None;
        let mut chars = rest.chars().peekable();

        while let Some(c) = chars.next() {
            if c == MARKER {
                // Only the first marker counts, stray ones are dropped
                if mnemonic.is_none() {
                    if !chars.peek().is_some_and(char::is_ascii_lowercase) {
                        return Err(Error::InvalidMarker(template.to_owned()));
                    }

                    mnemonic = Some(letters.len());
                }
            } else if c.is_ascii_lowercase() {
                letters.push(c);
            } else {
                return Err(Error::InvalidCharacter {
                    template: template.to_owned(),
                    character: c,
                });
            }
        }

        if letters.is_empty() {
            return Err(Error::Empty(template.to_owned()));
        }

        let mnemonic = mnemonic.ok_or_else(|| Error::MissingMarker(template.to_owned()))?;

        Ok(Self {
            template: template.to_owned(),
            letters,
            mnemonic,
            leading,
            trailing,
            repeat_last,
        })
    }

    /// Returns the template this [`Pattern`] was compiled from.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Matches a normalized label, returning the index of the mnemonic in it.
    pub fn matches(&self, normalized: &str) -> Option<usize> {
        let text = normalized.as_bytes();
        let letters = self.letters.as_bytes();

        let (core, last) = match letters.split_last() {
            Some((last, core)) if self.repeat_last => (core, Some(*last)),
            _ => (letters, None),
        };

        let first = usize::from(self.leading);
        let starts = if self.leading { text.len() } else { 0 };

        (first..=starts).find_map(|start| {
            if !text.get(start..)?.starts_with(core) {
                return None;
            }

            let mut end = start + core.len();

            if let Some(last) = last {
                while text.get(end) == Some(&last) {
                    end += 1;
                }
            }

            let remainder = text.len() - end;
            let complete = if self.trailing {
                remainder > 0
            } else {
                remainder == 0
            };

            let index = start + self.mnemonic;

            (complete && index < end).then_some(index)
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// An ordered table of predefined mnemonics.
///
/// Cloning is cheap; the default table is compiled once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>"))]
pub struct Table {
    patterns: Arc<[Pattern]>,
}

impl Table {
    /// Compiles a table from templates, keeping their order.
    pub fn new<I>(templates: I) -> Result<Self, Error>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let patterns = templates
            .into_iter()
            .map(|template| Pattern::parse(template.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_patterns(patterns))
    }

    /// A table without any entry.
    pub fn empty() -> Self {
        Self::from_patterns(Vec::new())
    }

    /// The table of [`KDE`] accelerators.
    pub fn kde() -> Self {
        DEFAULT.clone()
    }

    fn from_patterns(patterns: Vec<Pattern>) -> Self {
        Self {
            patterns: patterns.into(),
        }
    }

    /// Returns the compiled patterns, in priority order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Returns the number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if the table has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Looks up the predefined mnemonic of a label.
    ///
    /// The returned character is the letter of `label` at the marked
    /// position, so it keeps the case it has in the label.
    pub fn lookup(&self, label: &str) -> Option<char> {
        let letters: Vec<char> = label.chars().filter(char::is_ascii_alphabetic).collect();

        if letters.is_empty() {
            return None;
        }

        let normalized: String = letters.iter().map(char::to_ascii_lowercase).collect();

        self.patterns
            .iter()
            .find_map(|pattern| pattern.matches(&normalized))
            .and_then(|index| letters.get(index).copied())
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::kde()
    }
}

impl TryFrom<Vec<String>> for Table {
    type Error = Error;

    fn try_from(templates: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(templates)
    }
}
