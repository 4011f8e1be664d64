//! Mnemonic characters and the '&' marker convention.
//!
//! Labels use '&' as the mnemonic marker (e.g., "&File" underlines 'F').
//! Use "&&" for a literal ampersand.

use std::borrow::Cow;
use std::fmt;

const MARKER: char = '&';

/// A keyboard mnemonic: a single ASCII letter or digit of a menu label.
///
/// The character keeps the case it has in the label it was taken from, so
/// it can be underlined in place. Two mnemonics collide when their
/// [`key`](Self::key)s are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "char", into = "char"))]
pub struct Mnemonic(char);

impl Mnemonic {
    /// Creates a [`Mnemonic`] from an ASCII letter or digit.
    ///
    /// Returns `None` for any other character.
    #[must_use]
    pub const fn new(character: char) -> Option<Self> {
        if character.is_ascii_alphanumeric() {
            Some(Self(character))
        } else {
            None
        }
    }

    /// Returns the character, in the case it was assigned with.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns the case-folded key used for collision checks and key matching.
    #[must_use]
    pub const fn key(self) -> char {
        self.0.to_ascii_lowercase()
    }

    /// Returns `true` if this is a digit accelerator.
    #[must_use]
    pub const fn is_digit(self) -> bool {
        self.0.is_ascii_digit()
    }

    /// Returns `true` if the given key press should trigger this mnemonic.
    #[must_use]
    pub fn matches(self, character: char) -> bool {
        self.0.eq_ignore_ascii_case(&character)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The character is not an ASCII letter or digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0:?} cannot be used as a mnemonic")]
pub struct InvalidMnemonic(pub char);

impl TryFrom<char> for Mnemonic {
    type Error = InvalidMnemonic;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::new(character).ok_or(InvalidMnemonic(character))
    }
}

impl From<Mnemonic> for char {
    fn from(mnemonic: Mnemonic) -> Self {
        mnemonic.0
    }
}

/// Parsed mnemonic information from a label.
#[derive(Debug, Clone)]
pub struct ParsedMnemonic<'a> {
    /// The display text with mnemonic marker removed.
    pub display_text: Cow<'a, str>,
    /// The marked mnemonic, if it is an ASCII letter or digit.
    pub mnemonic: Option<Mnemonic>,
    /// Byte index of the underlined character in `display_text`.
    pub underline_index: Option<usize>,
}

/// Parse a label for mnemonic marker ('&').
///
/// # Examples
/// - `"&File"` → `("File", Some('F'), Some(0))`
/// - `"E&xit"` → `("Exit", Some('x'), Some(1))`
/// - `"Save && Close"` → `("Save & Close", None, None)` (escaped)
/// - `"No mnemonic"` → `("No mnemonic", None, None)`
pub fn parse_mnemonic(label: &str) -> ParsedMnemonic<'_> {
    let mut result = String::with_capacity(label.len());
    let mut mnemonic = None;
    let mut underline_index = None;
    let mut chars = label.chars().peekable();

    while let Some(c) = chars.next() {
        if c == MARKER {
            if chars.peek() == Some(&MARKER) {
                // Escaped marker (&&) -> single &
                result.push(MARKER);
                let _ = chars.next();
            } else if let Some(next) = chars.next() {
                // Only the first marker counts
                if underline_index.is_none() {
                    underline_index = Some(result.len());
                    mnemonic = Mnemonic::new(next);
                }
                result.push(next);
            }
        } else {
            result.push(c);
        }
    }

    ParsedMnemonic {
        display_text: if result == label {
            Cow::Borrowed(label)
        } else {
            Cow::Owned(result)
        },
        mnemonic,
        underline_index,
    }
}

/// Strips mnemonic markers ('&') from a label, unescaping "&&".
pub fn strip_mnemonic(label: &str) -> Cow<'_, str> {
    parse_mnemonic(label).display_text
}

/// Writes a mnemonic back into a plain label using the '&' marker.
///
/// Literal ampersands are escaped as "&&". The marker is placed before the
/// first occurrence of the mnemonic with the same case, falling back to the
/// first case-insensitive occurrence. If the label does not contain the
/// mnemonic at all, the escaped label is returned unmarked.
///
/// # Examples
/// - `("File", 'F')` → `"&File"`
/// - `("Save & Close", 'C')` → `"Save && &Close"`
pub fn marked_label(label: &str, mnemonic: Option<Mnemonic>) -> String {
    let position = mnemonic.and_then(|mnemonic| {
        label
            .find(mnemonic.as_char())
            .or_else(|| label.find(|c: char| mnemonic.matches(c)))
    });

    let mut result = String::with_capacity(label.len() + 2);

    for (index, c) in label.char_indices() {
        if Some(index) == position {
            result.push(MARKER);
        }

        if c == MARKER {
            result.push(MARKER);
        }

        result.push(c);
    }

    result
}

/// Check if mnemonics are enabled on the current platform.
///
/// Mnemonics are enabled on Windows and Linux, but disabled on macOS
/// (which uses Cmd-based shortcuts instead of Alt-based mnemonics).
#[inline]
pub fn mnemonics_enabled() -> bool {
    !cfg!(target_os = "macos")
}
