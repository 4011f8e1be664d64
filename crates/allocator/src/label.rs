//! Split a menu label into the pieces the stages look at.
use crate::charset::CharSet;

/// A menu label prepared for mnemonic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    full: &'a str,
    focus: &'a str,
    banned: CharSet,
}

impl<'a> Label<'a> {
    /// Prepares a label, stripping the first matching breadcrumb prefix.
    pub fn new<S>(full: &'a str, breadcrumbs: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            full,
            focus: strip_breadcrumb(full, breadcrumbs),
            banned: banned_by_underscores(full),
        }
    }

    /// The label as given.
    pub fn full(&self) -> &'a str {
        self.full
    }

    /// The part of the label candidates are taken from.
    pub fn focus(&self) -> &'a str {
        self.focus
    }

    /// Characters that must never become the mnemonic of this label.
    pub fn banned(&self) -> CharSet {
        self.banned
    }

    /// Returns the first character of every word of the focus.
    ///
    /// Words are runs of alphabetic characters, in any script.
    pub fn initials(self) -> impl Iterator<Item = char> + 'a {
        self.focus
            .split(|c: char| !c.is_alphabetic())
            .filter_map(|word| word.chars().next())
    }

    /// Returns the ASCII letters of the focus, in order.
    pub fn letters(&self) -> Vec<char> {
        self.focus
            .chars()
            .filter(char::is_ascii_alphabetic)
            .collect()
    }

    /// Returns the ASCII digits of the focus, in order.
    pub fn digits(self) -> impl Iterator<Item = char> + 'a {
        self.focus.chars().filter(char::is_ascii_digit)
    }
}

/// Strips the first breadcrumb prefix `label` starts with.
///
/// A breadcrumb like `"sketchbook → "` locates the entry inside a parent;
/// only what follows it is worth a mnemonic.
pub fn strip_breadcrumb<'a, S>(label: &'a str, breadcrumbs: &[S]) -> &'a str
where
    S: AsRef<str>,
{
    breadcrumbs
        .iter()
        .find_map(|breadcrumb| label.strip_prefix(breadcrumb.as_ref()))
        .unwrap_or(label)
}

/// Collects the characters right before and after every underscore.
///
/// An underscore already underlines its neighbours visually, so a mnemonic
/// underline there would be lost.
pub fn banned_by_underscores(label: &str) -> CharSet {
    let chars: Vec<char> = label.chars().collect();
    let mut banned = CharSet::EMPTY;

    for (i, _) in chars.iter().enumerate().filter(|(_, c)| **c == '_') {
        if let Some(previous) = i.checked_sub(1).and_then(|i| chars.get(i)) {
            banned.insert(*previous);
        }

        if let Some(next) = chars.get(i + 1) {
            banned.insert(*next);
        }
    }

    banned
}

#[cfg(test)]
mod tests {
    use super::*;

    const BREADCRUMBS: &[&str] = &["sketchbook → "];

    #[test]
    fn test_breadcrumb_is_stripped() {
        let label = Label::new("sketchbook → My Sketch", BREADCRUMBS);

        assert_eq!(label.full(), "sketchbook → My Sketch");
        assert_eq!(label.focus(), "My Sketch");
        assert_eq!(Label::new("sketchbook", BREADCRUMBS).focus(), "sketchbook");
        assert_eq!(Label::new("My → Sketch", BREADCRUMBS).focus(), "My → Sketch");
    }

    #[test]
    fn test_underscore_neighbours_are_banned() {
        let banned = banned_by_underscores("Cu_t");

        assert!(banned.contains('u'));
        assert!(banned.contains('t'));
        assert!(!banned.contains('c'));
        assert_eq!(banned.len(), 2);
    }

    #[test]
    fn test_underscores_at_the_edges() {
        let banned = banned_by_underscores("_Open_");

        assert!(banned.contains('o'));
        assert!(banned.contains('n'));
        assert_eq!(banned.len(), 2);
        assert!(banned_by_underscores("_").is_empty());
    }

    #[test]
    fn test_banning_scans_the_breadcrumb_too() {
        let label = Label::new("sketch_book → Sketch", &["sketch_book → "]);

        assert_eq!(label.focus(), "Sketch");
        assert!(label.banned().contains('h'));
        assert!(label.banned().contains('b'));
    }

    #[test]
    fn test_initials_split_on_non_alphabetic() {
        let label = Label::new("Save a Copy…", BREADCRUMBS);
        assert_eq!(label.initials().collect::<String>(), "SaC");

        let label = Label::new("Élément 3D-view", BREADCRUMBS);
        assert_eq!(label.initials().collect::<String>(), "ÉDv");
    }

    #[test]
    fn test_letters_and_digits() {
        let label = Label::new("Größe 1:2", BREADCRUMBS);

        assert_eq!(label.letters(), vec!['G', 'r', 'e']);
        assert_eq!(label.digits().collect::<String>(), "12");
    }
}
