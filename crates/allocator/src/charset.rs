//! A small set of case-folded mnemonic keys.

/// A set of ASCII letters and digits, compared case-insensitively.
///
/// Letters occupy bits `0..26`, digits bits `26..36`. Any other character
/// is never a member, and inserting it does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSet(u64);

impl CharSet {
    /// The empty set.
    pub const EMPTY: CharSet = CharSet(0);

    /// Builds a set from the characters of a string.
    pub const fn from_chars(characters: &str) -> Self {
        let bytes = characters.as_bytes();
        let mut bits = 0;
        let mut i = 0;

        while i < bytes.len() {
            if let Some(bit) = bit(bytes[i] as char) {
                bits |= bit;
            }
            i += 1;
        }

        Self(bits)
    }

    /// Adds a character to the set.
    pub fn insert(&mut self, character: char) {
        if let Some(bit) = bit(character) {
            self.0 |= bit;
        }
    }

    /// Returns `true` if the character, case-folded, is in the set.
    pub const fn contains(self, character: char) -> bool {
        match bit(character) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Returns the number of characters in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = CharSet::EMPTY;
        iter.into_iter().for_each(|character| set.insert(character));
        set
    }
}

const fn bit(character: char) -> Option<u64> {
    match character {
        'a'..='z' => Some(1 << (character as u32 - 'a' as u32)),
        'A'..='Z' => Some(1 << (character as u32 - 'A' as u32)),
        '0'..='9' => Some(1 << (26 + character as u32 - '0' as u32)),
        _ => None,
    }
}
