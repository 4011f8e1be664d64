//! Order candidate characters by how clearly they can be underlined.
use crate::charset::CharSet;

/// Descenders and vowels.
///
/// An underline under a descender collides with the glyph, and vowels are
/// poor mnemonics in most guidelines, so both are treated as narrower than
/// they are.
pub const PENALIZED: CharSet = CharSet::from_chars("qypgjaeiou");

/// The factor applied to the width of a [`PENALIZED`] character.
pub const PENALTY: f32 = 0.66;

/// Returns the width of `character` as seen by the ranking.
pub fn adjusted_width(character: char, width: f32) -> f32 {
    if PENALIZED.contains(character) {
        width * PENALTY
    } else {
        width
    }
}

/// Sorts `candidates` from most to least preferred.
///
/// Wider characters come first. Characters of equal adjusted width keep
/// their original order.
pub fn rank<F>(candidates: &[char], width: F) -> Vec<char>
where
    F: Fn(char) -> f32,
{
    let mut ranked: Vec<(char, f32)> = candidates
        .iter()
        .map(|&character| (character, adjusted_width(character, width(character))))
        .collect();

    ranked.sort_by(|(_, a), (_, b)| b.total_cmp(a));

    ranked.into_iter().map(|(character, _)| character).collect()
}
