//! The fallback chain that picks the mnemonic of a single entry.
//!
//! Each [`Stage`] is a pure function of the entry and the characters
//! already taken by its siblings. The first stage that finds a free
//! character wins.
use crate::charset::CharSet;
use crate::core::Mnemonic;
use crate::label::Label;
use crate::metrics::Metrics;
use crate::rank;
use crate::table::Table;

/// A step of the fallback chain, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The label matches the predefined [`Table`].
    Predefined,
    /// The first uppercase ASCII initial of a word.
    UppercaseInitial,
    /// The first lowercase ASCII initial of a word.
    LowercaseInitial,
    /// The second ASCII letter, if it is wide enough.
    SecondLetter,
    /// The widest free ASCII letter, vowels and descenders penalized.
    Ranked,
    /// The first free digit.
    Digit,
}

impl Stage {
    /// Every stage, in the order they are tried.
    pub const ALL: [Stage; 6] = [
        Stage::Predefined,
        Stage::UppercaseInitial,
        Stage::LowercaseInitial,
        Stage::SecondLetter,
        Stage::Ranked,
        Stage::Digit,
    ];

    /// Runs this stage alone.
    pub fn pick(self, candidate: &Candidate<'_>, state: &State) -> Option<char> {
        match self {
            Stage::Predefined => predefined(candidate, state),
            Stage::UppercaseInitial => initial(candidate, state, char::is_ascii_uppercase),
            Stage::LowercaseInitial => initial(candidate, state, char::is_ascii_lowercase),
            Stage::SecondLetter => second_letter(candidate, state),
            Stage::Ranked => ranked(candidate, state),
            Stage::Digit => digit(candidate, state),
        }
    }
}

/// The characters taken in the current sibling list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    taken: CharSet,
}

impl State {
    /// Creates an empty [`State`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a mnemonic as taken.
    pub fn take(&mut self, mnemonic: Mnemonic) {
        self.taken.insert(mnemonic.key());
    }

    /// Returns the taken characters.
    pub fn taken(&self) -> CharSet {
        self.taken
    }
}

/// Everything the stages need to know about one entry.
#[derive(Debug)]
pub struct Candidate<'a> {
    /// The prepared label.
    pub label: Label<'a>,
    /// Glyph widths in the font of the entry.
    pub metrics: &'a Metrics<'a>,
    /// The predefined mnemonics.
    pub table: &'a Table,
}

impl Candidate<'_> {
    fn is_free(&self, character: char, state: &State) -> bool {
        !state.taken.contains(character) && !self.label.banned().contains(character)
    }
}

/// Runs the chain, returning the chosen mnemonic and the stage that chose it.
pub fn pick(candidate: &Candidate<'_>, state: &State) -> Option<(Mnemonic, Stage)> {
    Stage::ALL.into_iter().find_map(|stage| {
        stage
            .pick(candidate, state)
            .and_then(Mnemonic::new)
            .map(|mnemonic| (mnemonic, stage))
    })
}

fn predefined(candidate: &Candidate<'_>, state: &State) -> Option<char> {
    candidate
        .table
        .lookup(candidate.label.focus())
        .filter(|&character| candidate.is_free(character, state))
}

fn initial(candidate: &Candidate<'_>, state: &State, accept: fn(&char) -> bool) -> Option<char> {
    candidate
        .label
        .initials()
        .filter(|&character| candidate.is_free(character, state))
        .find(accept)
}

fn second_letter(candidate: &Candidate<'_>, state: &State) -> Option<char> {
    let second = candidate.label.letters().get(1).copied()?;

    (candidate.is_free(second, state) && candidate.metrics.is_wide(second)).then_some(second)
}

fn ranked(candidate: &Candidate<'_>, state: &State) -> Option<char> {
    let letters = candidate.label.letters();

    rank::rank(&letters, |character| {
        candidate.metrics.width(character).unwrap_or(0.0)
    })
    .into_iter()
    .find(|&character| candidate.is_free(character, state))
}

fn digit(candidate: &Candidate<'_>, state: &State) -> Option<char> {
    candidate
        .label
        .digits()
        .find(|&character| candidate.is_free(character, state))
}
