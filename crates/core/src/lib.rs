//! The core library of `icy_mnemonics`.
//!
//! This library holds the basic types that the mnemonic allocator works with:
//! the [`Mnemonic`] itself, the [`menu`] model it annotates, the [`Font`] an
//! entry is rendered with and the [`Measure`] capability used to query glyph
//! advances.
//!
//! It knows nothing about how mnemonics are chosen. That lives in
//! `icy_mnemonics_allocator`.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod entry;
pub mod font;
pub mod measure;
pub mod menu;
pub mod mnemonic;

pub use entry::Entry;
pub use font::Font;
pub use measure::Measure;
pub use menu::{AppMenu, MenuKind, MenuNode};
pub use mnemonic::{
    Mnemonic, ParsedMnemonic, marked_label, mnemonics_enabled, parse_mnemonic, strip_mnemonic,
};
