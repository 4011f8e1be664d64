//! Assign keyboard mnemonics to menus automatically.
//!
//! Menu labels do not need to be annotated up front. Every entry of a list
//! of siblings is given a unique ASCII letter or digit by trying, in order:
//!
//! 1. A [predefined](table) mnemonic for well-known entries ("Save &As").
//! 2. The first uppercase initial of a word.
//! 3. The first lowercase initial of a word.
//! 4. The second letter, if it is not too thin to underline.
//! 5. The widest remaining letter, with vowels and descenders [penalized](rank).
//! 6. The first remaining digit.
//!
//! Earlier entries win. An entry for which every stage fails keeps no
//! mnemonic.
//!
//! ```
//! use icy_mnemonics_allocator::{Allocator, Settings};
//! use icy_mnemonics_allocator::core::measure::Heuristic;
//! use icy_mnemonics_allocator::core::MenuNode;
//!
//! let allocator = Allocator::with_settings(Heuristic, Settings::default().enabled(true));
//!
//! let mut entries = vec![
//!     MenuNode::item("File"),
//!     MenuNode::item("Find"),
//! ];
//!
//! allocator.apply(&mut entries);
//!
//! assert_eq!(entries[0].mnemonic.map(|m| m.as_char()), Some('F'));
//! assert_eq!(entries[1].mnemonic.map(|m| m.as_char()), Some('n'));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_mnemonics_core as core;

pub mod allocator;
pub mod charset;
pub mod label;
pub mod metrics;
pub mod rank;
pub mod settings;
pub mod stage;
pub mod table;
pub mod walker;

pub use allocator::Allocator;
pub use settings::Settings;
pub use stage::Stage;
pub use table::Table;
