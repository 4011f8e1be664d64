//! Keyboard mnemonics for menus, without annotating a single label.
//!
//! `icy_mnemonics` takes a menu model and underlines one letter of every
//! entry, unique among its siblings, so the menu can be driven with
//! <kbd>Alt</kbd> and a key:
//!
//! ```
//! use icy_mnemonics::menu::{AppMenu, MenuNode};
//!
//! let mut menu = AppMenu::new(vec![
//!     MenuNode::submenu("File", vec![
//!         MenuNode::item("New"),
//!         MenuNode::item("Open Recent"),
//!         MenuNode::separator(),
//!         MenuNode::item("Quit"),
//!     ]),
//!     MenuNode::submenu("Sketch", vec![
//!         MenuNode::item("Run"),
//!         MenuNode::item("Stop"),
//!     ]),
//! ]);
//!
//! icy_mnemonics::assign(&mut menu);
//!
//! if icy_mnemonics::mnemonics_enabled() {
//!     let file = &menu.roots[0];
//!
//!     assert_eq!(file.marked_label().as_deref(), Some("&File"));
//!     assert_eq!(
//!         file.children().unwrap()[1].marked_label().as_deref(),
//!         Some("Open &Recent")
//!     );
//! }
//! ```
//!
//! The allocation itself lives in [`allocator`]; the menu model, fonts and
//! glyph measurement in [`core`].
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use icy_mnemonics_allocator as allocator;
pub use icy_mnemonics_core as core;

pub use crate::core::font::{self, Font};
pub use crate::core::measure::{self, Measure};
pub use crate::core::menu::{self, AppMenu, MenuNode};
pub use crate::core::{
    Entry, Mnemonic, marked_label, mnemonics_enabled, parse_mnemonic, strip_mnemonic,
};

pub use allocator::{Allocator, Settings, Stage, Table};

/// Assigns mnemonics to a whole menu, measuring glyphs with the
/// [`Heuristic`](measure::Heuristic) metrics and the default [`Settings`].
///
/// Does nothing on platforms without mnemonics.
pub fn assign(menu: &mut AppMenu) {
    assign_with(menu, measure::Heuristic);
}

/// Assigns mnemonics to a whole menu, measuring glyphs with the given
/// [`Measure`] and the default [`Settings`].
///
/// Does nothing on platforms without mnemonics.
pub fn assign_with<M>(menu: &mut AppMenu, measure: M)
where
    M: Measure,
{
    log::debug!("Assigning mnemonics to {} menu roots", menu.roots.len());

    Allocator::new(measure).apply_menu(menu);
}
