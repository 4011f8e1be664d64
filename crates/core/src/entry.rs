//! Abstract over the entries of a menu.
use crate::menu::MenuNode;
use crate::{Font, Mnemonic};

/// An entry of a menu that can carry a [`Mnemonic`].
///
/// The allocator only reads labels and fonts, writes mnemonics and descends
/// into submenus. It never adds or removes entries.
pub trait Entry: Sized {
    /// Returns the label of the entry, or `None` if it has none (e.g. a
    /// separator).
    fn label(&self) -> Option<&str>;

    /// Returns the font the entry is rendered with, if it has its own.
    fn font(&self) -> Option<&Font> {
        None
    }

    /// Replaces the mnemonic of the entry.
    fn set_mnemonic(&mut self, mnemonic: Option<Mnemonic>);

    /// Returns the children of the entry if it is a submenu.
    fn submenu_mut(&mut self) -> Option<&mut [Self]>;
}

impl Entry for MenuNode {
    fn label(&self) -> Option<&str> {
        MenuNode::label(self)
    }

    fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    fn set_mnemonic(&mut self, mnemonic: Option<Mnemonic>) {
        self.mnemonic = mnemonic;
    }

    fn submenu_mut(&mut self) -> Option<&mut [Self]> {
        self.children_mut()
    }
}
