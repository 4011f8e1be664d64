//! Application menu model.
//!
//! This module defines a platform-agnostic representation of an application's
//! menus, annotated with the [`Mnemonic`] of every entry. Menus are built by
//! the application and handed to the allocator, which fills in the mnemonics:
//!
//! ```
//! use icy_mnemonics_core::menu::{AppMenu, MenuNode};
//!
//! let menu = AppMenu::new(vec![
//!     MenuNode::submenu("File", vec![
//!         MenuNode::item("New"),
//!         MenuNode::item("Open"),
//!         MenuNode::separator(),
//!         MenuNode::item("Save"),
//!     ]),
//!     MenuNode::submenu("Edit", vec![MenuNode::item("Undo")]),
//! ]);
//!
//! assert_eq!(menu.roots.len(), 2);
//! ```
use crate::{Font, Mnemonic, marked_label};

/// A full application menu model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppMenu {
    /// Top-level menu roots (e.g. File/Edit/View/Window/Help).
    pub roots: Vec<MenuNode>,
}

impl AppMenu {
    /// Creates a new [`AppMenu`].
    #[must_use]
    pub fn new(roots: Vec<MenuNode>) -> Self {
        Self { roots }
    }

    /// Clears every mnemonic in the whole menu tree.
    pub fn clear_mnemonics(&mut self) {
        self.roots.iter_mut().for_each(MenuNode::clear_mnemonics);
    }
}

/// A menu node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuNode {
    /// Node contents.
    pub kind: MenuKind,
    /// The keyboard mnemonic of this node, if any.
    pub mnemonic: Option<Mnemonic>,
    /// The font the label is rendered with.
    ///
    /// `None` means the font of the surrounding menu.
    pub font: Option<Font>,
}

impl MenuNode {
    /// Creates a new [`MenuNode`] without mnemonic.
    #[must_use]
    pub fn new(kind: MenuKind) -> Self {
        Self {
            kind,
            mnemonic: None,
            font: None,
        }
    }

    /// Creates a clickable menu item [`MenuNode`].
    #[must_use]
    pub fn item(label: impl Into<String>) -> Self {
        Self::new(MenuKind::Item { label: label.into() })
    }

    /// Creates a checkbox menu item [`MenuNode`].
    #[must_use]
    pub fn check_item(label: impl Into<String>, checked: bool) -> Self {
        Self::new(MenuKind::CheckItem {
            label: label.into(),
            checked,
        })
    }

    /// Creates a submenu [`MenuNode`].
    #[must_use]
    pub fn submenu(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        Self::new(MenuKind::Submenu {
            label: label.into(),
            children,
        })
    }

    /// Creates a separator [`MenuNode`].
    #[must_use]
    pub fn separator() -> Self {
        Self::new(MenuKind::Separator)
    }

    /// Sets the font of this node.
    #[must_use]
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Returns the label of this node, or `None` for separators.
    pub fn label(&self) -> Option<&str> {
        match &self.kind {
            MenuKind::Item { label }
            | MenuKind::CheckItem { label, .. }
            | MenuKind::Submenu { label, .. } => Some(label.as_str()),
            MenuKind::Separator => None,
        }
    }

    /// Returns the label with its mnemonic written back as an '&' marker.
    ///
    /// This is the form understood by the '&'-marker menu widgets.
    pub fn marked_label(&self) -> Option<String> {
        self.label().map(|label| marked_label(label, self.mnemonic))
    }

    /// Returns the children of this node if it is a submenu.
    pub fn children(&self) -> Option<&[MenuNode]> {
        match &self.kind {
            MenuKind::Submenu { children, .. } => Some(children.as_slice()),
            _ => None,
        }
    }

    /// Returns the children of this node mutably if it is a submenu.
    pub fn children_mut(&mut self) -> Option<&mut [MenuNode]> {
        match &mut self.kind {
            MenuKind::Submenu { children, .. } => Some(children.as_mut_slice()),
            _ => None,
        }
    }

    /// Returns `true` if this node is a submenu.
    pub fn is_submenu(&self) -> bool {
        matches!(self.kind, MenuKind::Submenu { .. })
    }

    /// Clears the mnemonic of this node and all of its descendants.
    pub fn clear_mnemonics(&mut self) {
        self.mnemonic = None;

        if let Some(children) = self.children_mut() {
            children.iter_mut().for_each(MenuNode::clear_mnemonics);
        }
    }
}

/// The concrete type of a menu node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MenuKind {
    /// A clickable menu item.
    Item {
        /// Text label.
        label: String,
    },

    /// A clickable menu item with a checkmark.
    CheckItem {
        /// Text label.
        label: String,
        /// Whether the item is checked.
        checked: bool,
    },

    /// A submenu.
    Submenu {
        /// Text label.
        label: String,
        /// Child menu nodes.
        children: Vec<MenuNode>,
    },

    /// A separator/divider.
    Separator,
}
