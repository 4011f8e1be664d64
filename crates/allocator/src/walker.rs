//! Descend into submenus.
use crate::Allocator;
use crate::core::{Entry, Measure};

/// Allocates the siblings, then the children of every submenu among them.
///
/// Every list of siblings competes only within itself; a submenu's children
/// may reuse the mnemonics of their parent's siblings.
pub fn walk<M, E>(allocator: &Allocator<M>, entries: &mut [E])
where
    M: Measure,
    E: Entry,
{
    allocator.allocate(entries);

    for entry in entries.iter_mut() {
        if let Some(children) = entry.submenu_mut() {
            walk(allocator, children);
        }
    }
}
