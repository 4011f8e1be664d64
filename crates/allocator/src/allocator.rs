//! Assign mnemonics to a list of sibling entries.
use crate::core::menu::AppMenu;
use crate::core::{Entry, Font, Measure};
use crate::label::Label;
use crate::metrics::Metrics;
use crate::settings::Settings;
use crate::stage::{self, Candidate, State};
use crate::walker;

/// Assigns unique mnemonics to menu entries.
///
/// An [`Allocator`] is stateless between calls: every call starts from
/// scratch and only looks at the entries it is given.
#[derive(Debug, Clone)]
pub struct Allocator<M> {
    measure: M,
    settings: Settings,
}

impl<M> Allocator<M>
where
    M: Measure,
{
    /// Creates an [`Allocator`] with the default [`Settings`].
    pub fn new(measure: M) -> Self {
        Self::with_settings(measure, Settings::default())
    }

    /// Creates an [`Allocator`] with the given [`Settings`].
    pub fn with_settings(measure: M, settings: Settings) -> Self {
        Self { measure, settings }
    }

    /// Returns the [`Settings`] of the [`Allocator`].
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Assigns mnemonics to a list of siblings, without descending into
    /// submenus.
    ///
    /// Existing mnemonics are cleared first. Entries are served in order,
    /// so earlier entries win contested characters. Entries without a
    /// label never get a mnemonic, and neither do entries for which every
    /// stage fails.
    ///
    /// If no font in the list can be measured, the entries are left
    /// untouched.
    pub fn allocate<E>(&self, entries: &mut [E])
    where
        E: Entry,
    {
        if entries.is_empty() {
            return;
        }

        let Some(fallback) = self.fallback_font(entries) else {
            log::debug!(
                "No usable font among {} menu entries, skipping mnemonics",
                entries.len()
            );
            return;
        };

        for entry in entries.iter_mut() {
            entry.set_mnemonic(None);
        }

        let mut state = State::new();

        for entry in entries.iter_mut() {
            let Some(label) = entry.label().filter(|label| !label.is_empty()) else {
                continue;
            };

            let font = entry
                .font()
                .filter(|font| self.measure.is_usable(font))
                .unwrap_or(&fallback)
                .clone();

            let metrics = Metrics::new(&self.measure, font);

            let candidate = Candidate {
                label: Label::new(label, &self.settings.breadcrumbs),
                metrics: &metrics,
                table: &self.settings.table,
            };

            let picked = stage::pick(&candidate, &state);

            match picked {
                Some((mnemonic, stage)) => {
                    log::trace!("Mnemonic {mnemonic:?} for {label:?} ({stage:?})");
                }
                None => {
                    log::debug!("No mnemonic left for {label:?}");
                }
            }

            let mnemonic = picked.map(|(mnemonic, _)| mnemonic);

            if let Some(mnemonic) = mnemonic {
                state.take(mnemonic);
            }

            entry.set_mnemonic(mnemonic);
        }
    }

    /// Assigns mnemonics to a list of siblings and, independently, to the
    /// children of every submenu in it.
    ///
    /// Does nothing if [`Settings::enabled`] is `false`.
    pub fn apply<E>(&self, entries: &mut [E])
    where
        E: Entry,
    {
        if self.settings.enabled {
            walker::walk(self, entries);
        }
    }

    /// Assigns mnemonics to the roots of a menu bar and everything below.
    ///
    /// Does nothing if [`Settings::enabled`] is `false`.
    pub fn apply_menu(&self, menu: &mut AppMenu) {
        self.apply(&mut menu.roots);
    }

    /// Assigns mnemonics inside a submenu, leaving the submenu entry itself
    /// alone.
    ///
    /// Does nothing if the entry is not a submenu or [`Settings::enabled`]
    /// is `false`.
    pub fn apply_inside<E>(&self, entry: &mut E)
    where
        E: Entry,
    {
        if let Some(children) = entry.submenu_mut() {
            self.apply(children);
        }
    }

    /// The font of entries that cannot be measured with their own: the last
    /// usable font of the list, then the default font.
    fn fallback_font<E>(&self, entries: &[E]) -> Option<Font>
    where
        E: Entry,
    {
        entries
            .iter()
            .rev()
            .filter_map(Entry::font)
            .find(|font| self.measure.is_usable(font))
            .or_else(|| {
                self.settings
                    .default_font
                    .as_ref()
                    .filter(|font| self.measure.is_usable(font))
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::font::Family;
    use crate::core::measure::{Uniform, Widths};
    use crate::core::{MenuNode, Mnemonic};
    use crate::table::Table;

    fn settings() -> Settings {
        Settings::default().enabled(true)
    }

    fn items(labels: &[&str]) -> Vec<MenuNode> {
        labels.iter().map(|label| MenuNode::item(*label)).collect()
    }

    fn mnemonics(entries: &[MenuNode]) -> Vec<Option<char>> {
        entries
            .iter()
            .map(|entry| entry.mnemonic.map(Mnemonic::as_char))
            .collect()
    }

    #[test]
    fn test_first_come_first_served() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings().table(Table::empty()));
        let mut entries = items(&["File", "Find", "Format"]);

        allocator.allocate(&mut entries);

        assert_eq!(mnemonics(&entries), vec![Some('F'), Some('i'), Some('o')]);
    }

    #[test]
    fn test_earlier_entries_beat_the_table() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings());
        let mut entries = items(&["Filter", "File"]);

        allocator.allocate(&mut entries);

        assert_eq!(mnemonics(&entries), vec![Some('F'), Some('i')]);
    }

    #[test]
    fn test_predefined_entries() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings());
        let mut entries = items(&["Open", "Open Recent", "Save", "Save As…", "Quit"]);

        allocator.allocate(&mut entries);

        assert_eq!(
            mnemonics(&entries),
            vec![Some('O'), Some('R'), Some('S'), Some('A'), Some('Q')]
        );
    }

    #[test]
    fn test_underscore_neighbours_are_never_chosen() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings());
        let mut entries = items(&["Cut", "Cu_t"]);

        allocator.allocate(&mut entries);

        assert_eq!(mnemonics(&entries), vec![Some('t'), Some('C')]);
    }

    #[test]
    fn test_breadcrumb_is_ignored() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings());
        let mut entries = items(&["sketchbook → My Sketch", "sketchbook → Other"]);

        allocator.allocate(&mut entries);

        assert_eq!(mnemonics(&entries), vec![Some('M'), Some('O')]);
    }

    #[test]
    fn test_digits_as_last_resort() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings());
        let mut entries = items(&["Ab", "ab", "1", "12", "1"]);

        allocator.allocate(&mut entries);

        assert_eq!(
            mnemonics(&entries),
            vec![Some('A'), Some('b'), Some('1'), Some('2'), None]
        );
    }

    #[test]
    fn test_entries_without_label_are_skipped() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings());
        let mut entries = vec![
            MenuNode::item("New"),
            MenuNode::separator(),
            MenuNode::item(""),
            MenuNode::item("Next"),
        ];

        allocator.allocate(&mut entries);

        assert_eq!(mnemonics(&entries), vec![Some('N'), None, None, Some('e')]);
    }

    #[test]
    fn test_previous_mnemonics_are_cleared() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings());
        let mut entries = items(&["Edit", "Kill"]);
        entries[0].mnemonic = Mnemonic::new('K');

        allocator.allocate(&mut entries);

        assert_eq!(mnemonics(&entries), vec![Some('E'), Some('K')]);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let allocator = Allocator::with_settings(
            Widths::new().with('A', 9.0).with_all("il", 3.0).fallback(6.0),
            settings(),
        );
        let mut entries = items(&["File", "Fill", "Filter", "Final", "Fit", "Film 2"]);

        allocator.allocate(&mut entries);
        let first = mnemonics(&entries);

        allocator.allocate(&mut entries);
        assert_eq!(mnemonics(&entries), first);
    }

    #[test]
    fn test_no_usable_font_leaves_entries_untouched() {
        let monospace_only = Widths::new().fallback(1.0).family(Family::Monospace);
        let allocator = Allocator::with_settings(monospace_only, settings());
        let mut entries = items(&["New", "Open"]);
        entries[1].mnemonic = Mnemonic::new('p');

        allocator.allocate(&mut entries);

        assert_eq!(mnemonics(&entries), vec![None, Some('p')]);
    }

    #[test]
    fn test_entries_borrow_a_usable_sibling_font() {
        let monospace_only = Widths::new().fallback(1.0).family(Family::Monospace);
        let allocator =
            Allocator::with_settings(monospace_only, settings().default_font(None));
        let mut entries = vec![
            MenuNode::item("New"),
            MenuNode::item("Open").with_font(Font::DEFAULT),
            MenuNode::item("Print").with_font(Font::MONOSPACE),
        ];

        allocator.allocate(&mut entries);

        assert_eq!(mnemonics(&entries), vec![Some('N'), Some('O'), Some('P')]);
    }

    #[test]
    fn test_empty_list() {
        let allocator = Allocator::with_settings(Uniform(1.0), settings());
        let mut entries: Vec<MenuNode> = Vec::new();

        allocator.allocate(&mut entries);

        assert!(entries.is_empty());
    }
}
