//! In-memory filter state of one listing-page session.

use crate::filter_selection::{FilterSelection, FilterUpdate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&FilterSelection)>;

/// Holds the current [`FilterSelection`] and notifies subscribers on change.
///
/// Writes that leave the selection unchanged are no-ops: they do not bump
/// [`FilterStore::revision`] and do not notify.
#[derive(Default)]
pub struct FilterStore {
    selection: FilterSelection,
    revision: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterStore")
            .field("selection", &self.selection)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_filter(&mut self, update: FilterUpdate) -> bool {
        let changed = self.selection.apply(update);
        if changed {
            self.changed();
        }
        changed
    }

    pub fn reset_filters(&mut self) -> bool {
        self.replace_selection(FilterSelection::default())
    }

    pub fn replace_selection(&mut self, selection: FilterSelection) -> bool {
        if self.selection == selection {
            return false;
        }
        self.selection = selection;
        self.changed();
        true
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&FilterSelection) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn changed(&mut self) {
        self.revision += 1;
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::filter_selection::{PriceRange, SortBy};

    #[test]
    fn set_filter_bumps_revision_only_on_change() {
        let mut store = FilterStore::new();
        assert!(store.set_filter(FilterUpdate::SortBy(SortBy::Rating)));
        assert_eq!(store.revision(), 1);
        assert!(!store.set_filter(FilterUpdate::SortBy(SortBy::Rating)));
        assert_eq!(store.revision(), 1);
        assert_eq!(store.selection().sort_by, SortBy::Rating);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = FilterStore::new();
        store.set_filter(FilterUpdate::Category(Some("gin".into())));
        store.set_filter(FilterUpdate::PriceRange(PriceRange::new(10, 90)));
        assert!(store.reset_filters());
        assert!(store.selection().is_default());
        assert!(!store.reset_filters());
    }

    #[test]
    fn listeners_see_each_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = FilterStore::new();
        let sink = seen.clone();
        let id = store.subscribe(move |selection| sink.borrow_mut().push(selection.brands().to_vec()));

        store.set_filter(FilterUpdate::ToggleBrand("Hendrick's".into()));
        store.set_filter(FilterUpdate::ToggleBrand("Hendrick's".into()));
        store.set_filter(FilterUpdate::Brands(vec![]));
        assert!(store.unsubscribe(id));
        store.set_filter(FilterUpdate::ToggleBrand("Tanqueray".into()));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], vec!["Hendrick's"]);
        assert!(seen[1].is_empty());
    }

    #[test]
    fn isolated_instances() {
        let mut a = FilterStore::new();
        let mut b = FilterStore::new();
        a.set_filter(FilterUpdate::Category(Some("rum".into())));
        assert!(b.selection().category().is_none());
        assert!(!b.unsubscribe(SubscriptionId(0)));
    }
}
