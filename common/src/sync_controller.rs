//! Two-way reconciliation between the filter store and the address bar.
//!
//! The URL wins on navigation (including back/forward), the store wins on
//! interactive changes. Store-driven writes always *replace* the current
//! history entry.

use crate::{
    filter_selection::{FilterSelection, FilterUpdate},
    filter_store::FilterStore,
    url_codec,
};

/// The navigation primitive the controller writes through.
pub trait Navigator {
    /// Current query string, with or without the leading `?`.
    fn current_query(&self) -> String;
    /// Replaces the current history entry's query string.
    fn replace_query(&mut self, query: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    ApplyingFromUrl,
    ApplyingFromStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// The store write came from a URL pass still in progress.
    ApplyingFromUrl,
    /// No URL pass has completed yet; the initial URL must not be overwritten.
    AwaitingInitialUrl,
    /// The store still holds exactly what the last URL pass wrote.
    SelfInflicted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    StoreUpdated,
    UrlReplaced(String),
    Unchanged,
    Suppressed(SuppressReason),
}

#[derive(Debug)]
pub struct SyncController<N: Navigator> {
    store: FilterStore,
    navigator: N,
    phase: SyncPhase,
    initial_url_applied: bool,
    // store revision written by the most recent URL pass
    url_revision: Option<u64>,
}

impl<N: Navigator> SyncController<N> {
    pub fn new(store: FilterStore, navigator: N) -> Self {
        Self {
            store,
            navigator,
            phase: SyncPhase::Idle,
            initial_url_applied: false,
            url_revision: None,
        }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Direct store access. Writes made here are picked up by the next [`Self::store_changed`].
    pub fn store_mut(&mut self) -> &mut FilterStore {
        &mut self.store
    }

    pub fn selection(&self) -> &FilterSelection {
        self.store.selection()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn initial_url_applied(&self) -> bool {
        self.initial_url_applied
    }

    /// URL -> Store pass. Call whenever the navigation signal changes.
    pub fn url_changed(&mut self) -> SyncOutcome {
        self.phase = SyncPhase::ApplyingFromUrl;
        let query = self.navigator.current_query();
        let decoded = url_codec::decode(&query);
        let updated = self.store.replace_selection(decoded);
        self.url_revision = Some(self.store.revision());
        self.initial_url_applied = true;
        self.phase = SyncPhase::Idle;

        if updated {
            tracing::debug!("filters updated from url: {:?}", query);
            SyncOutcome::StoreUpdated
        } else {
            SyncOutcome::Unchanged
        }
    }

    /// Store -> URL pass. Call whenever the store reports a change.
    pub fn store_changed(&mut self) -> SyncOutcome {
        // only observable by hosts that forward store notifications back in
        // while a URL pass is still running; `url_changed` itself never does
        if self.phase == SyncPhase::ApplyingFromUrl {
            return SyncOutcome::Suppressed(SuppressReason::ApplyingFromUrl);
        }
        if !self.initial_url_applied {
            return SyncOutcome::Suppressed(SuppressReason::AwaitingInitialUrl);
        }
        if self.url_revision == Some(self.store.revision()) {
            return SyncOutcome::Suppressed(SuppressReason::SelfInflicted);
        }

        self.phase = SyncPhase::ApplyingFromStore;
        let current = self.navigator.current_query();
        let next = url_codec::merge_into(&current, self.store.selection());
        let outcome = if next == url_codec::canonicalize(&current) {
            SyncOutcome::Unchanged
        } else {
            tracing::debug!("replacing url query {:?} with {:?}", current, next);
            self.navigator.replace_query(&next);
            SyncOutcome::UrlReplaced(next)
        };
        self.phase = SyncPhase::Idle;
        outcome
    }

    /// Interactive change to one filter field.
    pub fn apply(&mut self, update: FilterUpdate) -> SyncOutcome {
        if !self.store.set_filter(update) {
            return SyncOutcome::Unchanged;
        }
        self.store_changed()
    }

    /// Interactive "reset all".
    pub fn reset(&mut self) -> SyncOutcome {
        if !self.store.reset_filters() {
            return SyncOutcome::Unchanged;
        }
        self.store_changed()
    }
}

/// In-memory history for hosts without a browser address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
    replace_count: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl MemoryHistory {
    pub fn new(initial_query: &str) -> Self {
        Self {
            entries: vec![initial_query.to_string()],
            cursor: 0,
            replace_count: 0,
        }
    }

    /// A user navigation: drops forward entries and adds a new one.
    pub fn push(&mut self, query: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query.to_string());
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn replace_count(&self) -> usize {
        self.replace_count
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Navigator for MemoryHistory {
    fn current_query(&self) -> String {
        self.entries[self.cursor].clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.entries[self.cursor] = query.to_string();
        self.replace_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_selection::{PriceRange, SortBy};

    fn controller(initial: &str) -> SyncController<MemoryHistory> {
        SyncController::new(FilterStore::new(), MemoryHistory::new(initial))
    }

    #[test]
    fn initial_url_hydrates_store() {
        let mut sync = controller("?category=whiskey&minPrice=50&sort=price_asc");
        assert_eq!(sync.url_changed(), SyncOutcome::StoreUpdated);
        let selection = sync.selection();
        assert_eq!(selection.category(), Some("whiskey"));
        assert_eq!(selection.price_range, PriceRange::new(50, 2000));
        assert_eq!(selection.sort_by, SortBy::PriceAsc);
        assert_eq!(sync.phase(), SyncPhase::Idle);
    }

    #[test]
    fn store_changes_wait_for_initial_url() {
        let mut sync = controller("?brand=Ardbeg");
        assert!(!sync.initial_url_applied());
        sync.store_mut().set_filter(FilterUpdate::SortBy(SortBy::Rating));
        assert_eq!(
            sync.store_changed(),
            SyncOutcome::Suppressed(SuppressReason::AwaitingInitialUrl)
        );
        assert_eq!(sync.navigator().current_query(), "?brand=Ardbeg");
        assert_eq!(sync.navigator().replace_count(), 0);

        sync.url_changed();
        assert!(sync.initial_url_applied());
        assert_eq!(sync.selection().brands(), ["Ardbeg"]);
    }

    #[test]
    fn url_pass_does_not_echo_back() {
        let mut sync = controller("");
        sync.url_changed();
        sync.navigator_mut().push("?category=gin&brand=Tanqueray");
        assert_eq!(sync.url_changed(), SyncOutcome::StoreUpdated);
        // the deferred store notification for the URL write
        assert_eq!(
            sync.store_changed(),
            SyncOutcome::Suppressed(SuppressReason::SelfInflicted)
        );
        assert_eq!(sync.navigator().replace_count(), 0);
        assert_eq!(sync.navigator().len(), 2);
    }

    #[test]
    fn interactive_sort_replaces_url() {
        let mut sync = controller("?category=whiskey&sort=price_asc");
        sync.url_changed();
        let outcome = sync.apply(FilterUpdate::SortBy(SortBy::Rating));
        assert_eq!(outcome, SyncOutcome::UrlReplaced("category=whiskey&sort=rating".to_string()));
        assert_eq!(sync.navigator().current_query(), "category=whiskey&sort=rating");
        assert_eq!(sync.navigator().len(), 1);
        assert_eq!(sync.navigator().replace_count(), 1);
        assert_eq!(sync.phase(), SyncPhase::Idle);

        // the router reports our own replace back
        assert_eq!(sync.url_changed(), SyncOutcome::Unchanged);
        assert_eq!(sync.navigator().replace_count(), 1);
    }

    #[test]
    fn interactive_change_keeps_search_text() {
        let mut sync = controller("q=islay&page=3");
        sync.url_changed();
        sync.apply(FilterUpdate::ToggleBrand("Laphroaig".into()));
        assert_eq!(sync.navigator().current_query(), "q=islay&page=3&brand=Laphroaig");
    }

    #[test]
    fn back_navigation_restores_store() {
        let mut sync = controller("?category=rum");
        sync.url_changed();
        sync.navigator_mut().push("?category=gin");
        sync.url_changed();
        assert_eq!(sync.selection().category(), Some("gin"));

        assert!(sync.navigator_mut().back());
        assert_eq!(sync.url_changed(), SyncOutcome::StoreUpdated);
        assert_eq!(sync.selection().category(), Some("rum"));
        assert_eq!(sync.store_changed(), SyncOutcome::Suppressed(SuppressReason::SelfInflicted));

        assert!(sync.navigator_mut().forward());
        sync.url_changed();
        assert_eq!(sync.selection().category(), Some("gin"));
        assert_eq!(sync.navigator().replace_count(), 0);
    }

    #[test]
    fn non_canonical_url_is_left_alone_when_equivalent() {
        let mut sync = controller("sort=relevance&minPrice=0");
        sync.url_changed();
        sync.store_mut().set_filter(FilterUpdate::Brands(vec![]));
        assert_eq!(sync.store_changed(), SyncOutcome::Suppressed(SuppressReason::SelfInflicted));
        assert_eq!(sync.apply(FilterUpdate::SortBy(SortBy::Relevance)), SyncOutcome::Unchanged);
        assert_eq!(sync.navigator().replace_count(), 0);
    }

    #[test]
    fn reset_clears_filter_params() {
        let mut sync = controller("q=gin&brand=A&brand=B&maxPrice=80");
        sync.url_changed();
        assert_eq!(sync.reset(), SyncOutcome::UrlReplaced("q=gin".to_string()));
        assert!(sync.selection().is_default());
        assert_eq!(sync.reset(), SyncOutcome::Unchanged);
    }

    #[test]
    fn malformed_url_degrades_to_defaults() {
        let mut sync = controller("minPrice=abc&sort=bogus");
        assert_eq!(sync.url_changed(), SyncOutcome::Unchanged);
        assert!(sync.selection().is_default());
    }

    #[test]
    fn memory_history_push_truncates_forward() {
        let mut history = MemoryHistory::new("a");
        history.push("b");
        history.push("c");
        assert!(history.back());
        assert!(history.back());
        assert!(!history.back());
        history.push("d");
        assert_eq!(history.entries(), ["a", "d"]);
        assert!(!history.forward());
    }
}
