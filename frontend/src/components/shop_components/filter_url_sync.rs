//! Keeps the listing page's filter store and the router URL in step.

use common::{
    filter_selection::{FilterSelection, FilterUpdate},
    filter_store::FilterStore,
    sync_controller::{Navigator, SyncController, SyncOutcome},
};
use dioxus::{logger::tracing, prelude::*};

use crate::{data_definitions::filter_query::FilterQuery, routes::ListingKind};

/// [`Navigator`] over the dioxus router. Replaces, never pushes.
#[derive(Debug)]
pub struct RouterNavigator {
    kind: ListingKind,
    query: String,
}

impl RouterNavigator {
    pub fn new(kind: ListingKind, query: String) -> Self {
        Self { kind, query }
    }

    /// Records the query the router is now showing.
    pub fn observe(&mut self, query: &str) {
        self.query = query.to_string();
    }
}

impl Navigator for RouterNavigator {
    fn current_query(&self) -> String {
        self.query.clone()
    }

    fn replace_query(&mut self, query: &str) {
        self.query = query.to_string();
        navigator().replace(self.kind.route(FilterQuery::from(query)));
    }
}

#[derive(Clone, Copy)]
pub struct FilterSyncContext {
    controller: Signal<SyncController<RouterNavigator>>,
    selection: Memo<FilterSelection>,
}

impl FilterSyncContext {
    pub fn selection(&self) -> Memo<FilterSelection> {
        self.selection
    }

    pub fn apply(&self, update: FilterUpdate) {
        let mut controller = self.controller;
        let outcome = controller.write().apply(update);
        log_outcome("store -> url", &outcome);
    }

    pub fn reset(&self) {
        let mut controller = self.controller;
        let outcome = controller.write().reset();
        log_outcome("reset", &outcome);
    }
}

fn log_outcome(direction: &str, outcome: &SyncOutcome) {
    tracing::debug!("filter sync {}: {:?}", direction, outcome);
}

/// Creates the page's filter store, hydrated from `query`, and provides it as context.
pub fn use_filter_url_sync(query: ReadSignal<FilterQuery>, kind: ListingKind) -> FilterSyncContext {
    let mut controller = use_signal(move || {
        let initial = query.peek().to_string();
        let mut controller = SyncController::new(FilterStore::new(), RouterNavigator::new(kind, initial));
        controller.url_changed();
        controller
    });

    // url -> store, for every route change including back/forward
    use_effect(move || {
        let q = query.read().to_string();
        let mut controller = controller.write();
        controller.navigator_mut().observe(&q);
        let outcome = controller.url_changed();
        log_outcome("url -> store", &outcome);
    });

    let selection = use_memo(move || controller.read().selection().clone());

    use_context_provider(move || FilterSyncContext { controller, selection })
}
