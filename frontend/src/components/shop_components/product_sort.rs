use common::filter_selection::{FilterUpdate, SortBy};
use dioxus::{logger::tracing, prelude::*};

use super::filter_url_sync::FilterSyncContext;

#[component]
pub fn ProductSort() -> Element {
    let filters = use_context::<FilterSyncContext>();
    let selection = filters.selection();
    let current = use_memo(move || selection.read().sort_by);

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: #6B7280;",
            "Sort by"
            select {
                style: "
                    border: 1px solid rgba(0,0,0,0.2);
                    border-radius: 6px;
                    padding: 6px 10px;
                    font-size: 14px;
                    background: white;
                ",
                value: "{current().as_str()}",
                onchange: move |event: Event<FormData>| {
                    match event.value().parse::<SortBy>() {
                        Ok(sort_by) => filters.apply(FilterUpdate::SortBy(sort_by)),
                        Err(e) => tracing::warn!("{}", e),
                    }
                },
                for sort_by in SortBy::ALL {
                    option {
                        key: "{sort_by}",
                        value: "{sort_by.as_str()}",
                        selected: sort_by == current(),
                        "{sort_by.label()}"
                    }
                }
            }
        }
    }
}
