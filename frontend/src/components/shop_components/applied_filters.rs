use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use super::filter_url_sync::FilterSyncContext;

/// Removable chips for the active filters, plus "Reset all".
#[component]
pub fn AppliedFilters() -> Element {
    let filters = use_context::<FilterSyncContext>();
    let selection = filters.selection();
    let chips = use_memo(move || selection.read().applied_filters());

    if chips.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-applied-filters",
            style: "
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
                margin-bottom: 24px;
            ",
            for chip in chips.read().iter().cloned() {
                span {
                    key: "{chip.label()}",
                    class: "x-filter-chip",
                    "{chip.label()}"
                    button {
                        style: "border: none; background: none; cursor: pointer; padding: 0; display: flex;",
                        onclick: move |_| filters.apply(chip.removal()),
                        Icon { icon: MdClose, style: "width: 12px; height: 12px;" }
                    }
                }
            }
            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 12px;
                    color: #6B7280;
                    text-decoration: underline;
                    margin-left: 4px;
                ",
                onclick: move |_| filters.reset(),
                "Reset all"
            }
        }
    }
}
