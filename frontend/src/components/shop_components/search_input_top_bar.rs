use common::url_codec;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use crate::{data_definitions::filter_query::FilterQuery, routes::Route};

/// Search box for the search page. Keeps the active filters when the text changes.
#[component]
pub fn SearchInputTopBar(original_query: ReadSignal<FilterQuery>) -> Element {
    let mut search_text = use_signal(|| original_query.read().search_text().unwrap_or_default());
    // navigation does not reset signals
    use_effect(move || {
        let text = original_query.read().search_text().unwrap_or_default();
        search_text.set(text);
    });
    let text_has_changed = use_memo(move || {
        *search_text.read() != original_query.read().search_text().unwrap_or_default()
    });
    let search_button_color = use_memo(move || if text_has_changed() { "#8C3B1F" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        let query = url_codec::with_search_text(original_query.read().as_str(), &search_text.read());
        navigator().push(Route::SearchPage { query: FilterQuery::from(query) });
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",
            button {
                style: "border: none; background: none; cursor: pointer;",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "text",
                placeholder: "Search the cellar",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    font-size: 18px;
                    font-family: Roboto, sans-serif;
                ",
                value: "{search_text}",
                oninput: move |event: Event<FormData>| search_text.set(event.value()),
                onkeydown: search_onkeydown,
            }
        }
    }
}
