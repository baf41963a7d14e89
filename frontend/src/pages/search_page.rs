use dioxus::prelude::*;

use crate::{
    components::shop_components::search_input_top_bar::SearchInputTopBar,
    data_definitions::filter_query::FilterQuery,
    pages::shop_page::ListingPageRoot,
    routes::ListingKind,
};

fn title_ellipsis(title: String) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title
    }
}

/// Search page: the shop listing narrowed by `?q=`.
#[component]
pub fn SearchPage(query: FilterQuery) -> Element {
    let title = title_ellipsis(query.search_text().unwrap_or_default());
    rsx! {
        Title { "Cellar Search: {title}" }
        SearchPageRootComponent { query }
    }
}

#[component]
fn SearchPageRootComponent(query: ReadSignal<FilterQuery>) -> Element {
    rsx! {
        div {
            id: "x-search-page-root-component",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar { original_query: query }
            }
            div {
                style: "flex-grow: 1; max-height: calc(100% - 76px);",
                ListingPageRoot { query, kind: ListingKind::Search }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_titles_are_shortened() {
        assert_eq!(title_ellipsis("gin".to_string()), "gin");
        assert_eq!(title_ellipsis("a".repeat(30)), format!("{}...", "a".repeat(18)));
    }
}
