use common::filter_selection::{FilterSelection, PriceRange, SortBy};
use common::filter_store::FilterStore;
use common::sync_controller::{MemoryHistory, Navigator, SyncController, SyncOutcome};
use common::url_codec::{decode, encode, merge_into};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn sort_by() -> impl Strategy<Value = SortBy> {
    prop::sample::select(SortBy::ALL.to_vec())
}

prop_compose! {
    fn selection()(
        category in prop::option::of("[a-z][a-z \\-&é]{0,15}"),
        brands in prop::collection::vec("[A-Za-z0-9' .&+=%]{1,12}", 0..5),
        a in 0_u32..5000,
        b in 0_u32..5000,
        sort_by in sort_by(),
    ) -> FilterSelection {
        let mut selection = FilterSelection::default()
            .with_brands(brands)
            .with_price_range(PriceRange::new(a, b))
            .with_sort_by(sort_by);
        selection.set_category(category);
        selection
    }
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn decode_inverts_encode(selection in selection()) {
        prop_assert_eq!(decode(&encode(&selection)), selection);
    }

    #[test]
    fn encoding_is_deterministic(selection in selection()) {
        let query = encode(&selection);
        prop_assert_eq!(encode(&decode(&query)), query);
    }

    #[test]
    fn merge_preserves_search_text(selection in selection(), text in "[a-z ]{1,10}") {
        let existing = format!("q={}", text.replace(' ', "+"));
        let merged = merge_into(&existing, &selection);
        prop_assert!(merged.starts_with(&existing));
        prop_assert_eq!(decode(&merged), selection);
    }

    #[test]
    fn decode_never_panics(query in ".{0,64}") {
        let selection = decode(&query);
        prop_assert!(selection.price_range.min() <= selection.price_range.max());
    }

    #[test]
    fn url_passes_never_touch_history(selection in selection()) {
        let mut sync = SyncController::new(FilterStore::new(), MemoryHistory::new(""));
        sync.url_changed();
        sync.navigator_mut().push(&encode(&selection));
        sync.url_changed();
        let _ = sync.store_changed();
        prop_assert_eq!(sync.navigator().replace_count(), 0);
        prop_assert_eq!(sync.selection(), &selection);
    }

    #[test]
    fn interactive_changes_replace_once(selection in selection()) {
        let mut sync = SyncController::new(FilterStore::new(), MemoryHistory::new("q=malt"));
        sync.url_changed();
        let outcome = sync.store_mut().replace_selection(selection.clone());
        let synced = sync.store_changed();
        if outcome {
            prop_assert_eq!(synced, SyncOutcome::UrlReplaced(merge_into("q=malt", &selection)));
            prop_assert_eq!(sync.navigator().replace_count(), 1);
        } else {
            prop_assert_eq!(sync.navigator().replace_count(), 0);
        }
        prop_assert_eq!(sync.navigator().len(), 1);
        prop_assert_eq!(decode(&sync.navigator().current_query()), selection);
    }
}
