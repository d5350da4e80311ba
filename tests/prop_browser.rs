use std::num::NonZeroUsize;

use proptest::prelude::*;
use condogest_core::table::{ColumnDef, TableSpec, TabularBrowser};

fn spec(page_size: usize) -> TableSpec<String> {
    TableSpec::new(vec![ColumnDef::new("name", "Nome", |s: &String| s.clone())])
        .searchable_by("name", |s: &String| s.clone())
        .page_size(NonZeroUsize::new(page_size).unwrap())
}

fn names() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-cA-C ]{0,6}", 0..60)
}

proptest! {
    /// Visible rows are matching rows of the dataset, at most page_size of them,
    /// in input order.
    #[test]
    fn prop_visible_rows_are_matching_subset(
        data in names(),
        query in "[a-cA-C]{0,2}",
        page_size in 1usize..15,
        page in 0usize..10,
    ) {
        let mut browser = TabularBrowser::new(spec(page_size), &data);
        browser.set_search_query(query.clone());
        browser.set_page(page);

        let needle = query.to_lowercase();
        let matching: Vec<&String> = data.iter().filter(|s| s.to_lowercase().contains(&needle)).collect();
        let visible: Vec<&String> = browser.visible_rows().collect();

        prop_assert!(visible.len() <= page_size);
        let offset = (browser.current_page() - 1) * page_size;
        let end = (offset + page_size).min(matching.len());
        prop_assert_eq!(visible, matching[offset.min(end)..end].to_vec());
    }

    /// total_pages == max(1, ceil(filtered / page_size)).
    #[test]
    fn prop_total_pages_formula(data in names(), query in "[a-c]{0,2}", page_size in 1usize..15) {
        let mut browser = TabularBrowser::new(spec(page_size), &data);
        browser.set_search_query(query);
        let filtered = browser.filtered_count();
        let expected = std::cmp::max(1, (filtered + page_size - 1) / page_size);
        prop_assert_eq!(browser.total_pages(), expected);
    }

    /// Any query change lands on page 1, wherever we were.
    #[test]
    fn prop_search_resets_page(data in names(), page in 0usize..20, query in "[a-c]{0,3}") {
        let mut browser = TabularBrowser::new(spec(3), &data);
        browser.set_page(page);
        browser.set_search_query(query);
        prop_assert_eq!(browser.current_page(), 1);
    }

    /// The current page always stays within [1, total_pages].
    #[test]
    fn prop_page_in_range(data in names(), pages in proptest::collection::vec(0usize..30, 1..10)) {
        let mut browser = TabularBrowser::new(spec(4), &data);
        for p in pages {
            browser.set_page(p);
            prop_assert!(browser.current_page() >= 1);
            prop_assert!(browser.current_page() <= browser.total_pages());
        }
    }
}
