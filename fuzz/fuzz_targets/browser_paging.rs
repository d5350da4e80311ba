#![no_main]

// Harness: browser_paging
// Focus: page stays within [1, total_pages]; visible rows never exceed the page size.

use std::num::NonZeroUsize;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use condogest_core::table::{ColumnDef, TableSpec, TabularBrowser};

#[derive(Arbitrary, Debug, Clone)]
enum Op {
    Search(String),
    SetPage(usize),
    Next,
    Previous,
}

#[derive(Arbitrary, Debug, Clone)]
struct Frame {
    rows: Vec<String>,
    page_size: u8,
    ops: Vec<Op>,
}

fuzz_target!(|frame: Frame| {
    let page_size = NonZeroUsize::new(frame.page_size as usize).unwrap_or(NonZeroUsize::MIN);
    let spec = TableSpec::new(vec![ColumnDef::new("value", "Valor", |s: &String| s.clone())])
        .searchable_by("value", |s: &String| s.clone())
        .page_size(page_size);
    let mut browser = TabularBrowser::new(spec, &frame.rows);

    for op in frame.ops {
        match op {
            Op::Search(q) => browser.set_search_query(q),
            Op::SetPage(p) => {
                browser.set_page(p);
            }
            Op::Next => {
                browser.next_page();
            }
            Op::Previous => {
                browser.previous_page();
            }
        }
        assert!(browser.current_page() >= 1);
        assert!(browser.current_page() <= browser.total_pages());
        assert!(browser.visible_rows().count() <= page_size.get());
        let _ = browser.render();
    }
});
