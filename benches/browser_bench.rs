use criterion::{criterion_group, criterion_main, Criterion};
use condogest_core::fixtures;
use condogest_core::records;
use condogest_core::table::TabularBrowser;

fn browser_benchmarks(c: &mut Criterion) {
    let units = fixtures::units();
    let residents = fixtures::numbered_residents(10_000);

    c.bench_function("search_and_render_page", |b| {
        b.iter(|| {
            let mut browser = TabularBrowser::new(records::resident_table(&units), &residents);
            browser.set_search_query("morador 99");
            browser.set_page(2);
            let _table = browser.render();
        })
    });

    c.bench_function("total_pages_unfiltered", |b| {
        let browser = TabularBrowser::new(records::resident_table(&units), &residents);
        b.iter(|| browser.total_pages())
    });
}

criterion_group!(benches, browser_benchmarks);
criterion_main!(benches);
