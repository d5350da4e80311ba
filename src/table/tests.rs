#![cfg(test)]

use std::num::NonZeroUsize;

use crate::config::BrowserConfig;
use crate::table::*;

// --- Test Utilities ---

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    name: String,
    age: u32,
}

fn person(name: &str, age: u32) -> Person {
    Person { name: name.to_string(), age }
}

fn people(count: usize) -> Vec<Person> {
    (1..=count).map(|n| person(&format!("Pessoa {}", n), n as u32)).collect()
}

fn columns() -> Vec<ColumnDef<Person>> {
    vec![
        ColumnDef::new("name", "Nome", |p: &Person| p.name.clone()),
        ColumnDef::new("age", "Idade", |p: &Person| p.age),
    ]
}

fn by_name() -> TableSpec<Person> {
    TableSpec::new(columns()).searchable_by("name", |p: &Person| p.name.clone())
}

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn names<'a>(rows: impl Iterator<Item = &'a Person>) -> Vec<&'a str> {
    rows.map(|p| p.name.as_str()).collect()
}

// --- Search ---

#[test]
fn test_search_is_case_insensitive_substring() {
    let data = vec![person("Ana", 30), person("Bruno", 41), person("Ana Paula", 25)];
    let mut browser = TabularBrowser::new(by_name(), &data);
    browser.set_search_query("ana");
    assert_eq!(browser.filtered_count(), 2);
    assert_eq!(names(browser.visible_rows()), vec!["Ana", "Ana Paula"]);

    browser.set_search_query("PAU");
    assert_eq!(names(browser.visible_rows()), vec!["Ana Paula"]);
}

#[test]
fn test_search_handles_non_ascii_case() {
    let data = vec![person("JOÃO", 1), person("Joana", 2)];
    let mut browser = TabularBrowser::new(by_name(), &data);
    browser.set_search_query("joão");
    assert_eq!(names(browser.visible_rows()), vec!["JOÃO"]);
}

#[test]
fn test_without_search_key_every_row_passes() {
    let data = people(4);
    let mut browser = TabularBrowser::new(TableSpec::new(columns()), &data);
    browser.set_search_query("nothing matches this");
    assert_eq!(browser.filtered_count(), 4);
}

#[test]
fn test_search_on_non_string_field() {
    let data = people(12);
    let spec = TableSpec::new(columns()).searchable_by("age", |p: &Person| p.age);
    let mut browser = TabularBrowser::new(spec, &data);
    browser.set_search_query("1");
    // 1, 10, 11, 12
    assert_eq!(browser.filtered_count(), 4);
}

#[test]
fn test_empty_query_matches_all() {
    let data = people(3);
    let mut browser = TabularBrowser::new(by_name(), &data);
    browser.set_search_query("");
    assert_eq!(browser.filtered_count(), 3);
}

// --- Pagination ---

#[test]
fn test_twenty_five_rows_make_three_pages() {
    let data = people(25);
    let mut browser = TabularBrowser::new(by_name(), &data);
    assert_eq!(browser.page_size(), 10);
    assert_eq!(browser.total_pages(), 3);
    assert_eq!(browser.set_page(3), 3);
    assert_eq!(browser.visible_rows().count(), 5);
    assert_eq!(browser.visible_rows().next().unwrap().name, "Pessoa 21");
}

#[test]
fn test_set_page_clamps_out_of_range() {
    let data = people(25);
    let mut browser = TabularBrowser::new(by_name(), &data);
    assert_eq!(browser.set_page(0), 1);
    assert_eq!(browser.set_page(99), 3);
    assert_eq!(browser.current_page(), 3);
}

#[test]
fn test_search_resets_page() {
    let data = people(25);
    let mut browser = TabularBrowser::new(by_name(), &data);
    browser.set_page(3);
    browser.set_search_query("pessoa 2");
    assert_eq!(browser.current_page(), 1);
    // "Pessoa 2" and "Pessoa 20".."Pessoa 25"
    assert_eq!(browser.filtered_count(), 7);
    assert_eq!(browser.total_pages(), 1);
}

#[test]
fn test_filter_applies_before_pagination() {
    let data = people(30);
    let spec = by_name().page_size(size(2));
    let mut browser = TabularBrowser::new(spec, &data);
    browser.set_search_query("pessoa 1");
    // Pessoa 1, 10..19 = 11 rows, page 2 holds the 3rd and 4th matches.
    browser.set_page(2);
    assert_eq!(names(browser.visible_rows()), vec!["Pessoa 11", "Pessoa 12"]);
}

#[test]
fn test_total_pages_is_at_least_one() {
    let data: Vec<Person> = Vec::new();
    let browser = TabularBrowser::new(by_name(), &data);
    assert_eq!(browser.total_pages(), 1);
    assert_eq!(browser.visible_rows().count(), 0);
    assert!(!browser.show_pagination());
}

#[test]
fn test_exact_multiple_of_page_size() {
    let data = people(20);
    let browser = TabularBrowser::new(by_name(), &data);
    assert_eq!(browser.total_pages(), 2);
}

#[test]
fn test_next_and_previous() {
    let data = people(25);
    let mut browser = TabularBrowser::new(by_name(), &data);
    assert!(!browser.has_previous());
    assert!(!browser.previous_page());
    assert!(browser.next_page());
    assert!(browser.next_page());
    assert!(!browser.has_next());
    assert!(!browser.next_page());
    assert_eq!(browser.current_page(), 3);
    assert!(browser.previous_page());
    assert_eq!(browser.current_page(), 2);
}

#[test]
fn test_visible_rows_is_restartable() {
    let data = people(15);
    let browser = TabularBrowser::new(by_name(), &data);
    let rows = browser.visible_rows();
    let first_pass: Vec<_> = rows.clone().collect();
    let second_pass: Vec<_> = rows.collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass.len(), 10);
}

#[test]
fn test_set_data_reclamps_page() {
    let many = people(25);
    let few = people(4);
    let mut browser = TabularBrowser::new(by_name(), &many);
    browser.set_page(3);
    browser.set_data(&few);
    assert_eq!(browser.current_page(), 1);
    assert_eq!(browser.visible_rows().count(), 4);
}

// --- Summary and rendering ---

#[test]
fn test_page_summary() {
    let data = people(25);
    let mut browser = TabularBrowser::new(by_name(), &data);
    browser.set_page(3);
    let summary = browser.page_summary().unwrap();
    assert_eq!(summary, PageSummary { first: 21, last: 25, total: 25, page: 3, total_pages: 3 });
    assert!(browser.show_pagination());

    browser.set_search_query("zzz");
    assert_eq!(browser.page_summary(), None);
}

#[test]
fn test_render_rows_through_columns() {
    let data = vec![person("Ana", 30), person("Bruno", 41)];
    let browser = TabularBrowser::new(by_name(), &data);
    let rendered = browser.render();
    assert_eq!(rendered.headers, vec!["Nome", "Idade"]);
    assert_eq!(
        rendered.body,
        TableBody::Rows(vec![vec!["Ana".to_string(), "30".to_string()], vec!["Bruno".to_string(), "41".to_string()]])
    );
}

#[test]
fn test_render_empty_state_uses_message() {
    let data = vec![person("Ana", 30)];
    let mut browser = TabularBrowser::new(by_name(), &data);
    browser.set_search_query("xyz");
    assert_eq!(browser.render().body, TableBody::Empty("Nenhum registro encontrado".to_string()));

    let spec = by_name().empty_message("Nenhum morador");
    let mut browser = TabularBrowser::new(spec, &data);
    browser.set_search_query("xyz");
    assert_eq!(browser.render().body, TableBody::Empty("Nenhum morador".to_string()));
}

#[test]
fn test_spec_from_config() {
    let config = BrowserConfig::from_json_str(r#"{"pageSize": 3, "searchPlaceholder": "Procurar"}"#).unwrap();
    let spec = TableSpec::with_config(columns(), &config);
    assert_eq!(spec.page_size.get(), 3);
    assert_eq!(spec.search_placeholder, "Procurar");
    assert!(!spec.is_searchable());
    assert_eq!(spec.headers(), vec!["Nome", "Idade"]);

    let data = people(7);
    let browser = TabularBrowser::new(spec, &data);
    assert_eq!(browser.total_pages(), 3);
}

#[test]
fn test_rendered_table_serializes() {
    let data = vec![person("Ana", 30)];
    let browser = TabularBrowser::new(by_name(), &data);
    let json = serde_json::to_value(browser.render()).unwrap();
    assert_eq!(json["body"]["kind"], "rows");
    assert_eq!(json["summary"]["total"], 1);
}
