//!
//! Generic tabular browser: free-text search and pagination over any record
//! slice, independent of the record's shape.
//!
//! Rows are always filtered first and paginated second, so page boundaries
//! never shift under the filter. Input order is preserved; the browser never
//! sorts.

use serde::Serialize;

use crate::table::spec::TableSpec;

/// Transient view state owned by one browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableState {
    pub search_query: String,
    /// 1-based.
    pub current_page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        TableState { search_query: String::new(), current_page: 1 }
    }
}

/// Range shown by the pagination footer: "Mostrando first a last de total".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    /// 1-based index of the first visible row within the filtered set.
    pub first: usize,
    /// 1-based index of the last visible row, inclusive.
    pub last: usize,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TableBody {
    Rows(Vec<Vec<String>>),
    /// The filtered set is empty; carries the message to show instead.
    Empty(String),
}

/// Headers plus the current page, every cell already rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTable {
    pub headers: Vec<String>,
    pub body: TableBody,
    pub summary: Option<PageSummary>,
}

/// Searchable, paginated view over borrowed records.
#[derive(Debug)]
pub struct TabularBrowser<'a, T> {
    spec: TableSpec<T>,
    data: &'a [T],
    state: TableState,
    /// Lowercased `state.search_query`.
    needle: String,
}

impl<'a, T> TabularBrowser<'a, T> {
    pub fn new(spec: TableSpec<T>, data: &'a [T]) -> Self {
        TabularBrowser {
            spec,
            data,
            state: TableState::default(),
            needle: String::new(),
        }
    }

    pub fn spec(&self) -> &TableSpec<T> {
        &self.spec
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn page_size(&self) -> usize {
        self.spec.page_size.get()
    }

    /// Replaces the query and goes back to page 1.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.needle = self.state.search_query.to_lowercase();
        self.state.current_page = 1;
        tracing::debug!(query = %self.state.search_query, matches = self.filtered_count(), "search query set");
    }

    /// Moves to page `page`, clamped to `[1, total_pages]`. Returns the page
    /// actually selected.
    pub fn set_page(&mut self, page: usize) -> usize {
        let total = self.total_pages();
        let clamped = page.clamp(1, total);
        if clamped != page {
            tracing::warn!(requested = page, total_pages = total, "page out of range, clamped");
        }
        self.state.current_page = clamped;
        clamped
    }

    /// Swaps the record source, keeping the query and re-clamping the page.
    pub fn set_data(&mut self, data: &'a [T]) {
        self.data = data;
        let total = self.total_pages();
        if self.state.current_page > total {
            self.state.current_page = total;
        }
    }

    /// Whether `row` passes the search filter. Without a search key every
    /// row passes.
    pub fn matches(&self, row: &T) -> bool {
        match &self.spec.search_key {
            Some(key) => key.value(row).to_lowercase().contains(&self.needle),
            None => true,
        }
    }

    /// The filtered set, in input order.
    pub fn filtered(&self) -> impl Iterator<Item = &'a T> + Clone + '_ {
        let data: &'a [T] = self.data;
        data.iter().filter(move |row| self.matches(row))
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().count()
    }

    /// `max(1, ceil(filtered_count / page_size))`.
    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size()).max(1)
    }

    /// Rows of the current page: the filtered-set slice
    /// `[(page - 1) * page_size, page * page_size)`.
    ///
    /// The iterator is lazy and `Clone`; a clone is an independent pass over
    /// the same rows, and the result depends only on data, query, page and
    /// page size.
    pub fn visible_rows(&self) -> impl Iterator<Item = &'a T> + Clone + '_ {
        let size = self.page_size();
        let offset = (self.state.current_page - 1).saturating_mul(size);
        self.filtered().skip(offset).take(size)
    }

    pub fn has_previous(&self) -> bool {
        self.state.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.state.current_page < self.total_pages()
    }

    /// Returns `false` when already on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.state.current_page += 1;
        true
    }

    /// Returns `false` when already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.state.current_page -= 1;
        true
    }

    /// Pagination controls are only drawn when there is more than one page.
    pub fn show_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    /// `None` when the filtered set is empty.
    pub fn page_summary(&self) -> Option<PageSummary> {
        let total = self.filtered_count();
        if total == 0 {
            return None;
        }
        let size = self.page_size();
        let page = self.state.current_page;
        Some(PageSummary {
            first: (page - 1) * size + 1,
            last: (page * size).min(total),
            total,
            page,
            total_pages: total.div_ceil(size),
        })
    }

    /// Renders the current page through the column renderers.
    pub fn render(&self) -> RenderedTable {
        let headers = self.spec.columns.iter().map(|c| c.header.clone()).collect();
        let rows: Vec<Vec<String>> = self
            .visible_rows()
            .map(|row| self.spec.columns.iter().map(|c| c.render(row)).collect())
            .collect();
        let body = if rows.is_empty() {
            TableBody::Empty(self.spec.empty_message.clone())
        } else {
            TableBody::Rows(rows)
        };
        RenderedTable { headers, body, summary: self.page_summary() }
    }
}
