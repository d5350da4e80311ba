//! Column and table specifications.

use std::fmt;
use std::num::NonZeroUsize;

use crate::config::BrowserConfig;

/// Projects a record into one display cell.
pub struct ColumnDef<T> {
    pub key: &'static str,
    pub header: String,
    render: Box<dyn Fn(&T) -> String>,
}

impl<T> ColumnDef<T> {
    /// A column rendered by `render`, whose output may be anything `Display`.
    pub fn new<F, D>(key: &'static str, header: impl Into<String>, render: F) -> Self
    where
        F: Fn(&T) -> D + 'static,
        D: fmt::Display,
    {
        ColumnDef {
            key,
            header: header.into(),
            render: Box::new(move |row| render(row).to_string()),
        }
    }

    pub fn render(&self, row: &T) -> String {
        (self.render)(row)
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef").field("key", &self.key).field("header", &self.header).finish_non_exhaustive()
    }
}

/// The field free-text search matches against.
pub struct SearchKey<T> {
    pub name: &'static str,
    accessor: Box<dyn Fn(&T) -> String>,
}

impl<T> SearchKey<T> {
    pub fn new<F, D>(name: &'static str, accessor: F) -> Self
    where
        F: Fn(&T) -> D + 'static,
        D: fmt::Display,
    {
        SearchKey {
            name,
            accessor: Box::new(move |row| accessor(row).to_string()),
        }
    }

    /// The string form of the keyed field.
    pub fn value(&self, row: &T) -> String {
        (self.accessor)(row)
    }
}

impl<T> fmt::Debug for SearchKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchKey").field("name", &self.name).finish_non_exhaustive()
    }
}

/// How a record type is shown as a table.
#[derive(Debug)]
pub struct TableSpec<T> {
    pub columns: Vec<ColumnDef<T>>,
    pub search_key: Option<SearchKey<T>>,
    pub page_size: NonZeroUsize,
    pub empty_message: String,
    pub search_placeholder: String,
}

impl<T> TableSpec<T> {
    /// A spec with the default `BrowserConfig` and no search key.
    ///
    /// `columns` must not be empty; that is a programming error, checked in
    /// debug builds.
    pub fn new(columns: Vec<ColumnDef<T>>) -> Self {
        Self::with_config(columns, &BrowserConfig::default())
    }

    pub fn with_config(columns: Vec<ColumnDef<T>>, config: &BrowserConfig) -> Self {
        debug_assert!(!columns.is_empty(), "a table needs at least one column");
        TableSpec {
            columns,
            search_key: None,
            page_size: config.page_size(),
            empty_message: config.empty_message.clone(),
            search_placeholder: config.search_placeholder.clone(),
        }
    }

    pub fn searchable_by<F, D>(mut self, name: &'static str, accessor: F) -> Self
    where
        F: Fn(&T) -> D + 'static,
        D: fmt::Display,
    {
        self.search_key = Some(SearchKey::new(name, accessor));
        self
    }

    pub fn page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    pub fn is_searchable(&self) -> bool {
        self.search_key.is_some()
    }
}
