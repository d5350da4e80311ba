//! Generic tabular data browser.
//!
//! A `TableSpec` describes how to show one record type; a `TabularBrowser`
//! applies search and pagination to a slice of those records.

pub mod browser;
pub mod spec;

#[cfg(test)]
mod tests;

pub use browser::{PageSummary, RenderedTable, TableBody, TableState, TabularBrowser};
pub use spec::{ColumnDef, SearchKey, TableSpec};
