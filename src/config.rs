//!
//! Browser configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_PAGE_SIZE_NZ: NonZeroUsize = match NonZeroUsize::new(DEFAULT_PAGE_SIZE) {
    Some(n) => n,
    None => panic!("DEFAULT_PAGE_SIZE must be non-zero"),
};
pub const DEFAULT_EMPTY_MESSAGE: &str = "Nenhum registro encontrado";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Buscar...";

/// Presentation defaults applied to every `TabularBrowser` built from a spec
/// that does not override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BrowserConfig {
    pub page_size: usize,
    /// Shown instead of rows when the filtered set is empty.
    pub empty_message: String,
    pub search_placeholder: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            page_size: DEFAULT_PAGE_SIZE,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
        }
    }
}

impl BrowserConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BrowserConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON file and parses it with `from_json_str`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading browser config");
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("pageSize must be at least 1".to_string()));
        }
        Ok(())
    }

    /// `page_size` as the non-zero type the browser works with. Falls back to
    /// the default when an unvalidated config carries 0.
    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(DEFAULT_PAGE_SIZE_NZ)
    }
}
