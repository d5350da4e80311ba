//!
//! Error types for the access and configuration layers.
//!
//! The table browser has no error type: it performs no I/O and clamps
//! out-of-range input instead of failing.

use crate::types::RoleSet;

/// Errors surfaced by `AuthContext`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No actor with that email, or the credential was rejected. The two cases
    /// are deliberately indistinguishable to the caller.
    #[error("E-mail ou senha inválidos")]
    InvalidCredentials,
    /// A screen was requested while no actor is logged in.
    #[error("Authentication required")]
    NotAuthenticated,
    /// The current actor's role is outside the roles the screen allows.
    #[error("Access denied: requires one of {required:?}")]
    Forbidden { required: RoleSet },
}

/// Errors raised while loading a `BrowserConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but holds a value outside its allowed range.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
