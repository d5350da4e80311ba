#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! CondoGest core: role-gated access and a generic tabular browser for the
//! condominium management dashboard.
//!
//! Two collaborating pieces:
//! - `access`: the authorization context (who is acting, may they see X) and
//!   the static navigation capabilities gated through it.
//! - `table`: a searchable, paginated view over any homogeneous record slice.
//!
//! Everything is synchronous and in-process. Record sources and actor
//! directories are supplied by the caller.

// Module for shared data types (Role, RoleSet, Actor).
pub mod types;

// Module for the role algebra.
pub mod roles;

// Module for error types.
pub mod error;

// Module for browser configuration.
pub mod config;

// Module for authentication, authorization and navigation.
pub mod access;

// Module for the generic tabular browser.
pub mod table;

// Module for condominium records and their stock table specs.
pub mod records;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;

#[cfg(feature = "tracing-subscriber")]
pub mod telemetry;

pub use access::{ActorDirectory, ActorSource, AuthContext, Authorizer, CredentialVerifier, NavCapability};
pub use config::BrowserConfig;
pub use error::{AuthError, ConfigError};
pub use table::{ColumnDef, TableSpec, TableState, TabularBrowser};
pub use types::{Actor, ActorId, Role, RoleSet};
