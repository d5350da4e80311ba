//! Access control: who is acting now, and what they may see.
//!
//! Every visibility decision goes through [`Authorizer::has_permission`].
//! Navigation, screen guards and `require` are all expressed in terms of it, so
//! swapping `AuthContext` for a server-backed authorizer changes no caller.

pub mod capability;
pub mod context;
pub mod directory;
pub mod verifier;


pub use capability::*;
pub use context::{ActorSource, AuthContext, Authorizer, Session, SessionState};
pub use directory::{ActorDirectory, InMemoryDirectory};
pub use verifier::{CredentialVerifier, RequireNonEmpty, StaticCredentials};
// Also expose the role algebra under a shorter path.
pub use crate::roles;
