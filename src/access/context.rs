//!
//! Authorization context: the single source of truth for the current actor.
//!
//! A context is constructed explicitly and handed to whatever renders
//! navigation or screens; there is no process-wide "current user". Its state
//! machine has two states:
//!
//! ```text
//! Anonymous --login ok--> Authenticated(session)
//! Anonymous --login err--> Anonymous            (error kept in last_error)
//! Authenticated --logout--> Anonymous
//! ```

use uuid::Uuid;

use crate::access::directory::ActorDirectory;
use crate::access::verifier::{CredentialVerifier, RequireNonEmpty};
use crate::error::AuthError;
use crate::types::{Actor, RoleSet};

/// Source of the current actor. Anything that decides visibility depends on
/// this trait, not on `AuthContext`, so a server-backed implementation can be
/// dropped in.
pub trait ActorSource {
    /// The actor of the open session, if any.
    fn current_actor(&self) -> Option<&Actor>;
}

/// Access decisions over any [`ActorSource`].
///
/// Implemented once, for every actor source, by the blanket impl below; a
/// second impl is rejected by coherence, so `has_permission` cannot be
/// replaced.
///
/// ```compile_fail
/// use condogest_core::access::{ActorSource, Authorizer};
/// use condogest_core::{Actor, AuthError, RoleSet};
///
/// struct Lenient;
///
/// impl ActorSource for Lenient {
///     fn current_actor(&self) -> Option<&Actor> {
///         None
///     }
/// }
///
/// impl Authorizer for Lenient {
///     fn has_permission(&self, _: RoleSet) -> bool {
///         true
///     }
///     fn require(&self, _: RoleSet) -> Result<&Actor, AuthError> {
///         Err(AuthError::NotAuthenticated)
///     }
/// }
/// ```
pub trait Authorizer: ActorSource {
    /// Returns `false` when nobody is logged in; otherwise whether the current
    /// actor's role is a member of `allowed`. Pure query.
    fn has_permission(&self, allowed: RoleSet) -> bool;

    /// `Result` flavour of `has_permission` for gating whole screens.
    fn require(&self, allowed: RoleSet) -> Result<&Actor, AuthError>;
}

impl<S: ActorSource + ?Sized> Authorizer for S {
    fn has_permission(&self, allowed: RoleSet) -> bool {
        let granted = match self.current_actor() {
            Some(actor) => allowed.contains(actor.role),
            None => false,
        };
        tracing::trace!(?allowed, granted, "permission check");
        granted
    }

    fn require(&self, allowed: RoleSet) -> Result<&Actor, AuthError> {
        match self.current_actor() {
            None => Err(AuthError::NotAuthenticated),
            Some(actor) if self.has_permission(allowed) => Ok(actor),
            Some(_) => Err(AuthError::Forbidden { required: allowed }),
        }
    }
}

/// An open session. A new id is minted on every successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub actor: Actor,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

/// Holds the session for a single user of the dashboard.
#[derive(Debug, Clone)]
pub struct AuthContext<D, V = RequireNonEmpty> {
    directory: D,
    verifier: V,
    state: SessionState,
    last_error: Option<AuthError>,
}

impl<D: ActorDirectory> AuthContext<D, RequireNonEmpty> {
    /// Creates an anonymous context using the default verifier.
    pub fn new(directory: D) -> Self {
        Self::with_verifier(directory, RequireNonEmpty)
    }
}

impl<D, V> AuthContext<D, V>
where
    D: ActorDirectory,
    V: CredentialVerifier,
{
    pub fn with_verifier(directory: D, verifier: V) -> Self {
        AuthContext {
            directory,
            verifier,
            state: SessionState::Anonymous,
            last_error: None,
        }
    }

    /// Looks the email up in the directory, verifies the credential, and on
    /// success opens a new session for the actor found.
    ///
    /// Unknown email and rejected credential both yield
    /// `AuthError::InvalidCredentials`. A failed attempt leaves the session
    /// state untouched and records the error in `last_error`.
    pub fn login(&mut self, email: &str, credential: &str) -> Result<&Actor, AuthError> {
        self.last_error = None;

        let outcome = match self.directory.find_by_email(email) {
            Some(actor) => self.verifier.verify(&actor, credential).map(|()| actor),
            None => Err(AuthError::InvalidCredentials),
        };

        match outcome {
            Ok(actor) => {
                let session = Session { id: Uuid::new_v4(), actor };
                tracing::info!(
                    session = %session.id,
                    actor = %session.actor.id,
                    role = %session.actor.role,
                    "session opened"
                );
                self.state = SessionState::Authenticated(session);
                self.current_actor().ok_or(AuthError::NotAuthenticated)
            }
            Err(err) => {
                tracing::warn!("login rejected");
                tracing::debug!(email, "login rejected for email");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Closes the session, if any, and clears `last_error`. Idempotent.
    pub fn logout(&mut self) {
        if let SessionState::Authenticated(session) = std::mem::take(&mut self.state) {
            tracing::info!(session = %session.id, actor = %session.actor.id, "session closed");
        }
        self.last_error = None;
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Anonymous => None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    /// Error of the most recent failed login, for inline display.
    pub fn last_error(&self) -> Option<&AuthError> {
        self.last_error.as_ref()
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }
}

impl<D, V> ActorSource for AuthContext<D, V> {
    fn current_actor(&self) -> Option<&Actor> {
        match &self.state {
            SessionState::Authenticated(session) => Some(&session.actor),
            SessionState::Anonymous => None,
        }
    }
}
