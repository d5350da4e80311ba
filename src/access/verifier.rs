//!
//! Credential verification.
//!
//! Login is split in two steps: the directory decides *who* the email names,
//! the verifier decides whether the presented credential proves it. Keeping the
//! second step behind a trait lets a real password or token check replace the
//! demo verifiers without touching `AuthContext` or its callers.

use std::collections::HashMap;

use crate::error::AuthError;
use crate::types::Actor;

/// Trait for a provider of credential verification.
pub trait CredentialVerifier {
    /// Checks `credential` for an actor the directory already resolved.
    ///
    /// # Returns
    /// `Ok(())` if the credential is accepted, `Err(AuthError::InvalidCredentials)` otherwise.
    fn verify(&self, actor: &Actor, credential: &str) -> Result<(), AuthError>;
}

/// Accepts any non-empty credential.
///
/// This is as much as the demo dataset can check: it stores no secrets. It is
/// the default so that an empty password is never enough to open a session.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequireNonEmpty;

impl CredentialVerifier for RequireNonEmpty {
    fn verify(&self, actor: &Actor, credential: &str) -> Result<(), AuthError> {
        if credential.is_empty() {
            tracing::debug!(actor = %actor.id, "empty credential rejected");
            return Err(AuthError::InvalidCredentials);
        }
        Ok(())
    }
}

/// Verifies against a fixed email → secret table.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    secrets: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, email: impl Into<String>, secret: impl Into<String>) -> Self {
        self.secrets.insert(email.into(), secret.into());
        self
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, actor: &Actor, credential: &str) -> Result<(), AuthError> {
        match self.secrets.get(&actor.email) {
            Some(secret) if constant_time_eq(secret.as_bytes(), credential.as_bytes()) => Ok(()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

impl<V: CredentialVerifier + ?Sized> CredentialVerifier for Box<V> {
    fn verify(&self, actor: &Actor, credential: &str) -> Result<(), AuthError> {
        (**self).verify(actor, credential)
    }
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    fn admin() -> Actor {
        Actor::new("1", "Carlos Silva", "admin@condominio.com", Role::Admin)
    }

    #[test]
    fn test_require_non_empty() {
        assert_eq!(RequireNonEmpty.verify(&admin(), ""), Err(AuthError::InvalidCredentials));
        assert_eq!(RequireNonEmpty.verify(&admin(), "anything"), Ok(()));
    }

    #[test]
    fn test_static_credentials() {
        let v = StaticCredentials::new().with("admin@condominio.com", "s3nha");
        assert_eq!(v.verify(&admin(), "s3nha"), Ok(()));
        assert_eq!(v.verify(&admin(), "s3nhA"), Err(AuthError::InvalidCredentials));
        assert_eq!(v.verify(&admin(), "s3nha "), Err(AuthError::InvalidCredentials));

        let other = Actor::new("2", "Maria Santos", "portaria@condominio.com", Role::Employee);
        assert_eq!(v.verify(&other, "s3nha"), Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"", b""));
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
