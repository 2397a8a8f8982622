//! Authentication ports.

/// Credential verification against the configured admin pair.
pub trait CredentialVerifier: Send + Sync {
    /// Check a username/password pair. A mismatch is `Ok(false)`, not an
    /// error; no normalization is applied to either field.
    fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Hashing error: {0}")]
    HashingError(String),
}
