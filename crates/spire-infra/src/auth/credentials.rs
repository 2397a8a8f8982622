//! Fixed-pair credential verification backed by Argon2.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use spire_core::ports::{AuthError, CredentialVerifier};

/// The admin credential pair, injected as configuration.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "adminanamol".to_string(),
            password: "growthspire2024".to_string(),
        }
    }
}

impl AdminCredentials {
    /// Load the pair from the environment, falling back to the demo pair.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let username = std::env::var("GROWTHSPIRE_ADMIN_USER").unwrap_or(defaults.username);
        let password = match std::env::var("GROWTHSPIRE_ADMIN_PASSWORD") {
            Ok(password) => password,
            Err(_) => {
                let is_production = std::env::var("RUST_ENV")
                    .map(|v| v == "production" || v == "prod")
                    .unwrap_or(false);

                if is_production {
                    tracing::error!(
                        "SECURITY: Using demo admin credentials in production! Set GROWTHSPIRE_ADMIN_PASSWORD."
                    );
                } else {
                    tracing::warn!(
                        "Using demo admin credentials. Set GROWTHSPIRE_ADMIN_USER / GROWTHSPIRE_ADMIN_PASSWORD for production use."
                    );
                }
                defaults.password
            }
        };

        Self { username, password }
    }
}

/// `CredentialVerifier` over a single fixed pair.
///
/// The configured password is hashed once at construction and dropped;
/// verification compares the username byte-for-byte and the password against
/// the Argon2 hash. Match semantics are exact - no trimming, no case folding.
pub struct StaticCredentials {
    username: String,
    password_hash: String,
    argon2: Argon2<'static>,
}

impl StaticCredentials {
    pub fn new(credentials: AdminCredentials) -> Result<Self, AuthError> {
        let argon2 = Argon2::default();
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = argon2
            .hash_password(credentials.password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            username: credentials.username,
            password_hash,
            argon2,
        })
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<bool, AuthError> {
        if username != self.username {
            return Ok(false);
        }

        let parsed_hash = PasswordHash::new(&self.password_hash)
            .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}
