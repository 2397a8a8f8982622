//! Session gate - single point of truth for privileged access.
//!
//! The current session is mirrored into the key-value store under
//! [`SessionGate::STORAGE_KEY`] so it survives a reload of the embedding
//! shell. The mirror and the in-memory state are mutated under one write
//! lock: no observer can see an authenticated session without its mirrored
//! entry, or the entry without the session.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use spire_core::domain::Session;
use spire_core::ports::{AuthError, CredentialVerifier, KeyValueStore, KvError};

/// Session gate configuration.
#[derive(Debug, Clone)]
pub struct SessionGateConfig {
    /// Simulated upstream latency applied to every login attempt.
    pub login_delay: Duration,
}

impl Default for SessionGateConfig {
    fn default() -> Self {
        Self {
            login_delay: Duration::from_millis(500),
        }
    }
}

impl SessionGateConfig {
    pub fn from_env() -> Self {
        Self {
            login_delay: Duration::from_millis(
                std::env::var("GROWTHSPIRE_LOGIN_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(500),
            ),
        }
    }
}

/// Session gate errors. A credential mismatch is not an error; only the
/// backing store can fail.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Key-value store failed: {0}")]
    Store(#[from] KvError),

    #[error("Credential check failed: {0}")]
    Credentials(#[from] AuthError),
}

/// Wire shape of the mirrored session entry.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(rename = "isAuthenticated")]
    is_authenticated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<PersistedUser>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedUser {
    username: String,
}

/// The session gate. Construct with [`SessionGate::restore`].
pub struct SessionGate {
    session: RwLock<Session>,
    store: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
    config: SessionGateConfig,
}

impl SessionGate {
    /// Fixed key the session is mirrored under.
    pub const STORAGE_KEY: &'static str = "growthspire_auth";

    /// Construct the gate, adopting any well-formed authenticated session
    /// already mirrored in the store - credentials are not re-validated. An
    /// entry that fails to parse is purged; a parseable entry that is not an
    /// authenticated shape is ignored but left in place.
    pub async fn restore(
        store: Arc<dyn KeyValueStore>,
        verifier: Arc<dyn CredentialVerifier>,
        config: SessionGateConfig,
    ) -> Result<Self, SessionError> {
        let session = match store.get(Self::STORAGE_KEY).await {
            Some(raw) => match serde_json::from_str::<PersistedSession>(&raw) {
                Ok(saved) => match (saved.is_authenticated, saved.user) {
                    (true, Some(user)) => {
                        tracing::debug!(username = %user.username, "restored persisted session");
                        Session::authenticated(user.username)
                    }
                    _ => Session::anonymous(),
                },
                Err(err) => {
                    tracing::warn!("discarding corrupt persisted session: {err}");
                    store.remove(Self::STORAGE_KEY).await?;
                    Session::anonymous()
                }
            },
            None => Session::anonymous(),
        };

        Ok(Self {
            session: RwLock::new(session),
            store,
            verifier,
            config,
        })
    }

    /// Attempt to sign in. A mismatching pair is `Ok(false)` and leaves the
    /// session untouched; any number of attempts may be made.
    pub async fn login(&self, username: &str, password: &str) -> Result<bool, SessionError> {
        // Emulates the round trip a real credential service would cost.
        tokio::time::sleep(self.config.login_delay).await;

        if !self.verifier.verify(username, password)? {
            tracing::debug!(username, "rejected login attempt");
            return Ok(false);
        }

        let record = PersistedSession {
            is_authenticated: true,
            user: Some(PersistedUser {
                username: username.to_string(),
            }),
        };
        let raw =
            serde_json::to_string(&record).map_err(|e| KvError::Serialization(e.to_string()))?;

        let mut session = self.session.write().await;
        // Mirror first: the flag must never be observable without the entry.
        self.store.set(Self::STORAGE_KEY, &raw).await?;
        *session = Session::authenticated(username);
        tracing::debug!(username, "login succeeded");
        Ok(true)
    }

    /// Sign out and drop the mirrored entry.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let mut session = self.session.write().await;
        self.store.remove(Self::STORAGE_KEY).await?;
        *session = Session::anonymous();
        tracing::debug!("logged out");
        Ok(())
    }

    /// Snapshot of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AdminCredentials, StaticCredentials};
    use crate::kv::InMemoryKvStore;

    fn test_config() -> SessionGateConfig {
        SessionGateConfig {
            login_delay: Duration::ZERO,
        }
    }

    async fn gate_over(store: Arc<InMemoryKvStore>) -> SessionGate {
        let verifier = Arc::new(StaticCredentials::new(AdminCredentials::default()).unwrap());
        SessionGate::restore(store, verifier, test_config())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_with_the_fixed_pair_succeeds() {
        let store = Arc::new(InMemoryKvStore::new());
        let gate = gate_over(store.clone()).await;

        assert!(gate.login("adminanamol", "growthspire2024").await.unwrap());
        assert!(gate.is_authenticated().await);
        assert_eq!(
            gate.session().await.user().unwrap().username,
            "adminanamol"
        );

        // The mirror is written with the camelCase wire field names.
        let raw = store.get(SessionGate::STORAGE_KEY).await.unwrap();
        let saved: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved["isAuthenticated"], true);
        assert_eq!(saved["user"]["username"], "adminanamol");
    }

    #[tokio::test]
    async fn test_login_mismatch_leaves_state_untouched() {
        let store = Arc::new(InMemoryKvStore::new());
        let gate = gate_over(store.clone()).await;

        assert!(!gate.login("adminanamol", "wrong").await.unwrap());
        assert!(!gate.is_authenticated().await);
        assert!(!store.exists(SessionGate::STORAGE_KEY).await);
    }

    #[tokio::test]
    async fn test_failed_attempt_after_success_keeps_the_session() {
        let store = Arc::new(InMemoryKvStore::new());
        let gate = gate_over(store.clone()).await;

        assert!(gate.login("adminanamol", "growthspire2024").await.unwrap());
        assert!(!gate.login("adminanamol", "wrong").await.unwrap());

        assert!(gate.is_authenticated().await);
        assert!(store.exists(SessionGate::STORAGE_KEY).await);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_mirror() {
        let store = Arc::new(InMemoryKvStore::new());
        let gate = gate_over(store.clone()).await;

        gate.login("adminanamol", "growthspire2024").await.unwrap();
        gate.logout().await.unwrap();

        assert!(!gate.is_authenticated().await);
        assert!(gate.session().await.user().is_none());
        assert!(!store.exists(SessionGate::STORAGE_KEY).await);
    }

    #[tokio::test]
    async fn test_restore_round_trips_a_persisted_session() {
        let store = Arc::new(InMemoryKvStore::new());
        let gate = gate_over(store.clone()).await;
        gate.login("adminanamol", "growthspire2024").await.unwrap();

        let reloaded = gate_over(store).await;
        assert!(reloaded.is_authenticated().await);
        assert_eq!(
            reloaded.session().await.user().unwrap().username,
            "adminanamol"
        );
    }

    #[tokio::test]
    async fn test_restore_purges_a_corrupt_entry() {
        let store = Arc::new(InMemoryKvStore::new());
        store
            .set(SessionGate::STORAGE_KEY, "not json at all {{")
            .await
            .unwrap();

        let gate = gate_over(store.clone()).await;
        assert!(!gate.is_authenticated().await);
        assert!(!store.exists(SessionGate::STORAGE_KEY).await);
    }

    #[tokio::test]
    async fn test_restore_ignores_an_anonymous_record_but_keeps_it() {
        let store = Arc::new(InMemoryKvStore::new());
        store
            .set(SessionGate::STORAGE_KEY, r#"{"isAuthenticated":false}"#)
            .await
            .unwrap();

        let gate = gate_over(store.clone()).await;
        assert!(!gate.is_authenticated().await);
        // Only unparseable entries are purged; this one stays.
        assert!(store.exists(SessionGate::STORAGE_KEY).await);
    }

    #[tokio::test]
    async fn test_restore_ignores_authenticated_flag_without_user() {
        let store = Arc::new(InMemoryKvStore::new());
        store
            .set(SessionGate::STORAGE_KEY, r#"{"isAuthenticated":true}"#)
            .await
            .unwrap();

        let gate = gate_over(store).await;
        assert!(!gate.is_authenticated().await);
    }
}
