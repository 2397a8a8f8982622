//! Application context - shared state the presentation layer reads from.

use std::sync::Arc;

use spire_core::ports::{ContentStore, KeyValueStore};

use crate::auth::{AdminCredentials, StaticCredentials};
use crate::content::InMemoryContentStore;
use crate::session::{SessionError, SessionGate, SessionGateConfig};

/// Shared application context.
///
/// Constructed once at startup and passed explicitly to whatever renders the
/// pages; nothing here is a process-wide singleton.
#[derive(Clone)]
pub struct AppContext {
    pub content: Arc<dyn ContentStore>,
    pub gate: Arc<SessionGate>,
}

impl AppContext {
    /// Build the context with the in-memory adapters: seeded content store,
    /// environment-sourced credentials, and a session restored from the
    /// given key-value store.
    pub async fn bootstrap(kv: Arc<dyn KeyValueStore>) -> Result<Self, SessionError> {
        let content: Arc<dyn ContentStore> = Arc::new(InMemoryContentStore::seeded());

        let verifier = Arc::new(StaticCredentials::new(AdminCredentials::from_env())?);
        let gate = Arc::new(
            SessionGate::restore(kv, verifier, SessionGateConfig::from_env()).await?,
        );

        tracing::info!("application context initialized");

        Ok(Self { content, gate })
    }
}
