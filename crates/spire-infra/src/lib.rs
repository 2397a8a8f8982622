//! # Spire Infrastructure
//!
//! Concrete implementations of the ports defined in `spire-core`.
//! Everything here is in-process state: the post collection, the session
//! mirror, and the key-value store all live in memory. Only the key-value
//! store outlives a shell reload, the way browser-local storage does.

pub mod auth;
pub mod content;
pub mod context;
pub mod kv;
pub mod session;

pub use auth::{AdminCredentials, StaticCredentials};
pub use content::InMemoryContentStore;
pub use context::AppContext;
pub use kv::InMemoryKvStore;
pub use session::{SessionError, SessionGate, SessionGateConfig};
