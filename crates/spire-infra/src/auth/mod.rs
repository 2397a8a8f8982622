//! Credential verification implementations.

mod credentials;

pub use credentials::{AdminCredentials, StaticCredentials};
