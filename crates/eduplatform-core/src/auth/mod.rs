//! Session credential storage.
//!
//! This module provides:
//! - `SessionStore`: the key-value interface the API client reads the bearer token from
//! - `MemorySessionStore`: in-process storage for tests and short-lived hosts
//! - `KeyringSessionStore`: OS-level credential storage via keyring
//! - `FileSessionStore`: a JSON session file in the cache directory
//!
//! At most one credential is held at a time, under the fixed key `access_token`.

pub mod credentials;
pub mod session;
pub mod store;

pub use credentials::KeyringSessionStore;
pub use session::{FileSessionStore, StoredSession};
pub use store::{MemorySessionStore, SessionStore, TOKEN_KEY};
