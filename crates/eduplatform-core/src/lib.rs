//! Core library for the Agentic AI Education Platform client.
//!
//! - `api`: the session-aware `ApiClient` and its typed endpoint catalogue
//! - `auth`: bearer token storage behind the `SessionStore` trait
//! - `notify`: notification and session-expired hooks for the host application
//! - `config`: base URL resolution and the persisted config file
//! - `models`: request/response types per resource area

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod notify;

pub use api::{ApiClient, ApiError, MultipartBuilder, RequestBody};
pub use auth::{FileSessionStore, KeyringSessionStore, MemorySessionStore, SessionStore};
pub use config::{ClientConfig, Config};
pub use notify::{Notification, NotificationLevel, Notifier, SessionObserver};
