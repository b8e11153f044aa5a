//! Wiring between the terminal and the core client: notification rendering,
//! the session-expired message and session store selection.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use eduplatform_core::config::{ClientConfig, Config};
use eduplatform_core::notify::{Notification, NotificationLevel, Notifier, SessionObserver};
use eduplatform_core::{ApiClient, FileSessionStore, KeyringSessionStore, SessionStore};
use tracing::debug;

/// Prints notifications to stderr, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, n: Notification) {
        eprintln!("{}", render(&n));
    }
}

fn render(n: &Notification) -> String {
    match n.level {
        NotificationLevel::Error => format!("[{}] {}", n.title, n.message),
        NotificationLevel::Success | NotificationLevel::Info if n.title.is_empty() => {
            n.message.clone()
        }
        NotificationLevel::Success | NotificationLevel::Info => {
            format!("[{}] {}", n.title, n.message)
        }
    }
}

/// A terminal has no login page to navigate to, so expiry becomes a hint.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginHint;

impl SessionObserver for LoginHint {
    fn session_expired(&self, login_path: &str) {
        debug!(login_path, "Session expired");
        eprintln!("Session expired, please run `eduplatform login`");
    }
}

/// Where the bearer token lives between invocations.
pub enum StoreChoice {
    Keyring,
    File(Option<PathBuf>),
}

pub fn open_store(choice: StoreChoice, config: &Config) -> Result<Arc<dyn SessionStore>> {
    let store: Arc<dyn SessionStore> = match choice {
        StoreChoice::Keyring => Arc::new(KeyringSessionStore::new()),
        StoreChoice::File(Some(dir)) => Arc::new(FileSessionStore::new(dir)),
        StoreChoice::File(None) => {
            let dir = config
                .cache_dir()
                .context("No cache directory for the session file")?;
            Arc::new(FileSessionStore::new(dir))
        }
    };
    Ok(store)
}

pub fn build_client(api_url: Option<&str>, store: Arc<dyn SessionStore>) -> Result<ApiClient> {
    let config = match api_url {
        Some(url) => ClientConfig::new(url)?,
        None => ClientConfig::from_env()?,
    };
    debug!(base_url = %config.base_url, "Using API");

    let client = ApiClient::builder(config)
        .shared_session_store(store)
        .notifier(StderrNotifier)
        .session_observer(LoginHint)
        .build()?;
    Ok(client)
}
