//! User-facing notifications and session lifecycle events.
//!
//! The API client never talks to a UI directly. Failures are reported to a
//! `Notifier` and session expiry is announced through a `SessionObserver`,
//! both supplied by the hosting application.

use tracing::{error, info};

/// Where the host should send the user once the session is gone.
pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A transient, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Fire-and-forget sink for notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Default notifier: turns notifications into log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, n: Notification) {
        match n.level {
            NotificationLevel::Error => error!(title = %n.title, "{}", n.message),
            _ => info!(title = %n.title, "{}", n.message),
        }
    }
}

/// Receives the "session expired" event raised on HTTP 401.
pub trait SessionObserver: Send + Sync {
    fn session_expired(&self, login_path: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSessionObserver;

impl SessionObserver for NoopSessionObserver {
    fn session_expired(&self, _login_path: &str) {}
}

impl<F> SessionObserver for F
where
    F: Fn(&str) + Send + Sync,
{
    fn session_expired(&self, login_path: &str) {
        self(login_path)
    }
}
