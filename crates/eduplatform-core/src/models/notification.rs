//! In-app notification inbox and delivery settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxNotification {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationList {
    #[serde(default)]
    pub notifications: Vec<InboxNotification>,
    #[serde(default)]
    pub unread_count: Option<usize>,
}

impl NotificationList {
    pub fn unread(&self) -> usize {
        self.unread_count
            .unwrap_or_else(|| self.notifications.iter().filter(|n| !n.is_read).count())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub assignment_reminders: bool,
    pub grade_notifications: bool,
}
