use crate::models::{MessageResponse, NotificationList, NotificationSettings};

use super::{ApiClient, Result};

pub struct NotificationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NotificationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn all(&self) -> Result<NotificationList> {
        self.client.get("/api/v1/notifications").await
    }

    pub async fn mark_as_read(&self, notification_id: &str) -> Result<MessageResponse> {
        self.client
            .put_empty(&format!("/api/v1/notifications/{}/read", notification_id))
            .await
    }

    pub async fn mark_all_as_read(&self) -> Result<MessageResponse> {
        self.client.put_empty("/api/v1/notifications/read-all").await
    }

    pub async fn settings(&self) -> Result<NotificationSettings> {
        self.client.get("/api/v1/notifications/settings").await
    }

    pub async fn update_settings(
        &self,
        data: &NotificationSettings,
    ) -> Result<NotificationSettings> {
        self.client.put("/api/v1/notifications/settings", data).await
    }
}
