//! Registration, login and account endpoints.

use tracing::{info, warn};

use crate::models::{
    LoginRequest, LoginResponse, MessageResponse, PasswordChangeRequest, ProfileUpdate,
    RegisterLecturerRequest, RegisterStudentRequest, UserProfile,
};

use super::{ApiClient, Result};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn register_student(
        &self,
        data: &RegisterStudentRequest,
    ) -> Result<MessageResponse> {
        self.client.post("/api/v1/auth/register/student", data).await
    }

    pub async fn register_lecturer(
        &self,
        data: &RegisterLecturerRequest,
    ) -> Result<MessageResponse> {
        self.client.post("/api/v1/auth/register/lecturer", data).await
    }

    /// Log in and store the returned token in the session store.
    ///
    /// The profile is not fetched here; call `me` once logged in.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        let response: LoginResponse = self.client.post("/api/v1/auth/login", credentials).await?;
        self.client.store_token(&response.access_token)?;
        info!(role = ?response.role, "Logged in");
        Ok(response)
    }

    pub async fn me(&self) -> Result<UserProfile> {
        self.client.get("/api/v1/auth/me").await
    }

    pub async fn update_profile(&self, data: &ProfileUpdate) -> Result<UserProfile> {
        self.client.put("/api/v1/auth/me", data).await
    }

    pub async fn change_password(&self, data: &PasswordChangeRequest) -> Result<MessageResponse> {
        self.client.put("/api/v1/auth/me/password", data).await
    }

    /// Tell the server we're leaving, then drop the local token regardless
    /// of how the server answered.
    pub async fn logout(&self) -> Result<MessageResponse> {
        let result = self.client.post_empty("/api/v1/auth/logout").await;
        if let Err(e) = self.client.clear_token() {
            warn!(error = %e, "Failed to clear session on logout");
        }
        info!("Logged out");
        result
    }
}
