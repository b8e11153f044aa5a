//! Account flows: each wraps one auth endpoint and confirms success through
//! the client's notifier. Failures are already notified by the client.

use eduplatform_core::api::Result;
use eduplatform_core::models::{
    LoginRequest, LoginResponse, PasswordChangeRequest, ProfileUpdate, RegisterLecturerRequest,
    RegisterStudentRequest, UserProfile,
};
use eduplatform_core::{ApiClient, Notification};
use tracing::debug;

/// Registration payload for either role.
#[derive(Debug, Clone)]
pub enum Registration {
    Student(RegisterStudentRequest),
    Lecturer(RegisterLecturerRequest),
}

pub async fn login(client: &ApiClient, email: &str, password: String) -> Result<LoginResponse> {
    let response = client
        .auth()
        .login(&LoginRequest::new(email, password))
        .await?;
    client.notify(Notification::success("Logged in successfully"));
    Ok(response)
}

/// The local session is dropped even when the server call fails, so logout
/// always ends in the logged-out state.
pub async fn logout(client: &ApiClient) {
    if let Err(e) = client.auth().logout().await {
        debug!(error = %e, "Server-side logout failed");
    }
    client.notify(Notification::info(
        "Logged out",
        "You have been logged out successfully",
    ));
}

pub async fn register(client: &ApiClient, registration: &Registration) -> Result<()> {
    match registration {
        Registration::Student(data) => client.auth().register_student(data).await?,
        Registration::Lecturer(data) => client.auth().register_lecturer(data).await?,
    };
    client.notify(Notification::success("Account created successfully"));
    Ok(())
}

pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> Result<UserProfile> {
    let profile = client.auth().update_profile(update).await?;
    client.notify(Notification::success("Profile updated successfully"));
    Ok(profile)
}

pub async fn change_password(client: &ApiClient, request: &PasswordChangeRequest) -> Result<()> {
    client.auth().change_password(request).await?;
    client.notify(Notification::success("Password changed successfully"));
    Ok(())
}
