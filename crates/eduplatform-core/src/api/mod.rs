//! REST API client module for the education platform backend.
//!
//! `ApiClient` owns transport, session and error plumbing. The endpoint
//! catalogue is split into one borrowed view per resource area
//! (`client.auth()`, `client.courses()`, ...), each method mapping to
//! exactly one backend operation under `/api/v1`.
//!
//! The API uses bearer token authentication; the token comes from the
//! login response's `access_token` field.

pub mod ai;
pub mod analytics;
pub mod assignments;
pub mod auth;
pub mod client;
pub mod courses;
pub mod error;
pub mod export;
pub mod flashcards;
pub mod latex;
pub mod notifications;
pub mod upload;
pub mod utils;
pub mod video;

pub use ai::AiApi;
pub use analytics::AnalyticsApi;
pub use assignments::AssignmentsApi;
pub use auth::AuthApi;
pub use client::{ApiClient, ApiClientBuilder, Payload, RequestBody};
pub use courses::CoursesApi;
pub use error::{ApiError, FALLBACK_MESSAGE};
pub use export::ExportApi;
pub use flashcards::FlashcardsApi;
pub use latex::LatexApi;
pub use notifications::NotificationsApi;
pub use tests::TestsApi;
pub use upload::MultipartBuilder;
pub use utils::UtilsApi;
pub use video::VideoApi;

pub type Result<T> = std::result::Result<T, ApiError>;
