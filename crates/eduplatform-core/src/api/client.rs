//! Session-aware HTTP client for the education platform API.
//!
//! Every call goes through `ApiClient::send`, which attaches the bearer token
//! from the injected `SessionStore`, and on failure evicts the session (401),
//! raises a notification, and hands the same error back to the caller.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::multipart::Form;
use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::auth::{MemorySessionStore, SessionStore};
use crate::config::ClientConfig;
use crate::notify::{
    NoopSessionObserver, Notification, Notifier, SessionObserver, TracingNotifier, LOGIN_PATH,
};

use super::{
    AiApi, AnalyticsApi, ApiError, AssignmentsApi, AuthApi, CoursesApi, ExportApi,
    FlashcardsApi, LatexApi, NotificationsApi, Result, TestsApi, UtilsApi, VideoApi,
};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Request body.
pub enum Payload {
    Empty,
    Json(Vec<u8>),
    Multipart(Form),
}

impl Payload {
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self> {
        serde_json::to_vec(body)
            .map(Payload::Json)
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to serialize body: {}", e)))
    }
}

/// Body for endpoints accepting either a JSON record or a multipart form.
pub enum RequestBody<T> {
    Json(T),
    Multipart(Form),
}

impl<T: Serialize> RequestBody<T> {
    pub(crate) fn into_payload(self) -> Result<Payload> {
        match self {
            RequestBody::Json(body) => Payload::json(&body),
            RequestBody::Multipart(form) => Ok(Payload::Multipart(form)),
        }
    }

    pub(crate) fn is_multipart(&self) -> bool {
        matches!(self, RequestBody::Multipart(_))
    }
}

/// API client for the education platform.
/// Clone is cheap - the HTTP pool, session store and hooks are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    observer: Arc<dyn SessionObserver>,
    /// Set once a 401 has evicted the session; re-armed by `store_token`.
    expired: Arc<AtomicBool>,
}

pub struct ApiClientBuilder {
    config: ClientConfig,
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    observer: Arc<dyn SessionObserver>,
}

impl ApiClientBuilder {
    pub fn session_store(mut self, store: impl SessionStore + 'static) -> Self {
        self.store = Arc::new(store);
        self
    }

    pub fn shared_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    pub fn session_observer(mut self, observer: impl SessionObserver + 'static) -> Self {
        self.observer = Arc::new(observer);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(JSON_CONTENT_TYPE),
        );

        let http = Client::builder()
            .timeout(self.config.request_timeout)
            .default_headers(headers)
            .build()?;

        Ok(ApiClient {
            http,
            base_url: self.config.base_url,
            store: self.store,
            notifier: self.notifier,
            observer: self.observer,
            expired: Arc::new(AtomicBool::new(false)),
        })
    }
}

impl ApiClient {
    /// Client with an in-memory session, log-only notifications and no
    /// session-expired subscriber.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            store: Arc::new(MemorySessionStore::new()),
            notifier: Arc::new(TracingNotifier),
            observer: Arc::new(NoopSessionObserver),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ===== Session =====

    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_some()
    }

    /// Store a freshly issued token and re-arm the expiry event.
    pub fn store_token(&self, token: &str) -> Result<()> {
        self.store
            .set(token)
            .map_err(|e| ApiError::Session(format!("{:#}", e)))?;
        self.expired.store(false, Ordering::Release);
        Ok(())
    }

    pub fn clear_token(&self) -> Result<()> {
        self.store
            .clear()
            .map_err(|e| ApiError::Session(format!("{:#}", e)))
    }

    /// Hand a host-level message (e.g. a success confirmation) to the same
    /// notifier that receives request failures.
    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    // ===== Resource areas =====

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn courses(&self) -> CoursesApi<'_> {
        CoursesApi::new(self)
    }

    pub fn assignments(&self) -> AssignmentsApi<'_> {
        AssignmentsApi::new(self)
    }

    pub fn tests(&self) -> TestsApi<'_> {
        TestsApi::new(self)
    }

    pub fn video(&self) -> VideoApi<'_> {
        VideoApi::new(self)
    }

    pub fn latex(&self) -> LatexApi<'_> {
        LatexApi::new(self)
    }

    pub fn flashcards(&self) -> FlashcardsApi<'_> {
        FlashcardsApi::new(self)
    }

    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi::new(self)
    }

    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi::new(self)
    }

    pub fn export(&self) -> ExportApi<'_> {
        ExportApi::new(self)
    }

    pub fn utils(&self) -> UtilsApi<'_> {
        UtilsApi::new(self)
    }

    // ===== Request plumbing =====

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, &[], Payload::Empty).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.send(Method::GET, path, query, Payload::Empty).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(Method::POST, path, &[], Payload::json(body)?).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::POST, path, &[], Payload::Empty).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T> {
        self.send(Method::POST, path, &[], Payload::Multipart(form)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send(Method::PUT, path, &[], Payload::json(body)?).await
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::PUT, path, &[], Payload::Empty).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::DELETE, path, &[], Payload::Empty).await
    }

    /// Issue one request. Fire-once: no retry, no caching.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        payload: Payload,
    ) -> Result<T> {
        let url = self.url(path);
        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let token = self.store.get();
        if let Some(ref token) = token {
            request = request.bearer_auth(token);
        }

        request = match payload {
            Payload::Empty => request,
            Payload::Json(body) => request
                .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(body),
            Payload::Multipart(form) => request.multipart(form),
        };

        debug!(%method, path, authenticated = token.is_some(), "Sending request");

        match self.execute(request, &url).await {
            Ok(value) => Ok(value),
            Err(err) => {
                self.handle_error(&method, path, &err);
                Err(err)
            }
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, &body));
        }

        let bytes = response.bytes().await?;
        let decoded = if bytes.iter().all(u8::is_ascii_whitespace) {
            // 204s and empty bodies: null for loose types, {} for records
            serde_json::from_slice(b"null").or_else(|_| serde_json::from_slice(b"{}"))
        } else {
            serde_json::from_slice(&bytes)
        };
        decoded.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn handle_error(&self, method: &Method, path: &str, err: &ApiError) {
        warn!(%method, path, status = ?err.status(), error = %err, "Request failed");

        if err.is_unauthorized() {
            self.evict_session();
        }

        self.notifier.notify(Notification::error(err.user_message()));
    }

    /// Drop the stored token and announce expiry once per session.
    fn evict_session(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear session after 401");
        }
        if self
            .expired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            info!("Session expired, redirecting to login");
            self.observer.session_expired(LOGIN_PATH);
        }
    }
}
