//! Integration tests for the session-aware API client.
//!
//! These run the client against a `wiremock` server and check token
//! attachment, 401 eviction, error notifications and body encoding.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use eduplatform_core::api::{ApiClient, ApiError, MultipartBuilder, RequestBody, FALLBACK_MESSAGE};
use eduplatform_core::auth::{MemorySessionStore, SessionStore};
use eduplatform_core::config::ClientConfig;
use eduplatform_core::models::{
    CreateCourseRequest, GradeSubmissionRequest, LoginRequest, PublishAssignmentRequest,
    UpdateCourseRequest, UserRole,
};
use eduplatform_core::notify::{Notification, NotificationLevel, Notifier, SessionObserver};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Test doubles
// =============================================================================

#[derive(Clone, Default)]
struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

#[derive(Clone, Default)]
struct CountingObserver {
    hits: Arc<AtomicUsize>,
    last_path: Arc<Mutex<Option<String>>>,
}

impl CountingObserver {
    fn count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl SessionObserver for CountingObserver {
    fn session_expired(&self, login_path: &str) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.last_path.lock().unwrap() = Some(login_path.to_string());
    }
}

struct Harness {
    client: ApiClient,
    store: Arc<MemorySessionStore>,
    notifier: RecordingNotifier,
    observer: CountingObserver,
}

fn harness(base_url: &str, token: Option<&str>) -> Harness {
    let store = Arc::new(match token {
        Some(t) => MemorySessionStore::with_token(t),
        None => MemorySessionStore::new(),
    });
    let notifier = RecordingNotifier::default();
    let observer = CountingObserver::default();
    let client = ApiClient::builder(ClientConfig::new(base_url).expect("valid base url"))
        .session_store(store.clone())
        .notifier(notifier.clone())
        .session_observer(observer.clone())
        .build()
        .expect("Failed to build client");
    Harness {
        client,
        store,
        notifier,
        observer,
    }
}

fn me_body() -> serde_json::Value {
    json!({
        "id": "u1",
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "role": "student",
        "created_at": "2025-01-01T00:00:00"
    })
}

// =============================================================================
// Credential attachment
// =============================================================================

mod credential_attachment {
    use super::*;

    #[tokio::test]
    async fn test_bearer_header_sent_when_token_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .and(header("authorization", "Bearer tok123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(me_body()))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok123"));
        let profile = h.client.auth().me().await.expect("me should succeed");
        assert_eq!(profile.full_name(), "Ada Lovelace");
        assert_eq!(profile.role, UserRole::Student);
        assert!(h.notifier.all().is_empty());
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"courses": [], "total": 0})),
            )
            .mount(&server)
            .await;

        let h = harness(&server.uri(), None);
        let list = h.client.courses().all(false).await.unwrap();
        assert_eq!(list.count(), 0);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_token_is_read_per_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(me_body()))
            .mount(&server)
            .await;

        let h = harness(&server.uri(), None);
        h.client.auth().me().await.unwrap();
        h.store.set("late-token").unwrap();
        h.client.auth().me().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("authorization").is_none());
        assert_eq!(
            requests[1].headers.get("authorization").unwrap(),
            "Bearer late-token"
        );
    }
}

// =============================================================================
// Login / logout scenarios
// =============================================================================

mod login {
    use super::*;

    #[tokio::test]
    async fn test_login_success_stores_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .and(body_json(json!({"email": "a@b.com", "password": "secret1"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "tok123", "role": "student"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri(), None);
        let response = h
            .client
            .auth()
            .login(&LoginRequest::new("a@b.com", "secret1"))
            .await
            .expect("login should succeed");

        assert_eq!(response.role, UserRole::Student);
        assert_eq!(h.store.get().as_deref(), Some("tok123"));
        assert!(h.client.is_authenticated());
        assert!(h.notifier.all().is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_notifies_and_leaves_store() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let h = harness(&server.uri(), None);
        let err = h
            .client
            .auth()
            .login(&LoginRequest::new("a@b.com", "secret1"))
            .await
            .expect_err("login should fail");

        assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
        assert_eq!(
            h.notifier.messages(),
            vec!["Invalid credentials".to_string()]
        );
        let n = &h.notifier.all()[0];
        assert_eq!(n.title, "Error");
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(h.store.get(), None);
        assert_eq!(h.observer.count(), 0);
    }

    #[tokio::test]
    async fn test_logout_clears_token_even_when_server_fails() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/logout"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok123"));
        let result = h.client.auth().logout().await;

        assert!(result.is_err());
        assert_eq!(h.store.get(), None);
        assert_eq!(h.notifier.messages(), vec![FALLBACK_MESSAGE.to_string()]);
    }

    #[tokio::test]
    async fn test_logout_success_with_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/logout"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok123"));
        let ack = h
            .client
            .auth()
            .logout()
            .await
            .expect("logout should succeed");
        assert!(ack.message.is_none());
        assert_eq!(h.store.get(), None);
    }
}

// =============================================================================
// 401 handling
// =============================================================================

mod session_expiry {
    use super::*;

    #[tokio::test]
    async fn test_any_401_evicts_and_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/assignments/students/assignments"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Token expired"})),
            )
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("stale"));
        let err = h
            .client
            .assignments()
            .student_assignments()
            .await
            .expect_err("401 should surface");

        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert_eq!(h.store.get(), None);
        assert_eq!(h.observer.count(), 1);
        assert_eq!(
            h.observer.last_path.lock().unwrap().as_deref(),
            Some("/login")
        );
        assert_eq!(h.notifier.messages(), vec!["Token expired".to_string()]);
    }

    #[tokio::test]
    async fn test_concurrent_401s_redirect_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("stale"));
        let calls = (0..8).map(|_| {
            let client = h.client.clone();
            async move { client.auth().me().await }
        });
        let results = futures::future::join_all(calls).await;

        assert!(results
            .iter()
            .all(|r| matches!(r, Err(ApiError::Unauthorized { .. }))));
        assert_eq!(h.store.get(), None);
        assert_eq!(h.observer.count(), 1);
        // every failure is still surfaced
        assert_eq!(h.notifier.all().len(), 8);
    }

    #[tokio::test]
    async fn test_new_login_rearms_expiry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/auth/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"access_token": "fresh", "role": "lecturer"})),
            )
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("stale"));
        let _ = h.client.auth().me().await;
        assert_eq!(h.observer.count(), 1);

        h.client
            .auth()
            .login(&LoginRequest::new("a@b.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(h.store.get().as_deref(), Some("fresh"));

        let _ = h.client.auth().me().await;
        assert_eq!(h.observer.count(), 2);
        assert_eq!(h.store.get(), None);
    }
}

// =============================================================================
// Error surfacing
// =============================================================================

mod error_surfacing {
    use super::*;

    #[tokio::test]
    async fn test_plain_text_error_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/courses/c1"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("Internal Server Error"),
            )
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let err = h.client.courses().delete("c1").await.unwrap_err();

        match err {
            ApiError::Server {
                status, ref body, ..
            } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "Internal Server Error");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            h.notifier.messages(),
            vec!["An error occurred".to_string()]
        );
        // non-401 failures keep the session
        assert_eq!(h.store.get().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_network_failure_uses_fallback() {
        let h = harness("http://127.0.0.1:1", Some("tok"));
        let err = h.client.latex().history().await.unwrap_err();

        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(h.notifier.messages(), vec![FALLBACK_MESSAGE.to_string()]);
        assert_eq!(h.store.get().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_undecodable_success_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/auth/me"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string("<html>proxy page</html>"),
            )
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let err = h.client.auth().me().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(h.notifier.messages(), vec![FALLBACK_MESSAGE.to_string()]);
    }
}

// =============================================================================
// Body encoding
// =============================================================================

mod body_encoding {
    use super::*;

    fn content_type(request: &wiremock::Request) -> String {
        request
            .headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[tokio::test]
    async fn test_submission_is_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/assignments/a1/submit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Assignment submitted successfully",
                "submission": {"id": "s1", "assignment_id": "a1", "is_graded": false}
            })))
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let form = MultipartBuilder::new()
            .text("content", "My essay")
            .bytes("file", "essay.pdf", b"%PDF-1.4".to_vec())
            .unwrap()
            .build();
        let response = h.client.assignments().submit("a1", form).await.unwrap();
        assert_eq!(response.submission.unwrap().id, "s1");

        let requests = server.received_requests().await.unwrap();
        assert!(content_type(&requests[0]).starts_with("multipart/form-data"));
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("My essay"));
        assert!(body.contains("filename=\"essay.pdf\""));
    }

    #[tokio::test]
    async fn test_plain_endpoint_is_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/submissions/s1/grade"))
            .and(body_json(json!({"score": 92.0, "feedback": "Great work"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Submission graded successfully",
                "submission": {"id": "s1", "score": 92.0, "is_graded": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let grade = GradeSubmissionRequest {
            score: 92.0,
            feedback: "Great work".into(),
            rubric_scores: None,
        };
        let response = h.client.assignments().grade("s1", &grade).await.unwrap();
        assert!(response.submission.unwrap().is_graded);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(content_type(&requests[0]), "application/json");
    }

    #[tokio::test]
    async fn test_course_create_dispatches_on_body_kind() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courses/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Course created successfully",
                "course": {"id": "c1", "title": "Algorithms", "code": "CS201", "is_published": true}
            })))
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let data = CreateCourseRequest {
            title: "Algorithms".into(),
            description: "Sorting and searching".into(),
            code: "CS201".into(),
            ..Default::default()
        };
        h.client
            .courses()
            .create(RequestBody::Json(data))
            .await
            .unwrap();

        let form = MultipartBuilder::new()
            .text("title", "Algorithms")
            .text("code", "CS201")
            .build();
        let created = h
            .client
            .courses()
            .create(RequestBody::Multipart(form))
            .await
            .unwrap();
        assert_eq!(created.course.display_name(), "CS201 - Algorithms");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(content_type(&requests[0]), "application/json");
        assert!(content_type(&requests[1]).starts_with("multipart/form-data"));
    }

    #[tokio::test]
    async fn test_publish_form_uses_nested_route() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/assignments/assignments/a1/publish"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Assignment published",
                "assignment": {"id": "a1", "title": "Essay"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let form = MultipartBuilder::new()
            .text("due_date", "2025-03-01T23:59:00")
            .text("max_score", "100")
            .build();
        let response = h
            .client
            .assignments()
            .publish("a1", RequestBody::Multipart(form))
            .await
            .unwrap();
        assert_eq!(response.assignment.unwrap().id, "a1");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(content_type(&requests[0]).starts_with("multipart/form-data"));
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"due_date\""));
        assert!(body.contains("2025-03-01T23:59:00"));
    }

    #[tokio::test]
    async fn test_publish_json_uses_flat_route() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/assignments/a1/publish"))
            .and(body_json(json!({"due_date": "2025-03-01T23:59:00", "max_score": 100.0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Assignment published",
                "assignment": {"id": "a1", "title": "Essay"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let data = PublishAssignmentRequest {
            due_date: Some("2025-03-01T23:59:00".into()),
            max_score: Some(100.0),
        };
        let response = h
            .client
            .assignments()
            .publish("a1", RequestBody::Json(data))
            .await
            .unwrap();
        assert_eq!(response.message.as_deref(), Some("Assignment published"));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(content_type(&requests[0]), "application/json");
    }

    #[tokio::test]
    async fn test_material_upload_is_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courses/c1/materials/upload"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Materials uploaded successfully"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let form = MultipartBuilder::new()
            .text("title", "Week 1 slides")
            .bytes("file", "week1.pdf", b"%PDF-1.4".to_vec())
            .unwrap()
            .build();
        let response = h
            .client
            .courses()
            .upload_materials("c1", form)
            .await
            .unwrap();
        assert_eq!(
            response.message.as_deref(),
            Some("Materials uploaded successfully")
        );

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].headers.get("authorization").unwrap(),
            "Bearer tok"
        );
        assert!(content_type(&requests[0]).starts_with("multipart/form-data"));
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("Week 1 slides"));
        assert!(body.contains("filename=\"week1.pdf\""));
        assert!(body
            .to_ascii_lowercase()
            .contains("content-type: application/pdf"));
    }

    #[tokio::test]
    async fn test_put_json_body_arrives_intact() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/courses/enrollments/e1/status"))
            .and(body_json(json!({"status": "withdrawn"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Enrollment status updated"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/courses/c1"))
            .and(body_json(json!({"title": "Advanced Algorithms", "is_published": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "Course updated successfully",
                "course": {"id": "c1", "title": "Advanced Algorithms", "is_published": true}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let ack = h
            .client
            .courses()
            .update_enrollment_status("e1", "withdrawn")
            .await
            .unwrap();
        assert_eq!(ack.message.as_deref(), Some("Enrollment status updated"));

        let update = UpdateCourseRequest {
            title: Some("Advanced Algorithms".into()),
            is_published: Some(true),
            ..Default::default()
        };
        let updated = h.client.courses().update("c1", &update).await.unwrap();
        assert_eq!(updated.course.title, "Advanced Algorithms");

        let requests = server.received_requests().await.unwrap();
        assert!(requests
            .iter()
            .all(|r| content_type(r) == "application/json"));
    }

    #[tokio::test]
    async fn test_query_parameters_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/utils/search"))
            .and(query_param("q", "binary trees"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"results": [{"id": "m1"}], "total": 1})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/lecturers/l1/courses"))
            .and(query_param("include_unpublished", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "lecturer_id": "l1", "total_courses": 0, "courses": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri(), Some("tok"));
        let results = h.client.utils().search("binary trees").await.unwrap();
        assert_eq!(results.results.len(), 1);
        let courses = h
            .client
            .courses()
            .lecturer_courses("l1", true)
            .await
            .unwrap();
        assert_eq!(courses.lecturer_id.as_deref(), Some("l1"));
    }
}
