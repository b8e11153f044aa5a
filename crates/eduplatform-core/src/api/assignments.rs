//! Assignment authoring, submission and grading endpoints.

use reqwest::multipart::Form;
use reqwest::Method;

use crate::models::{
    Assignment, AssignmentList, AssignmentResponse, CreateAssignmentRequest,
    GenerateAssignmentRequest, GradeSubmissionRequest, MessageResponse, PublishAssignmentRequest,
    SubmissionList, SubmissionResponse, UpdateAssignmentRequest,
};

use super::{ApiClient, RequestBody, Result};

pub struct AssignmentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AssignmentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        course_id: &str,
        data: RequestBody<GenerateAssignmentRequest>,
    ) -> Result<AssignmentResponse> {
        let path = format!("/api/v1/assignments/courses/{}/assignments/generate", course_id);
        self.client
            .send(Method::POST, &path, &[], data.into_payload()?)
            .await
    }

    pub async fn create(
        &self,
        course_id: &str,
        data: &CreateAssignmentRequest,
    ) -> Result<AssignmentResponse> {
        let path = format!("/api/v1/assignments/courses/{}/assignments", course_id);
        self.client.post(&path, data).await
    }

    /// Publish an assignment. The form variant targets the backend's
    /// form-based publish route.
    pub async fn publish(
        &self,
        assignment_id: &str,
        data: RequestBody<PublishAssignmentRequest>,
    ) -> Result<AssignmentResponse> {
        let path = if data.is_multipart() {
            format!("/api/v1/assignments/assignments/{}/publish", assignment_id)
        } else {
            format!("/api/v1/assignments/{}/publish", assignment_id)
        };
        self.client
            .send(Method::PUT, &path, &[], data.into_payload()?)
            .await
    }

    pub async fn for_course(&self, course_id: &str) -> Result<AssignmentList> {
        self.client
            .get(&format!("/api/v1/assignments/courses/{}/assignments", course_id))
            .await
    }

    /// Submit work; the form carries `content` and/or `file`.
    pub async fn submit(&self, assignment_id: &str, form: Form) -> Result<SubmissionResponse> {
        let path = format!("/api/v1/assignments/{}/submit", assignment_id);
        self.client.post_multipart(&path, form).await
    }

    pub async fn grade(
        &self,
        submission_id: &str,
        data: &GradeSubmissionRequest,
    ) -> Result<SubmissionResponse> {
        let path = format!("/api/v1/submissions/{}/grade", submission_id);
        self.client.post(&path, data).await
    }

    pub async fn submissions(&self, assignment_id: &str) -> Result<SubmissionList> {
        self.client
            .get(&format!("/api/v1/assignments/{}/submissions", assignment_id))
            .await
    }

    pub async fn student_assignments(&self) -> Result<AssignmentList> {
        self.client.get("/api/v1/assignments/students/assignments").await
    }

    pub async fn get(&self, assignment_id: &str) -> Result<Assignment> {
        self.client
            .get(&format!("/api/v1/assignments/{}", assignment_id))
            .await
    }

    pub async fn update(
        &self,
        assignment_id: &str,
        data: &UpdateAssignmentRequest,
    ) -> Result<AssignmentResponse> {
        self.client
            .put(&format!("/api/v1/assignments/{}", assignment_id), data)
            .await
    }

    pub async fn delete(&self, assignment_id: &str) -> Result<MessageResponse> {
        self.client
            .delete(&format!("/api/v1/assignments/{}", assignment_id))
            .await
    }

    pub async fn auto_grade_all(&self, assignment_id: &str) -> Result<MessageResponse> {
        self.client
            .post_empty(&format!("/api/v1/assignments/{}/auto-grade-all", assignment_id))
            .await
    }
}
