//! Course, material and enrollment endpoints.

use reqwest::multipart::Form;

use crate::models::{
    CourseCreated, CourseList, CourseMaterials, CreateCourseRequest, EnrollmentResponse,
    EnrollmentStatusUpdate, GenerateMaterialsRequest, GeneratedMaterials,
    MaterialsUploaded, MessageResponse, UpdateCourseRequest,
};

use super::{ApiClient, RequestBody, Result};

pub struct CoursesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CoursesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(&self, data: RequestBody<CreateCourseRequest>) -> Result<CourseCreated> {
        self.client
            .send(reqwest::Method::POST, "/api/v1/courses/", &[], data.into_payload()?)
            .await
    }

    pub async fn generate_materials(
        &self,
        course_id: &str,
        data: RequestBody<GenerateMaterialsRequest>,
    ) -> Result<GeneratedMaterials> {
        let path = format!("/api/v1/courses/{}/materials/generate", course_id);
        self.client
            .send(reqwest::Method::POST, &path, &[], data.into_payload()?)
            .await
    }

    pub async fn upload_materials(&self, course_id: &str, form: Form) -> Result<MaterialsUploaded> {
        let path = format!("/api/v1/courses/{}/materials/upload", course_id);
        self.client.post_multipart(&path, form).await
    }

    pub async fn materials(&self, course_id: &str) -> Result<CourseMaterials> {
        self.client
            .get(&format!("/api/v1/courses/{}/materials", course_id))
            .await
    }

    pub async fn enroll(&self, course_id: &str) -> Result<EnrollmentResponse> {
        self.client
            .post_empty(&format!("/api/v1/courses/{}/enroll", course_id))
            .await
    }

    pub async fn student_courses(&self) -> Result<CourseList> {
        self.client.get("/api/v1/courses/students/courses").await
    }

    /// Published courses; unpublished ones too when allowed (admins).
    pub async fn all(&self, include_unpublished: bool) -> Result<CourseList> {
        self.client
            .get_with_query(
                "/api/v1/courses",
                &[("include_unpublished", include_unpublished.to_string())],
            )
            .await
    }

    pub async fn lecturer_courses(
        &self,
        lecturer_id: &str,
        include_unpublished: bool,
    ) -> Result<CourseList> {
        let path = format!("/api/v1/courses/lecturers/{}/courses", lecturer_id);
        self.client
            .get_with_query(
                &path,
                &[("include_unpublished", include_unpublished.to_string())],
            )
            .await
    }

    pub async fn update(
        &self,
        course_id: &str,
        data: &UpdateCourseRequest,
    ) -> Result<CourseCreated> {
        self.client
            .put(&format!("/api/v1/courses/{}", course_id), data)
            .await
    }

    pub async fn delete(&self, course_id: &str) -> Result<MessageResponse> {
        self.client
            .delete(&format!("/api/v1/courses/{}", course_id))
            .await
    }

    /// Enrollments visible to the current student.
    // TODO: switch to /api/v1/courses/{id}/enrollments once the backend exposes it
    pub async fn enrollments(&self, _course_id: &str) -> Result<CourseList> {
        self.client.get("/api/v1/courses/students/courses").await
    }

    pub async fn update_enrollment_status(
        &self,
        enrollment_id: &str,
        status: &str,
    ) -> Result<EnrollmentResponse> {
        let path = format!("/api/v1/courses/enrollments/{}/status", enrollment_id);
        let body = EnrollmentStatusUpdate {
            status: status.to_string(),
        };
        self.client.put(&path, &body).await
    }
}
