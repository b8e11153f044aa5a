//! Courses, materials and enrollments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateMaterialsRequest {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n_slides: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lecturer_id: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Course {
    /// "CS101 - Intro to Computing"
    pub fn display_name(&self) -> String {
        if self.code.is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.code, self.title)
        }
    }
}

/// Course listings. The count field depends on the endpoint:
/// `total` for the catalogue, `total_enrolled` for a student,
/// `total_courses` for a lecturer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseList {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub total_enrolled: Option<usize>,
    #[serde(default)]
    pub total_courses: Option<usize>,
    #[serde(default)]
    pub lecturer_id: Option<String>,
}

impl CourseList {
    pub fn count(&self) -> usize {
        self.total
            .or(self.total_enrolled)
            .or(self.total_courses)
            .unwrap_or(self.courses.len())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCreated {
    #[serde(default)]
    pub message: Option<String>,
    pub course: Course,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub material_type: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseMaterials {
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default)]
    pub materials: Vec<Material>,
}

/// Result of AI material generation: a preview, or the saved material.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratedMaterials {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub preview: Option<Value>,
    #[serde(default)]
    pub key_concepts: Option<Value>,
    #[serde(default)]
    pub powerpoint_available: bool,
    #[serde(default)]
    pub material: Option<Material>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialsUploaded {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub material: Option<Material>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub enrolled_at: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub enrollment: Option<Enrollment>,
}

/// Body for the enrollment status route. The status vocabulary is owned
/// by the backend and passed through as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentStatusUpdate {
    pub status: String,
}
