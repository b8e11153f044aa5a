//! Request and response types for the platform's REST API.
//!
//! Types are grouped by resource area and mirror the backend's JSON field
//! names. Responses are decoded leniently: most fields are optional or
//! defaulted, and free-form parts (AI output, rubrics, questions) are kept
//! as `serde_json::Value`.

pub mod ai;
pub mod analytics;
pub mod assignment;
pub mod auth;
pub mod common;
pub mod course;
pub mod flashcard;
pub mod latex;
pub mod notification;
pub mod utility;
pub mod video;

pub use ai::{
    AiStudyPlanRequest, AnalyticsInsightsRequest, ChatAssistRequest, ChatReply,
    EnhanceContentRequest, GenerateAssignmentRubricRequest, GenerateCompleteCourseRequest,
    GradeSuggestion, IntelligentGradeRequest,
};
pub use analytics::ExportRequest;
pub use assignment::{
    Assignment, AssignmentList, AssignmentResponse, AssignmentStatus, CreateAssignmentRequest,
    GenerateAssignmentRequest, GradeSubmissionRequest, PublishAssignmentRequest, Submission,
    SubmissionList, SubmissionResponse, UpdateAssignmentRequest,
};
pub use auth::{
    LoginRequest, LoginResponse, PasswordChangeRequest, ProfileUpdate, RegisterLecturerRequest,
    RegisterStudentRequest, UserProfile, UserRole,
};
pub use common::{JsonValue, MessageResponse};
pub use course::{
    Course, CourseCreated, CourseList, CourseMaterials, CreateCourseRequest, Enrollment,
    EnrollmentResponse, EnrollmentStatusUpdate, GenerateMaterialsRequest,
    GeneratedMaterials, Material, MaterialsUploaded, UpdateCourseRequest,
};
pub use flashcard::{
    Flashcard, FlashcardHistory, FlashcardProgress, FlashcardSet, FlashcardsFromMaterialRequest,
    FlashcardsFromVideoRequest, GenerateFlashcardsRequest, ReviewDifficulty, ReviewRequest,
    StudyPlan, StudyPlanRequest,
};
pub use latex::{
    CompileLatexRequest, CompiledLatex, GenerateLatexRequest, GeneratedLatex, LatexAction,
    LatexHistory, LatexHistoryEntry, LatexProcessRequest, LatexResult,
};
pub use notification::{InboxNotification, NotificationList, NotificationSettings};
pub use test::{
    AttemptList, AttemptResult, CreateTestRequest, GenerateTestRequest, GeneratedTest,
    StartedAttempt, SubmitTestRequest, Test, TestAnswer, TestAttempt, TestList, TestResponse,
    TestType, UpdateTestRequest,
};
pub use utility::{ConvertRequest, SearchResults, UploadedFile};
pub use video::{
    ExplainVideoRequest, KeyPoints, ProcessYoutubeRequest, VideoAnalysis, VideoAnalysisList,
    VideoAnalysisType, VideoExplanation, VideoSummary,
};
