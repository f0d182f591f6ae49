//! Protocol Module
//!
//! JSON shapes exchanged between the HTTP server and its clients.
//!
//! ## Routes
//! ```text
//! GET   /api/user                      current user
//! GET   /api/subjects                  all subjects
//! GET   /api/courses                   enrolled courses with status/progress
//! GET   /api/courses/all               all courses with enrollment overlay
//! GET   /api/courses/recommended       up to 2 courses not enrolled in
//! GET   /api/courses/:id               one course           (404 if absent)
//! GET   /api/courses/:id/lessons       lessons, completion-flagged
//! POST  /api/enrollments               {courseId}           (201 / 400)
//! PATCH /api/enrollments/:id/progress  {progress}           (200 / 400)
//! GET   /api/achievements              earned achievements
//! GET   /api/streaks                   [{date, count}]
//! POST  /api/streaks/record            append today's streak (201 / 400)
//! GET   /health                        liveness
//! ```
//!
//! ### Error Body
//! Every failure carries `{"message": "..."}`.

mod request;
mod response;

pub use request::{CreateEnrollmentRequest, UpdateProgressRequest};
pub use response::ErrorBody;

use crate::model::{CourseId, EnrollmentId};

pub const USER: &str = "/api/user";
pub const SUBJECTS: &str = "/api/subjects";
pub const COURSES: &str = "/api/courses";
pub const COURSES_ALL: &str = "/api/courses/all";
pub const COURSES_RECOMMENDED: &str = "/api/courses/recommended";
pub const COURSE: &str = "/api/courses/:id";
pub const COURSE_LESSONS: &str = "/api/courses/:id/lessons";
pub const ENROLLMENTS: &str = "/api/enrollments";
pub const ENROLLMENT_PROGRESS: &str = "/api/enrollments/:id/progress";
pub const ACHIEVEMENTS: &str = "/api/achievements";
pub const STREAKS: &str = "/api/streaks";
pub const STREAKS_RECORD: &str = "/api/streaks/record";
pub const HEALTH: &str = "/health";

/// Concrete path for `COURSE`
pub fn course_path(id: CourseId) -> String {
    format!("{COURSES}/{id}")
}

/// Concrete path for `COURSE_LESSONS`
pub fn course_lessons_path(id: CourseId) -> String {
    format!("{COURSES}/{id}/lessons")
}

/// Concrete path for `ENROLLMENT_PROGRESS`
pub fn enrollment_progress_path(id: EnrollmentId) -> String {
    format!("{ENROLLMENTS}/{id}/progress")
}
