//! Request handlers
//!
//! One handler per route. Handlers call the engine synchronously with the
//! configured caller identity and map failures to `{message}` bodies.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::AppState;
use crate::error::LearnError;
use crate::model::{
    CatalogCourse, CourseId, CourseView, EarnedAchievement, Enrollment, EnrollmentId,
    LearningStreak, LessonView, RecommendedCourse, StreakDay, Subject, User,
};
use crate::protocol::{CreateEnrollmentRequest, ErrorBody, UpdateProgressRequest};

/// A failed request: status code plus `{message}` body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// 404 with the given message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ErrorBody::new(message),
        }
    }

    /// 400 with the given message
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody::new(message),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Mutation routes report every failure as 400
fn rejected(route: &'static str, e: impl std::fmt::Display) -> ApiError {
    tracing::warn!(route, error = %e, "Request rejected");
    ApiError::bad_request(e.to_string())
}

// =============================================================================
// Users & Subjects
// =============================================================================

/// GET /api/user
pub async fn current_user(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    state
        .engine
        .current_user(state.caller)
        .map(Json)
        .map_err(|e| ApiError::not_found(e.to_string()))
}

/// GET /api/subjects
pub async fn subjects(State(state): State<AppState>) -> Json<Vec<Subject>> {
    Json(state.engine.all_subjects())
}

// =============================================================================
// Courses & Lessons
// =============================================================================

/// GET /api/courses
pub async fn enrolled_courses(State(state): State<AppState>) -> Json<Vec<CourseView>> {
    Json(state.engine.enrolled_courses(state.caller))
}

/// GET /api/courses/all
pub async fn all_courses(State(state): State<AppState>) -> Json<Vec<CatalogCourse>> {
    Json(state.engine.all_courses(state.caller))
}

/// GET /api/courses/recommended
pub async fn recommended_courses(State(state): State<AppState>) -> Json<Vec<RecommendedCourse>> {
    Json(state.engine.recommended_courses(state.caller))
}

/// GET /api/courses/:id
///
/// A non-numeric id is treated like an unknown one.
pub async fn course(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CourseView>, ApiError> {
    raw_id
        .parse::<CourseId>()
        .ok()
        .and_then(|id| state.engine.course(state.caller, id))
        .map(Json)
        .ok_or_else(|| ApiError::not_found(LearnError::CourseNotFound.to_string()))
}

/// GET /api/courses/:id/lessons
pub async fn course_lessons(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Json<Vec<LessonView>> {
    let lessons = match raw_id.parse::<CourseId>() {
        Ok(id) => state.engine.lessons_by_course(id),
        Err(_) => Vec::new(),
    };
    Json(lessons)
}

// =============================================================================
// Enrollments
// =============================================================================

/// POST /api/enrollments
pub async fn create_enrollment(
    State(state): State<AppState>,
    body: Result<Json<CreateEnrollmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Enrollment>), ApiError> {
    let Json(request) =
        body.map_err(|e| rejected("create_enrollment", LearnError::Validation(e.body_text())))?;

    let enrollment = state
        .engine
        .create_enrollment(state.caller, request.course_id)
        .map_err(|e| rejected("create_enrollment", e))?;

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// PATCH /api/enrollments/:id/progress
pub async fn update_progress(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateProgressRequest>, JsonRejection>,
) -> Result<Json<Enrollment>, ApiError> {
    let id: EnrollmentId = raw_id
        .parse()
        .map_err(|_| rejected("update_progress", LearnError::EnrollmentNotFound))?;
    let Json(request) =
        body.map_err(|e| rejected("update_progress", LearnError::Validation(e.body_text())))?;

    state
        .engine
        .update_enrollment_progress(id, request.progress)
        .map(Json)
        .map_err(|e| rejected("update_progress", e))
}

// =============================================================================
// Achievements & Streaks
// =============================================================================

/// GET /api/achievements
pub async fn achievements(State(state): State<AppState>) -> Json<Vec<EarnedAchievement>> {
    Json(state.engine.user_achievements(state.caller))
}

/// GET /api/streaks
pub async fn streaks(State(state): State<AppState>) -> Json<Vec<StreakDay>> {
    Json(state.engine.user_streaks(state.caller))
}

/// POST /api/streaks/record
pub async fn record_streak(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<LearningStreak>), ApiError> {
    let streak = state
        .engine
        .record_learning_streak(state.caller)
        .map_err(|e| rejected("record_streak", e))?;

    Ok((StatusCode::CREATED, Json(streak)))
}

/// GET /health
pub async fn health() -> &'static str {
    "OK"
}
