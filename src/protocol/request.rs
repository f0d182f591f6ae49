//! Request bodies

use serde::{Deserialize, Serialize};

use crate::model::CourseId;

/// Body of `POST /api/enrollments`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnrollmentRequest {
    pub course_id: CourseId,
}

/// Body of `PATCH /api/enrollments/:id/progress`
///
/// Any integer is accepted; out-of-range values are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProgressRequest {
    pub progress: i32,
}
