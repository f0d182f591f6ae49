//! Enrollment lookups and mutations

use chrono::Utc;

use super::{require_user, Engine};
use crate::error::{LearnError, Result};
use crate::model::{CourseId, Enrollment, EnrollmentId, EnrollmentStatus, NewEnrollment, UserId};

impl Engine {
    pub fn enrollment(&self, id: EnrollmentId) -> Option<Enrollment> {
        self.store.read().enrollments.get(id).cloned()
    }

    /// First enrollment linking `user` to `course`, if any
    pub fn enrollment_for(&self, user: UserId, course: CourseId) -> Option<Enrollment> {
        self.store
            .read()
            .enrollments
            .find(|e| e.course_id == course && e.user_id == user)
            .cloned()
    }

    /// Enroll the caller in a course
    ///
    /// Idempotent: an existing enrollment for (caller, course) is returned
    /// unchanged. Otherwise a new one starts at progress 0, `in-progress`.
    /// The course id is not checked against the catalog.
    pub fn create_enrollment(&self, caller: UserId, course_id: CourseId) -> Result<Enrollment> {
        let mut store = self.store.write();
        require_user(&store, caller)?;

        if let Some(existing) = store
            .enrollments
            .find(|e| e.course_id == course_id && e.user_id == caller)
        {
            tracing::debug!(id = existing.id, course_id, "Already enrolled");
            return Ok(existing.clone());
        }

        let enrollment = store.enrollments.create(NewEnrollment {
            user_id: caller,
            course_id,
            progress: 0,
            status: EnrollmentStatus::InProgress,
            enrolled_at: Utc::now(),
        });

        tracing::debug!(id = enrollment.id, user_id = caller, course_id, "Created enrollment");
        Ok(enrollment)
    }

    /// Overwrite an enrollment's progress and recompute its status
    ///
    /// `progress` is stored as given, without clamping. Status becomes
    /// `completed` at 100 or more, `in-progress` otherwise.
    pub fn update_enrollment_progress(&self, id: EnrollmentId, progress: i32) -> Result<Enrollment> {
        let mut store = self.store.write();
        let enrollment = store
            .enrollments
            .get_mut(id)
            .ok_or(LearnError::EnrollmentNotFound)?;

        enrollment.progress = progress;
        enrollment.status = EnrollmentStatus::for_progress(progress);

        tracing::debug!(id, progress, status = %enrollment.status, "Updated enrollment progress");
        Ok(enrollment.clone())
    }
}
