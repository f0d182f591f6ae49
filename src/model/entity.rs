//! Entity definitions
//!
//! Each entity has a `New*` draft carrying every field except `id`; the
//! store assigns the id when the draft is inserted.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AchievementId, CourseId, EnrollmentId, Id, LessonId, SubjectId, UserId};
use crate::store::Record;

/// Implements `Record` for an entity whose fields are `id` plus the draft's fields
macro_rules! record {
    ($entity:ident, $draft:ident { $($field:ident),* $(,)? }) => {
        impl Record for $entity {
            type Draft = $draft;

            fn from_draft(id: Id, draft: $draft) -> Self {
                Self { id, $($field: draft.$field),* }
            }

            fn id(&self) -> Id {
                self.id
            }
        }
    };
}

// =============================================================================
// Users
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Plaintext demo credential; never sent over the wire
    #[serde(skip_serializing, default)]
    pub password: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

record!(User, NewUser { username, password, name, email, avatar });

// =============================================================================
// Subjects & Courses
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewSubject {
    pub name: String,
}

record!(Subject, NewSubject { name });

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    /// Free text, e.g. "8 weeks"
    pub duration: String,
    pub lesson_count: u32,
    pub subject_id: SubjectId,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub duration: String,
    pub lesson_count: u32,
    pub subject_id: SubjectId,
}

record!(Course, NewCourse { title, description, thumbnail_url, duration, lesson_count, subject_id });

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub course_id: CourseId,
    pub title: String,
    pub content: String,
    /// Position within the course, 1-based
    pub order: u32,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLesson {
    pub course_id: CourseId,
    pub title: String,
    pub content: String,
    pub order: u32,
    #[serde(default)]
    pub video_url: Option<String>,
}

record!(Lesson, NewLesson { course_id, title, content, order, video_url });

// =============================================================================
// Enrollments
// =============================================================================

/// Enrollment lifecycle
///
/// Starts as `NotStarted` (fixtures only) or `InProgress`. Once a progress
/// update happens the status is either `InProgress` or `Completed`; it never
/// returns to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnrollmentStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl EnrollmentStatus {
    /// Status after a progress update
    pub fn for_progress(progress: i32) -> Self {
        if progress >= 100 {
            EnrollmentStatus::Completed
        } else {
            EnrollmentStatus::InProgress
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::NotStarted => "not-started",
            EnrollmentStatus::InProgress => "in-progress",
            EnrollmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub course_id: CourseId,
    /// Percentage, expected in 0..=100 but not clamped
    pub progress: i32,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEnrollment {
    pub user_id: UserId,
    pub course_id: CourseId,
    pub progress: i32,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
}

record!(Enrollment, NewEnrollment { user_id, course_id, progress, status, enrolled_at });

// =============================================================================
// Achievements
// =============================================================================

/// Achievement category; unknown categories are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AchievementKind {
    Streak,
    Course,
    Problem,
    Other(String),
}

impl From<String> for AchievementKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "streak" => AchievementKind::Streak,
            "course" => AchievementKind::Course,
            "problem" => AchievementKind::Problem,
            _ => AchievementKind::Other(s),
        }
    }
}

impl From<AchievementKind> for String {
    fn from(kind: AchievementKind) -> Self {
        match kind {
            AchievementKind::Streak => "streak".to_string(),
            AchievementKind::Course => "course".to_string(),
            AchievementKind::Problem => "problem".to_string(),
            AchievementKind::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    /// Symbolic icon name resolved by the client
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewAchievement {
    pub name: String,
    pub description: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: AchievementKind,
}

record!(Achievement, NewAchievement { name, description, icon, kind });

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAchievement {
    pub id: Id,
    pub user_id: UserId,
    pub achievement_id: AchievementId,
    pub earned_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserAchievement {
    pub user_id: UserId,
    pub achievement_id: AchievementId,
    pub earned_at: DateTime<Utc>,
}

record!(UserAchievement, NewUserAchievement { user_id, achievement_id, earned_at });

// =============================================================================
// Learning Streaks
// =============================================================================

/// One day of engagement; several rows on the same day are allowed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStreak {
    pub id: Id,
    pub user_id: UserId,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLearningStreak {
    pub user_id: UserId,
    pub date: DateTime<Utc>,
}

record!(LearningStreak, NewLearningStreak { user_id, date });
