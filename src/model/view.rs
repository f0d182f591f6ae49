//! Projection shapes
//!
//! Read-only views combining an entity with data from other collections.
//! The base record is flattened so a view serializes as the entity plus the
//! extra fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Achievement, Course, EnrollmentStatus, Lesson};

/// A course with the caller's enrollment overlaid, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseView {
    #[serde(flatten)]
    pub course: Course,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnrollmentStatus>,
}

/// A catalog entry: every course, flagged with the caller's enrollment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCourse {
    #[serde(flatten)]
    pub course: Course,
    pub enrolled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EnrollmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedCourse {
    #[serde(flatten)]
    pub course: Course,
    /// Display string such as "9k+"
    pub student_count: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonView {
    #[serde(flatten)]
    pub lesson: Lesson,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAchievement {
    #[serde(flatten)]
    pub achievement: Achievement,
    pub earned_at: DateTime<Utc>,
}

/// Number of streak records on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakDay {
    /// Midnight UTC of the day
    pub date: DateTime<Utc>,
    pub count: usize,
}

/// Collection sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub users: usize,
    pub subjects: usize,
    pub courses: usize,
    pub lessons: usize,
    pub enrollments: usize,
    pub achievements: usize,
    pub user_achievements: usize,
    pub learning_streaks: usize,
}
