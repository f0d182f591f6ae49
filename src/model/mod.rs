//! Model Module
//!
//! Entity records held by the store and the denormalized views the engine
//! projects from them.
//!
//! ## Wire Format
//! All records serialize to camelCase JSON. Optional overlay fields on views
//! (`status`, `progress`) are omitted when absent; nullable entity fields
//! (`avatar`, `thumbnailUrl`, `videoUrl`) serialize as `null`.

mod entity;
mod view;

pub use entity::{
    Achievement, AchievementKind, Course, Enrollment, EnrollmentStatus, LearningStreak, Lesson,
    NewAchievement, NewCourse, NewEnrollment, NewLearningStreak, NewLesson, NewSubject, NewUser,
    NewUserAchievement, Subject, User, UserAchievement,
};
pub use view::{
    CatalogCourse, CourseView, EarnedAchievement, LessonView, RecommendedCourse, StoreStats,
    StreakDay,
};

/// Record identifier, unique within its collection and never reused
pub type Id = u32;

pub type UserId = Id;
pub type SubjectId = Id;
pub type CourseId = Id;
pub type LessonId = Id;
pub type EnrollmentId = Id;
pub type AchievementId = Id;
