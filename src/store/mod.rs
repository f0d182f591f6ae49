//! Store Module
//!
//! In-memory entity store.
//!
//! ## Responsibilities
//! - Hold one keyed collection per entity
//! - Assign identifiers (per collection, monotonically increasing, never reused)
//! - Populate fixture data on request
//!
//! ## Data Structure Choice
//! Each collection is a BTreeMap keyed by id. Ids only grow, so key order is
//! insertion order and no separate ordering index is needed.
//!
//! The store itself does no locking; `Engine` wraps it in a RwLock.
//! There is no update or delete primitive besides `Collection::get_mut`.

mod collection;
mod seed;

pub use collection::{Collection, Record};

use chrono::{DateTime, Utc};

use crate::model::{
    Achievement, Course, Enrollment, LearningStreak, Lesson, StoreStats, Subject, User,
    UserAchievement,
};

/// All entity collections for one process (or one test)
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: Collection<User>,
    pub subjects: Collection<Subject>,
    pub courses: Collection<Course>,
    pub lessons: Collection<Lesson>,
    pub enrollments: Collection<Enrollment>,
    pub achievements: Collection<Achievement>,
    pub user_achievements: Collection<UserAchievement>,
    pub learning_streaks: Collection<LearningStreak>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the fixture data
    ///
    /// `now` stamps enrollments and awarded achievements; streak rows are
    /// placed on the four days before it.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut store = Self::new();
        seed::populate(&mut store, now);
        store
    }

    /// Collection sizes
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            users: self.users.len(),
            subjects: self.subjects.len(),
            courses: self.courses.len(),
            lessons: self.lessons.len(),
            enrollments: self.enrollments.len(),
            achievements: self.achievements.len(),
            user_achievements: self.user_achievements.len(),
            learning_streaks: self.learning_streaks.len(),
        }
    }
}
