//! Engine Module
//!
//! The query/projection layer that sits on top of the store.
//!
//! ## Responsibilities
//! - Own the store for the lifetime of the process (or test)
//! - Join collections into the views the API returns
//! - Apply the few mutations the API allows (enrollments, progress,
//!   achievements, streaks)
//!
//! Every user-scoped operation takes the caller's `UserId` explicitly; the
//! engine has no notion of a "current user" of its own.

mod activity;
mod catalog;
mod enrollment;

use chrono::Utc;
use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{LearnError, Result};
use crate::model::{NewSubject, NewUser, StoreStats, Subject, SubjectId, User, UserId};
use crate::store::Store;

/// The main query engine
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Reads** (every projection): take the store read lock, so any number
///   of projections run concurrently.
/// - **Writes** (create/update/record): take the store write lock for the
///   whole operation, so check-then-insert sequences such as
///   `create_enrollment` cannot interleave.
///
/// Locks are never held across an `.await`; all methods are synchronous.
pub struct Engine {
    store: RwLock<Store>,
}

impl Engine {
    /// Wrap an existing store
    pub fn new(store: Store) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Build an engine from config
    ///
    /// Seeds fixture data when `config.seed` is set, otherwise starts empty.
    pub fn open(config: &Config) -> Result<Self> {
        if config.user_id == 0 {
            return Err(LearnError::Config("user_id must be a positive id".to_string()));
        }

        let store = if config.seed {
            Store::seeded(Utc::now())
        } else {
            Store::new()
        };

        let stats = store.stats();
        tracing::info!(
            users = stats.users,
            courses = stats.courses,
            lessons = stats.lessons,
            enrollments = stats.enrollments,
            "Store ready"
        );

        Ok(Self::new(store))
    }

    /// Collection sizes
    pub fn stats(&self) -> StoreStats {
        self.store.read().stats()
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// The caller's user record
    ///
    /// Fails with `UserNotFound` when the identity does not resolve.
    pub fn current_user(&self, caller: UserId) -> Result<User> {
        self.store
            .read()
            .users
            .get(caller)
            .cloned()
            .ok_or(LearnError::UserNotFound)
    }

    pub fn user(&self, id: UserId) -> Option<User> {
        self.store.read().users.get(id).cloned()
    }

    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.store
            .read()
            .users
            .find(|u| u.username == username)
            .cloned()
    }

    /// Insert a user
    ///
    /// Username uniqueness is not checked.
    pub fn create_user(&self, draft: NewUser) -> User {
        let user = self.store.write().users.create(draft);
        tracing::debug!(id = user.id, username = %user.username, "Created user");
        user
    }

    // =========================================================================
    // Subjects
    // =========================================================================

    pub fn subject(&self, id: SubjectId) -> Option<Subject> {
        self.store.read().subjects.get(id).cloned()
    }

    /// All subjects in insertion order
    pub fn all_subjects(&self) -> Vec<Subject> {
        self.store.read().subjects.iter().cloned().collect()
    }

    pub fn create_subject(&self, draft: NewSubject) -> Subject {
        let subject = self.store.write().subjects.create(draft);
        tracing::debug!(id = subject.id, name = %subject.name, "Created subject");
        subject
    }
}

/// Fail with `UserNotFound` unless `id` resolves in `store`
fn require_user(store: &Store, id: UserId) -> Result<()> {
    if store.users.get(id).is_some() {
        Ok(())
    } else {
        Err(LearnError::UserNotFound)
    }
}
