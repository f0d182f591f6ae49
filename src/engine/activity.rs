//! Achievements and learning streaks

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::{require_user, Engine};
use crate::error::Result;
use crate::model::{
    Achievement, AchievementId, EarnedAchievement, LearningStreak, NewAchievement,
    NewLearningStreak, NewUserAchievement, StreakDay, UserAchievement, UserId,
};

impl Engine {
    // =========================================================================
    // Achievements
    // =========================================================================

    pub fn achievement(&self, id: AchievementId) -> Option<Achievement> {
        self.store.read().achievements.get(id).cloned()
    }

    pub fn all_achievements(&self) -> Vec<Achievement> {
        self.store.read().achievements.iter().cloned().collect()
    }

    pub fn create_achievement(&self, draft: NewAchievement) -> Achievement {
        let achievement = self.store.write().achievements.create(draft);
        tracing::debug!(id = achievement.id, name = %achievement.name, "Created achievement");
        achievement
    }

    /// Award an achievement to the caller, dated now
    ///
    /// Awarding the same achievement twice records it twice.
    pub fn award_achievement(
        &self,
        caller: UserId,
        achievement_id: AchievementId,
    ) -> Result<UserAchievement> {
        let mut store = self.store.write();
        require_user(&store, caller)?;

        let awarded = store.user_achievements.create(NewUserAchievement {
            user_id: caller,
            achievement_id,
            earned_at: Utc::now(),
        });

        tracing::debug!(id = awarded.id, user_id = caller, achievement_id, "Awarded achievement");
        Ok(awarded)
    }

    /// The caller's awarded achievements with the time each was earned
    ///
    /// Awards referencing a missing achievement are skipped.
    pub fn user_achievements(&self, caller: UserId) -> Vec<EarnedAchievement> {
        let store = self.store.read();

        store
            .user_achievements
            .filter(|ua| ua.user_id == caller)
            .filter_map(|ua| {
                let achievement = store.achievements.get(ua.achievement_id)?;
                Some(EarnedAchievement {
                    achievement: achievement.clone(),
                    earned_at: ua.earned_at,
                })
            })
            .collect()
    }

    // =========================================================================
    // Learning Streaks
    // =========================================================================

    /// The caller's streak records grouped by UTC calendar day, oldest first
    pub fn user_streaks(&self, caller: UserId) -> Vec<StreakDay> {
        let store = self.store.read();

        let mut per_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for streak in store.learning_streaks.filter(|s| s.user_id == caller) {
            *per_day.entry(streak.date.date_naive()).or_insert(0) += 1;
        }

        per_day
            .into_iter()
            .map(|(day, count)| StreakDay {
                date: day.and_time(NaiveTime::MIN).and_utc(),
                count,
            })
            .collect()
    }

    /// Record that the caller engaged today
    ///
    /// No same-day deduplication: each call adds one record.
    pub fn record_learning_streak(&self, caller: UserId) -> Result<LearningStreak> {
        self.record_learning_streak_at(caller, Utc::now())
    }

    /// Record a streak entry at a specific instant
    pub fn record_learning_streak_at(
        &self,
        caller: UserId,
        at: DateTime<Utc>,
    ) -> Result<LearningStreak> {
        let mut store = self.store.write();
        require_user(&store, caller)?;

        let streak = store.learning_streaks.create(NewLearningStreak {
            user_id: caller,
            date: at,
        });

        tracing::debug!(id = streak.id, user_id = caller, date = %streak.date, "Recorded learning streak");
        Ok(streak)
    }
}
