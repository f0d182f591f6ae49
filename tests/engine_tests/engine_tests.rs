//! Tests for Engine
//!
//! These tests verify:
//! - Course projections (overlay, catalog, enrolled, recommended)
//! - Lesson ordering and completion flags
//! - Enrollment creation and progress updates
//! - Achievements and streak grouping
//! - Caller identity isolation
//! - Concurrent enrollment from many threads

use std::sync::Arc;
use std::thread;

use chrono::{Duration, TimeZone, Utc};
use learnboard::engine::Engine;
use learnboard::model::{
    AchievementKind, EnrollmentStatus, NewAchievement, NewCourse, NewLesson, NewSubject, NewUser,
    UserId,
};
use learnboard::store::Store;
use learnboard::LearnError;

const ALEX: UserId = 1;

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded_engine() -> Engine {
    Engine::new(Store::seeded(Utc::now()))
}

fn add_user(engine: &Engine, username: &str) -> UserId {
    engine
        .create_user(NewUser {
            username: username.to_string(),
            password: "secret".to_string(),
            name: username.to_string(),
            email: format!("{username}@example.com"),
            avatar: None,
        })
        .id
}

// =============================================================================
// User & Subject Tests
// =============================================================================

#[test]
fn test_current_user() {
    let engine = seeded_engine();

    let user = engine.current_user(ALEX).unwrap();
    assert_eq!(user.username, "alex");
}

#[test]
fn test_current_user_missing() {
    let engine = seeded_engine();

    assert!(matches!(engine.current_user(77), Err(LearnError::UserNotFound)));
}

#[test]
fn test_user_lookup_by_username() {
    let engine = seeded_engine();
    let id = add_user(&engine, "bea");

    assert_eq!(engine.user_by_username("bea").map(|u| u.id), Some(id));
    assert_eq!(engine.user(id).unwrap().email, "bea@example.com");
    assert!(engine.user_by_username("nobody").is_none());
}

#[test]
fn test_subjects() {
    let engine = seeded_engine();
    let created = engine.create_subject(NewSubject {
        name: "History".to_string(),
    });

    let names: Vec<_> = engine.all_subjects().into_iter().map(|s| s.name).collect();
    assert_eq!(names.len(), 6);
    assert_eq!(names[0], "Mathematics");
    assert_eq!(names[5], "History");
    assert_eq!(engine.subject(created.id).unwrap().name, "History");
}

// =============================================================================
// Course Projection Tests
// =============================================================================

#[test]
fn test_course_with_enrollment_overlay() {
    let engine = seeded_engine();

    let course = engine.course(ALEX, 1).unwrap();
    assert_eq!(course.course.title, "Calculus I: Derivatives");
    assert_eq!(course.progress, Some(75));
    assert_eq!(course.status, Some(EnrollmentStatus::InProgress));
}

#[test]
fn test_course_without_enrollment_is_bare() {
    let engine = seeded_engine();

    let course = engine.course(ALEX, 4).unwrap();
    assert_eq!(course.progress, None);
    assert_eq!(course.status, None);
}

#[test]
fn test_course_unknown_id() {
    let engine = seeded_engine();

    assert!(engine.course(ALEX, 999).is_none());
}

#[test]
fn test_all_courses_marks_enrollment() {
    let engine = seeded_engine();
    let catalog = engine.all_courses(ALEX);

    assert_eq!(catalog.len(), 5);
    for entry in &catalog {
        if entry.enrolled {
            assert!(entry.status.is_some());
            assert!(entry.progress.is_some());
        } else {
            assert_eq!(entry.status, None);
            assert_eq!(entry.progress, None);
        }
    }

    let enrolled: Vec<_> = catalog.iter().filter(|c| c.enrolled).map(|c| c.course.id).collect();
    assert_eq!(enrolled, vec![1, 2, 3]);
    assert_eq!(catalog[2].status, Some(EnrollmentStatus::Completed));
}

#[test]
fn test_enrolled_courses() {
    let engine = seeded_engine();
    let courses = engine.enrolled_courses(ALEX);

    let rows: Vec<_> = courses
        .iter()
        .map(|c| (c.course.id, c.progress, c.status))
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, Some(75), Some(EnrollmentStatus::InProgress)),
            (2, Some(0), Some(EnrollmentStatus::NotStarted)),
            (3, Some(100), Some(EnrollmentStatus::Completed)),
        ]
    );
}

#[test]
fn test_enrolled_courses_skip_dangling_course() {
    let engine = seeded_engine();
    engine.create_enrollment(ALEX, 404).unwrap();

    let ids: Vec<_> = engine.enrolled_courses(ALEX).iter().map(|c| c.course.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_recommended_courses() {
    let engine = seeded_engine();
    let recommended = engine.recommended_courses(ALEX);

    let rows: Vec<_> = recommended
        .iter()
        .map(|c| (c.course.id, c.student_count.as_str()))
        .collect();
    assert_eq!(rows, vec![(4, "9k+"), (5, "15k+")]);
}

#[test]
fn test_recommended_courses_limit_and_exclusion() {
    let engine = seeded_engine();
    engine.create_enrollment(ALEX, 4).unwrap();
    engine.create_enrollment(ALEX, 5).unwrap();

    assert!(engine.recommended_courses(ALEX).is_empty());

    for n in 0..3 {
        engine.create_course(NewCourse {
            title: format!("Elective {n}"),
            description: "Extra".to_string(),
            thumbnail_url: None,
            duration: "2 weeks".to_string(),
            lesson_count: 4,
            subject_id: 1,
        });
    }

    let ids: Vec<_> = engine.recommended_courses(ALEX).iter().map(|c| c.course.id).collect();
    assert_eq!(ids, vec![6, 7]);
}

// =============================================================================
// Lesson Tests
// =============================================================================

#[test]
fn test_calculus_lessons_completion() {
    let engine = seeded_engine();
    let lessons = engine.lessons_by_course(1);

    assert_eq!(lessons.len(), 24);
    let orders: Vec<_> = lessons.iter().map(|l| l.lesson.order).collect();
    assert_eq!(orders, (1..=24).collect::<Vec<_>>());

    assert!(lessons[..18].iter().all(|l| l.completed));
    assert!(lessons[18..].iter().all(|l| !l.completed));
}

#[test]
fn test_physics_lessons_all_completed() {
    let engine = seeded_engine();
    let lessons = engine.lessons_by_course(3);

    assert_eq!(lessons.len(), 18);
    assert!(lessons.iter().all(|l| l.completed));
}

#[test]
fn test_other_lessons_not_completed() {
    let engine = seeded_engine();
    let lessons = engine.lessons_by_course(2);

    assert_eq!(lessons.len(), 32);
    assert!(lessons.iter().all(|l| !l.completed));
}

#[test]
fn test_lessons_unknown_course_is_empty() {
    let engine = seeded_engine();

    assert!(engine.lessons_by_course(999).is_empty());
}

#[test]
fn test_lessons_sorted_by_order_not_insertion() {
    let engine = seeded_engine();
    for order in [3, 1, 2] {
        engine.create_lesson(NewLesson {
            course_id: 4,
            title: format!("Part {order}"),
            content: String::new(),
            order,
            video_url: None,
        });
    }

    let titles: Vec<_> = engine
        .lessons_by_course(4)
        .into_iter()
        .map(|l| l.lesson.title)
        .collect();
    assert_eq!(titles, vec!["Part 1", "Part 2", "Part 3"]);
    assert!(engine.lesson(75).is_some());
}

// =============================================================================
// Enrollment Tests
// =============================================================================

#[test]
fn test_create_enrollment() {
    let engine = seeded_engine();

    let enrollment = engine.create_enrollment(ALEX, 4).unwrap();
    assert_eq!(enrollment.id, 4);
    assert_eq!(enrollment.user_id, ALEX);
    assert_eq!(enrollment.course_id, 4);
    assert_eq!(enrollment.progress, 0);
    assert_eq!(enrollment.status, EnrollmentStatus::InProgress);

    assert_eq!(engine.enrollment(4), Some(enrollment));
}

#[test]
fn test_create_enrollment_is_idempotent() {
    let engine = seeded_engine();

    let first = engine.create_enrollment(ALEX, 5).unwrap();
    let second = engine.create_enrollment(ALEX, 5).unwrap();

    assert_eq!(first, second);
    assert_eq!(engine.stats().enrollments, 4);
}

#[test]
fn test_create_enrollment_returns_existing_fixture() {
    let engine = seeded_engine();

    let existing = engine.create_enrollment(ALEX, 1).unwrap();
    assert_eq!(existing.id, 1);
    assert_eq!(existing.progress, 75);
}

#[test]
fn test_create_enrollment_requires_known_user() {
    let engine = seeded_engine();

    assert!(matches!(
        engine.create_enrollment(9, 1),
        Err(LearnError::UserNotFound)
    ));
}

#[test]
fn test_update_progress_to_completed() {
    let engine = seeded_engine();

    let updated = engine.update_enrollment_progress(2, 100).unwrap();
    assert_eq!(updated.progress, 100);
    assert_eq!(updated.status, EnrollmentStatus::Completed);
}

#[test]
fn test_update_progress_to_in_progress() {
    let engine = seeded_engine();

    let updated = engine.update_enrollment_progress(3, 50).unwrap();
    assert_eq!(updated.status, EnrollmentStatus::InProgress);
    assert_eq!(engine.course(ALEX, 3).unwrap().progress, Some(50));
}

#[test]
fn test_update_progress_never_reverts_to_not_started() {
    let engine = seeded_engine();

    let updated = engine.update_enrollment_progress(2, 0).unwrap();
    assert_eq!(updated.status, EnrollmentStatus::InProgress);
}

#[test]
fn test_update_progress_is_not_clamped() {
    let engine = seeded_engine();

    assert_eq!(engine.update_enrollment_progress(1, 150).unwrap().progress, 150);
    assert_eq!(engine.update_enrollment_progress(1, -10).unwrap().progress, -10);
}

#[test]
fn test_update_progress_unknown_enrollment() {
    let engine = seeded_engine();

    let err = engine.update_enrollment_progress(999, 50).unwrap_err();
    assert!(matches!(err, LearnError::EnrollmentNotFound));
    assert_eq!(err.to_string(), "Enrollment not found");
}

#[test]
fn test_enrollment_for() {
    let engine = seeded_engine();

    assert_eq!(engine.enrollment_for(ALEX, 3).map(|e| e.id), Some(3));
    assert!(engine.enrollment_for(ALEX, 4).is_none());
}

// =============================================================================
// Achievement Tests
// =============================================================================

#[test]
fn test_user_achievements() {
    let engine = seeded_engine();
    let earned = engine.user_achievements(ALEX);

    let names: Vec<_> = earned.iter().map(|a| a.achievement.name.as_str()).collect();
    assert_eq!(names, vec!["Problem Solver", "Learning Streak", "Subject Master"]);
}

#[test]
fn test_award_achievement_allows_duplicates() {
    let engine = seeded_engine();

    engine.award_achievement(ALEX, 1).unwrap();
    engine.award_achievement(ALEX, 1).unwrap();

    assert_eq!(engine.user_achievements(ALEX).len(), 5);
}

#[test]
fn test_created_achievement_can_be_awarded() {
    let engine = seeded_engine();
    let badge = engine.create_achievement(NewAchievement {
        name: "Night Owl".to_string(),
        description: "Study after midnight".to_string(),
        icon: "moon".to_string(),
        kind: AchievementKind::Other("habit".to_string()),
    });

    engine.award_achievement(ALEX, badge.id).unwrap();

    assert_eq!(engine.all_achievements().len(), 4);
    let last = engine.user_achievements(ALEX).pop().unwrap();
    assert_eq!(last.achievement, badge);
}

#[test]
fn test_user_achievements_skip_dangling() {
    let engine = seeded_engine();
    engine.award_achievement(ALEX, 500).unwrap();

    assert_eq!(engine.user_achievements(ALEX).len(), 3);
    assert!(engine.achievement(500).is_none());
}

// =============================================================================
// Streak Tests
// =============================================================================

#[test]
fn test_seeded_streaks_one_per_day() {
    let engine = seeded_engine();
    let streaks = engine.user_streaks(ALEX);

    assert_eq!(streaks.len(), 4);
    assert!(streaks.iter().all(|d| d.count == 1));
    assert!(streaks.windows(2).all(|w| w[0].date < w[1].date));
}

#[test]
fn test_same_day_records_collapse_with_count() {
    let engine = Engine::new(Store::seeded(Utc.with_ymd_and_hms(2024, 5, 20, 9, 0, 0).unwrap()));
    let morning = Utc.with_ymd_and_hms(2024, 5, 20, 8, 15, 0).unwrap();

    engine.record_learning_streak_at(ALEX, morning).unwrap();
    engine
        .record_learning_streak_at(ALEX, morning + Duration::hours(10))
        .unwrap();

    let streaks = engine.user_streaks(ALEX);
    let today = streaks.last().unwrap();
    assert_eq!(today.date, Utc.with_ymd_and_hms(2024, 5, 20, 0, 0, 0).unwrap());
    assert_eq!(today.count, 2);
    assert_eq!(streaks.len(), 5);
}

#[test]
fn test_record_learning_streak_now() {
    let engine = seeded_engine();

    let streak = engine.record_learning_streak(ALEX).unwrap();
    assert_eq!(streak.user_id, ALEX);
    assert_eq!(streak.date.date_naive(), Utc::now().date_naive());
}

#[test]
fn test_record_learning_streak_requires_known_user() {
    let engine = Engine::new(Store::new());

    assert!(matches!(
        engine.record_learning_streak(ALEX),
        Err(LearnError::UserNotFound)
    ));
}

// =============================================================================
// Caller Identity Tests
// =============================================================================

#[test]
fn test_second_user_sees_own_state() {
    let engine = seeded_engine();
    let bea = add_user(&engine, "bea");

    assert!(engine.enrolled_courses(bea).is_empty());
    assert!(engine.all_courses(bea).iter().all(|c| !c.enrolled));
    assert_eq!(engine.recommended_courses(bea).len(), 2);
    assert!(engine.user_achievements(bea).is_empty());
    assert!(engine.user_streaks(bea).is_empty());

    engine.create_enrollment(bea, 1).unwrap();
    assert_eq!(engine.course(bea, 1).unwrap().progress, Some(0));
    assert_eq!(engine.course(ALEX, 1).unwrap().progress, Some(75));
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_enrollment_creates_one_record() {
    let engine = Arc::new(seeded_engine());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.create_enrollment(ALEX, 5).unwrap().id)
        })
        .collect();

    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(ids.iter().all(|&id| id == ids[0]));
    assert_eq!(engine.stats().enrollments, 4);
}
