//! Fixture data
//!
//! Populates an empty store with the demo catalog: one user, five subjects,
//! five courses, lessons for the first three courses, three enrollments,
//! three awarded achievements, and four days of streak history.

use chrono::{DateTime, Duration, Utc};

use super::Store;
use crate::model::{
    AchievementId, AchievementKind, CourseId, EnrollmentStatus, NewAchievement, NewCourse, NewEnrollment,
    NewLearningStreak, NewLesson, NewSubject, NewUser, NewUserAchievement, UserId,
};

const SUBJECTS: [&str; 5] = ["Mathematics", "Physics", "Computer Science", "Biology", "Chemistry"];

/// (title, description, thumbnail, duration, lesson count, subject index into SUBJECTS)
const COURSES: [(&str, &str, &str, &str, u32, usize); 5] = [
    (
        "Calculus I: Derivatives",
        "Learn the fundamentals of calculus with a focus on derivatives and their applications.",
        "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=600&h=300&q=80",
        "8 weeks",
        24,
        0,
    ),
    (
        "Introduction to Data Science",
        "Explore the fundamentals of data science, including statistics, Python, and data visualization.",
        "https://images.unsplash.com/photo-1677442135148-1456f53e4787?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=600&h=300&q=80",
        "10 weeks",
        32,
        2,
    ),
    (
        "Physics: Mechanics",
        "Master the principles of classical mechanics, including motion, forces, and energy.",
        "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=600&h=300&q=80",
        "6 weeks",
        18,
        1,
    ),
    (
        "Biology: Cellular Processes",
        "Explore the fascinating world of cells and biological processes.",
        "https://images.unsplash.com/photo-1581089781785-603411fa81e5?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=600&h=300&q=80",
        "6 weeks",
        20,
        3,
    ),
    (
        "Computer Science Principles",
        "Learn the foundations of computer science and programming.",
        "https://images.unsplash.com/photo-1516321497487-e288fb19713f?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=600&h=300&q=80",
        "8 weeks",
        24,
        2,
    ),
];

/// Lesson series: (course index, lesson count, course label, intro title, topic prefix)
const LESSON_SERIES: [(usize, u32, &str, &str, &str); 3] = [
    (0, 24, "Calculus", "Introduction to Calculus", "Advanced Topic"),
    (1, 32, "Data Science", "Introduction to Data Science", "Data Analysis Technique"),
    (2, 18, "Physics", "Introduction to Mechanics", "Physics Principle"),
];

const CALCULUS_INTRO_VIDEO: &str = "https://example.com/calculus-intro.mp4";

/// Days of streak history recorded before `now`
const STREAK_HISTORY_DAYS: i64 = 4;

pub(super) fn populate(store: &mut Store, now: DateTime<Utc>) {
    let user_id = store
        .users
        .create(NewUser {
            username: "alex".to_string(),
            password: "password123".to_string(),
            name: "Alex Johnson".to_string(),
            email: "alex@example.com".to_string(),
            avatar: None,
        })
        .id;

    let subject_ids: Vec<_> = SUBJECTS
        .iter()
        .map(|name| store.subjects.create(NewSubject { name: name.to_string() }).id)
        .collect();

    let course_ids: Vec<CourseId> = COURSES
        .iter()
        .map(|&(title, description, thumbnail, duration, lesson_count, subject)| {
            store
                .courses
                .create(NewCourse {
                    title: title.to_string(),
                    description: description.to_string(),
                    thumbnail_url: Some(thumbnail.to_string()),
                    duration: duration.to_string(),
                    lesson_count,
                    subject_id: subject_ids[subject],
                })
                .id
        })
        .collect();

    for &(course, count, label, intro, topic) in &LESSON_SERIES {
        for i in 1..=count {
            let title = if i == 1 {
                format!("Lesson {i}: {intro}")
            } else {
                format!("Lesson {i}: {topic} {}", i - 1)
            };
            let video_url = (course == 0 && i == 1).then(|| CALCULUS_INTRO_VIDEO.to_string());

            store.lessons.create(NewLesson {
                course_id: course_ids[course],
                title,
                content: format!("This is the content for lesson {i} of the {label} course."),
                order: i,
                video_url,
            });
        }
    }

    let enrollments = [
        (course_ids[0], 75, EnrollmentStatus::InProgress),
        (course_ids[1], 0, EnrollmentStatus::NotStarted),
        (course_ids[2], 100, EnrollmentStatus::Completed),
    ];
    for (course_id, progress, status) in enrollments {
        store.enrollments.create(NewEnrollment {
            user_id,
            course_id,
            progress,
            status,
            enrolled_at: now,
        });
    }

    let achievements = [
        ("Problem Solver", "Complete 10 practice problems", "trophy", AchievementKind::Problem),
        ("Learning Streak", "Learn for 5 consecutive days", "flashlight", AchievementKind::Streak),
        ("Subject Master", "Complete all courses in a subject", "brain", AchievementKind::Course),
    ];
    for (name, description, icon, kind) in achievements {
        let achievement_id = store
            .achievements
            .create(NewAchievement {
                name: name.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
                kind,
            })
            .id;
        award(store, user_id, achievement_id, now);
    }

    for days_ago in (1..=STREAK_HISTORY_DAYS).rev() {
        store.learning_streaks.create(NewLearningStreak {
            user_id,
            date: now - Duration::days(days_ago),
        });
    }

    tracing::debug!(stats = ?store.stats(), "Seeded fixture data");
}

fn award(store: &mut Store, user_id: UserId, achievement_id: AchievementId, now: DateTime<Utc>) {
    store.user_achievements.create(NewUserAchievement {
        user_id,
        achievement_id,
        earned_at: now,
    });
}
