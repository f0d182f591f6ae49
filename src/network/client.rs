//! HTTP Client
//!
//! Blocking client for the REST API, used by `learnboard-cli`.

use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{LearnError, Result};
use crate::model::{
    CatalogCourse, CourseId, CourseView, EarnedAchievement, Enrollment, EnrollmentId,
    LearningStreak, LessonView, RecommendedCourse, StreakDay, Subject, User,
};
use crate::protocol::{self, CreateEnrollmentRequest, ErrorBody, UpdateProgressRequest};

/// Client for a running Learnboard server
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Client {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:5000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn user(&self) -> Result<User> {
        self.get(protocol::USER)
    }

    pub fn subjects(&self) -> Result<Vec<Subject>> {
        self.get(protocol::SUBJECTS)
    }

    pub fn enrolled_courses(&self) -> Result<Vec<CourseView>> {
        self.get(protocol::COURSES)
    }

    pub fn all_courses(&self) -> Result<Vec<CatalogCourse>> {
        self.get(protocol::COURSES_ALL)
    }

    pub fn recommended_courses(&self) -> Result<Vec<RecommendedCourse>> {
        self.get(protocol::COURSES_RECOMMENDED)
    }

    pub fn course(&self, id: CourseId) -> Result<CourseView> {
        self.get(&protocol::course_path(id))
    }

    pub fn lessons(&self, course_id: CourseId) -> Result<Vec<LessonView>> {
        self.get(&protocol::course_lessons_path(course_id))
    }

    pub fn enroll(&self, course_id: CourseId) -> Result<Enrollment> {
        let request = self
            .http
            .post(self.url(protocol::ENROLLMENTS))
            .json(&CreateEnrollmentRequest { course_id });
        self.send(request)
    }

    pub fn update_progress(&self, id: EnrollmentId, progress: i32) -> Result<Enrollment> {
        let request = self
            .http
            .patch(self.url(&protocol::enrollment_progress_path(id)))
            .json(&UpdateProgressRequest { progress });
        self.send(request)
    }

    pub fn achievements(&self) -> Result<Vec<EarnedAchievement>> {
        self.get(protocol::ACHIEVEMENTS)
    }

    pub fn streaks(&self) -> Result<Vec<StreakDay>> {
        self.get(protocol::STREAKS)
    }

    pub fn record_streak(&self) -> Result<LearningStreak> {
        self.send(self.http.post(self.url(protocol::STREAKS_RECORD)))
    }

    /// True when `/health` answers 200
    pub fn ping(&self) -> Result<bool> {
        let response = self.http.get(self.url(protocol::HEALTH)).send()?;
        Ok(response.status().is_success())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.http.get(self.url(path)))
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send()?;
        tracing::debug!(status = %response.status(), url = %response.url(), "Response received");
        decode(response)
    }
}

/// Decode a success body, or turn an error body into `LearnError::Remote`
fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json()?);
    }

    let text = response.text()?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);

    Err(LearnError::Remote {
        status: status.as_u16(),
        message,
    })
}
