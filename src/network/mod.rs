//! Network Module
//!
//! HTTP server and client.
//!
//! ## Architecture
//! - axum router on a tokio runtime
//! - Handlers share one `Engine` through `AppState`
//! - Blocking `Client` for the command-line tool

mod client;
mod handlers;
mod server;

pub use client::Client;
pub use handlers::ApiError;
pub use server::Server;

use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::engine::Engine;
use crate::model::UserId;
use crate::protocol;

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
    /// Identity every request acts as
    pub caller: UserId,
}

impl AppState {
    pub fn new(engine: Arc<Engine>, caller: UserId) -> Self {
        Self { engine, caller }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(protocol::USER, get(handlers::current_user))
        .route(protocol::SUBJECTS, get(handlers::subjects))
        // Courses
        .route(protocol::COURSES, get(handlers::enrolled_courses))
        .route(protocol::COURSES_ALL, get(handlers::all_courses))
        .route(protocol::COURSES_RECOMMENDED, get(handlers::recommended_courses))
        .route(protocol::COURSE, get(handlers::course))
        .route(protocol::COURSE_LESSONS, get(handlers::course_lessons))
        // Enrollments
        .route(protocol::ENROLLMENTS, post(handlers::create_enrollment))
        .route(protocol::ENROLLMENT_PROGRESS, patch(handlers::update_progress))
        // Achievements & streaks
        .route(protocol::ACHIEVEMENTS, get(handlers::achievements))
        .route(protocol::STREAKS, get(handlers::streaks))
        .route(protocol::STREAKS_RECORD, post(handlers::record_streak))
        // Health check
        .route(protocol::HEALTH, get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
