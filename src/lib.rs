//! # Learnboard
//!
//! Backend for a learning dashboard:
//! - In-memory entity store seeded with a demo catalog
//! - Course, lesson, enrollment, achievement and streak projections
//! - JSON REST API over HTTP
//! - Command-line client
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HTTP Server (axum)                        │
//! │              /api/* routes, caller identity                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Engine                                │
//! │        projections + mutations (Single Writer / RwLock)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!   ┌──────────────────────────────────────────────────────┐
//!   │                       Store                          │
//!   │  users · subjects · courses · lessons · enrollments  │
//!   │  achievements · user achievements · learning streaks │
//!   └──────────────────────────────────────────────────────┘
//! ```
//!
//! State lives for the lifetime of the process; nothing is persisted.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod engine;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LearnError, Result};
pub use config::Config;
pub use engine::Engine;
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Learnboard
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
