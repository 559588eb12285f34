//! Equipment Log System
//!
//! A single-user equipment inventory tracker: records equipment entries,
//! lists and filters them, computes aggregate statistics, and exports the
//! log as CSV or PDF, backed by a durable SQLite table.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
