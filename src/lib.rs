//! Bookstore Server
//!
//! A small REST JSON API serving a catalog of books out of an
//! in-memory, concurrency-safe store.

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

impl AppState {
    /// Build the state around a freshly seeded store
    pub fn new(config: AppConfig) -> Self {
        let repository =
            repository::Repository::new(repository::books::BooksRepository::seeded());
        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
