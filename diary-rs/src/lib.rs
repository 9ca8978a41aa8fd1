//! diary-rs: a server-rendered diary with date selection and text search
//!
//! Entries carry a title, a body and an optional date. The index page lists
//! them under a date-selection dropdown and a search box; the search is a
//! case-insensitive substring match on title or body that keeps the stored
//! order.
//!
//! # Example
//!
//! ```no_run
//! use diary_rs::api::DiaryServer;
//! use diary_rs::config::Config;
//! use diary_rs::diary::DiaryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let store = DiaryStore::connect(&config.storage.database_url).await?;
//!
//!     let server = DiaryServer::new(store, &config);
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration management
//! - [`error`]: Error types and handling
//! - [`diary`]: Entry model, validation, search and storage
//! - [`api`]: HTML pages and JSON API
//! - [`logging`]: Tracing subscriber setup

pub mod api;
pub mod config;
pub mod diary;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::Config;
pub use error::{DiaryError, Result, ValidationError};
