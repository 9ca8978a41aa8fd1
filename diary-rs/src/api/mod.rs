//! HTTP layer for diary-rs
//!
//! Server-rendered pages plus a small JSON API over the same store.

pub mod handlers;
pub mod server;
pub mod web;

pub use handlers::AppState;
pub use server::DiaryServer;
