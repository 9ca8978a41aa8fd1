//! Diary entries: model, validation, search and storage

pub mod search;
pub mod store;
pub mod types;
pub mod validation;

pub use search::{apply, available_dates, date_options, filter_by_date, search};
pub use store::DiaryStore;
pub use types::*;
