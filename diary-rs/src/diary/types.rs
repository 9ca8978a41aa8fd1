//! Diary types and data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum title length, in characters
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum body length, in characters
pub const MAX_BODY_LEN: usize = 1000;

/// Date format used in forms, query strings and storage
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single diary entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Assigned by the store on creation
    pub id: i64,
    pub title: String,
    pub body: String,
    pub date: Option<NaiveDate>,
}

/// Request to create a new entry
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntryRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Validated search parameters for one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free text matched against title and body
    pub query: Option<String>,
    /// Only entries written on this date
    pub date: Option<NaiveDate>,
}

impl SearchQuery {
    pub fn text(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

/// An option of the date-selection dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOption {
    /// Form value (YYYY-MM-DD)
    pub value: String,
    /// Human-readable label
    pub label: String,
    pub selected: bool,
}

impl DateOption {
    pub fn new(date: NaiveDate, selected: Option<NaiveDate>) -> Self {
        Self {
            value: date.format(DATE_FORMAT).to_string(),
            label: date.format("%d.%m.%Y").to_string(),
            selected: selected == Some(date),
        }
    }
}
