//! Entry search and date filtering
//!
//! All functions here are pure: they take a snapshot of entries, never
//! mutate it, and keep the relative order of whatever they return.

use chrono::NaiveDate;

use super::types::{DateOption, DiaryEntry, SearchQuery};

/// Return the entries whose title or body contains `query`, ignoring case.
///
/// An absent or empty query returns every entry. Matching is a plain
/// substring test on each field independently; an entry that matches in
/// both fields appears once.
pub fn search(entries: &[DiaryEntry], query: Option<&str>) -> Vec<DiaryEntry> {
    let needle = match query {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return entries.to_vec(),
    };

    entries
        .iter()
        .filter(|entry| matches(entry, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased.
fn matches(entry: &DiaryEntry, needle: &str) -> bool {
    entry.title.to_lowercase().contains(needle) || entry.body.to_lowercase().contains(needle)
}

/// Keep entries written on `date`. Undated entries never match a date.
pub fn filter_by_date(entries: &[DiaryEntry], date: Option<NaiveDate>) -> Vec<DiaryEntry> {
    match date {
        Some(date) => entries
            .iter()
            .filter(|entry| entry.date == Some(date))
            .cloned()
            .collect(),
        None => entries.to_vec(),
    }
}

/// Date filter, then text search.
pub fn apply(entries: &[DiaryEntry], query: &SearchQuery) -> Vec<DiaryEntry> {
    let by_date = filter_by_date(entries, query.date);
    search(&by_date, query.text())
}

/// Distinct entry dates, newest first.
pub fn available_dates(entries: &[DiaryEntry]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = entries.iter().filter_map(|entry| entry.date).collect();
    dates.sort_unstable_by(|a, b| b.cmp(a));
    dates.dedup();
    dates
}

/// Options for the date-selection dropdown.
pub fn date_options(entries: &[DiaryEntry], selected: Option<NaiveDate>) -> Vec<DateOption> {
    available_dates(entries)
        .into_iter()
        .map(|date| DateOption::new(date, selected))
        .collect()
}
