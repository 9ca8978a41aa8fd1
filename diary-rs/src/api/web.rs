use askama_axum::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

use crate::api::handlers::{AppState, SearchParams};
use crate::diary::validation::validate_search;
use crate::diary::{self, DateOption, DiaryEntry, SearchQuery, DATE_FORMAT};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    query: String,
    max_query_len: usize,
    dates: Vec<DateOption>,
    entries: Vec<EntryRow>,
    error: String,
}

#[derive(Template)]
#[template(path = "entry.html")]
struct EntryTemplate {
    entry: EntryRow,
}

#[derive(Debug)]
struct EntryRow {
    id: i64,
    title: String,
    body: String,
    date: String,
}

impl From<DiaryEntry> for EntryRow {
    fn from(entry: DiaryEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            body: entry.body,
            date: entry
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

// Index page: date dropdown, search form and matching entries
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let entries = match state.store.list_entries().await {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to load diary entries: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load diary entries")
                .into_response();
        }
    };

    // An invalid form shows the error above the unfiltered list
    let (search, error) = match validate_search(
        params.query.as_deref(),
        params.date.as_deref(),
        state.max_query_len,
    ) {
        Ok(search) => (search, String::new()),
        Err(e) => {
            warn!("Rejected search form: {}", e);
            (SearchQuery::default(), e.to_string())
        }
    };

    let dates = diary::date_options(&entries, search.date);
    let results = diary::apply(&entries, &search);

    IndexTemplate {
        query: params.query.unwrap_or_default(),
        max_query_len: state.max_query_len,
        dates,
        entries: results.into_iter().map(EntryRow::from).collect(),
        error,
    }
    .into_response()
}

// Entry detail page
pub async fn entry_page(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    match state.store.get_entry(id).await {
        Ok(Some(entry)) => EntryTemplate {
            entry: entry.into(),
        }
        .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Entry not found").into_response(),
        Err(e) => {
            error!("Failed to load diary entry {}: {}", id, e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response()
        }
    }
}
