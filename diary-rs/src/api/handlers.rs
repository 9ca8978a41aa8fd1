//! JSON API request handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::diary::validation::validate_search;
use crate::diary::{self, CreateEntryRequest, DiaryEntry, DiaryStore};
use crate::error::{DiaryError, Result};

/// Shared application state
pub struct AppState {
    pub store: DiaryStore,
    pub max_query_len: usize,
}

/// Search form / query-string parameters
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Free-text search
    pub query: Option<String>,
    /// Selected date (YYYY-MM-DD), empty for all dates
    pub date: Option<String>,
}

/// Entry list response
#[derive(Debug, Serialize)]
pub struct EntryList {
    pub entries: Vec<DiaryEntry>,
    pub total: usize,
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/entries - List entries, optionally filtered by `query` and `date`
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<EntryList>> {
    let query = validate_search(
        params.query.as_deref(),
        params.date.as_deref(),
        state.max_query_len,
    )?;

    let entries = state.store.list_entries().await?;
    let entries = diary::apply(&entries, &query);

    Ok(Json(EntryList {
        total: entries.len(),
        entries,
    }))
}

/// GET /api/entries/:id
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DiaryEntry>> {
    state
        .store
        .get_entry(id)
        .await?
        .map(Json)
        .ok_or_else(|| DiaryError::NotFound(format!("Diary entry not found: {}", id)))
}

/// POST /api/entries
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<DiaryEntry>)> {
    let entry = state.store.create_entry(request).await?;
    info!("Diary entry {} created", entry.id);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// DELETE /api/entries/:id
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    state.store.delete_entry(id).await?;
    info!("Diary entry {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
