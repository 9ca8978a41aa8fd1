//! SQLite persistence for diary entries

use chrono::NaiveDate;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::time::Duration;
use tracing::debug;

use super::types::{CreateEntryRequest, DiaryEntry, DATE_FORMAT};
use super::validation::validate_entry;
use crate::error::{DiaryError, Result};

/// Diary entries backed by a SQLite pool
#[derive(Clone)]
pub struct DiaryStore {
    db: SqlitePool,
}

impl DiaryStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Connect to `database_url` and make sure the schema exists
    pub async fn connect(database_url: &str) -> Result<Self> {
        let db = pool_options(database_url).connect(database_url).await?;

        let store = Self::new(db);
        store.init_db().await?;
        Ok(store)
    }

    /// Create the entries table
    pub async fn init_db(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS diary_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                body TEXT NOT NULL,
                date TEXT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.db)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_diary_entries_date ON diary_entries(date)")
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Insert a new entry and return it with its assigned id
    pub async fn create_entry(&self, request: CreateEntryRequest) -> Result<DiaryEntry> {
        validate_entry(&request)?;

        let date = request.date.map(|d| d.format(DATE_FORMAT).to_string());

        let result = sqlx::query("INSERT INTO diary_entries (title, body, date) VALUES (?, ?, ?)")
            .bind(&request.title)
            .bind(&request.body)
            .bind(date)
            .execute(&self.db)
            .await?;

        let id = result.last_insert_rowid();
        debug!("Created diary entry {}", id);

        Ok(DiaryEntry {
            id,
            title: request.title,
            body: request.body,
            date: request.date,
        })
    }

    pub async fn get_entry(&self, id: i64) -> Result<Option<DiaryEntry>> {
        let row = sqlx::query("SELECT id, title, body, date FROM diary_entries WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        row.map(row_to_entry).transpose()
    }

    /// All entries in insertion order
    pub async fn list_entries(&self) -> Result<Vec<DiaryEntry>> {
        let rows = sqlx::query("SELECT id, title, body, date FROM diary_entries ORDER BY id")
            .fetch_all(&self.db)
            .await?;

        rows.into_iter().map(row_to_entry).collect()
    }

    pub async fn delete_entry(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM diary_entries WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DiaryError::NotFound(format!("Diary entry not found: {}", id)));
        }

        debug!("Deleted diary entry {}", id);
        Ok(())
    }

    pub async fn count_entries(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM diary_entries")
            .fetch_one(&self.db)
            .await?;
        Ok(count)
    }
}

/// An in-memory database lives and dies with its connection, so that
/// connection is never reaped or recycled.
fn pool_options(database_url: &str) -> SqlitePoolOptions {
    if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    }
}

fn row_to_entry(row: SqliteRow) -> Result<DiaryEntry> {
    let date: Option<String> = row.try_get("date")?;
    let date = date
        .map(|s| {
            NaiveDate::parse_from_str(&s, DATE_FORMAT)
                .map_err(|e| DiaryError::Parse(format!("Invalid entry date '{}': {}", s, e)))
        })
        .transpose()?;

    Ok(DiaryEntry {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        body: row.try_get("body")?,
        date,
    })
}
