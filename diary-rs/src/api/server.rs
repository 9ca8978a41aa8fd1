//! HTTP server: HTML pages and the JSON API

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::{self, AppState};
use crate::api::web;
use crate::config::Config;
use crate::diary::DiaryStore;
use crate::error::Result;

/// Diary web server
pub struct DiaryServer {
    state: Arc<AppState>,
    addr: String,
}

impl DiaryServer {
    pub fn new(store: DiaryStore, config: &Config) -> Self {
        let state = Arc::new(AppState {
            store,
            max_query_len: config.search.max_query_len,
        });

        Self {
            state,
            addr: config.server.listen_addr.clone(),
        }
    }

    /// Build the router with all routes
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let api_routes = Router::new()
            .route(
                "/entries",
                get(handlers::list_entries).post(handlers::create_entry),
            )
            .route(
                "/entries/:id",
                get(handlers::get_entry).delete(handlers::delete_entry),
            )
            .layer(cors);

        let web_routes = Router::new()
            .route("/", get(web::index))
            .route("/entries/:id", get(web::entry_page));

        Router::new()
            .route("/health", get(handlers::health))
            .nest("/api", api_routes)
            .merge(web_routes)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        info!("Server started http://{}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
