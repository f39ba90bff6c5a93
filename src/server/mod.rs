//! HTTP API for the blog list.
//!
//! Routes:
//!   GET    /api/blogs          list all blogs
//!   POST   /api/blogs          create a blog
//!   GET    /api/blogs/stats    aggregate statistics
//!   GET    /api/blogs/{id}     fetch one blog
//!   PUT    /api/blogs/{id}     replace a blog
//!   DELETE /api/blogs/{id}     delete a blog

pub mod error;
pub mod handlers;

use crate::config::ServerConfig;
use crate::store::BlogRepository;
use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const BLOGS_PATH: &str = "/api/blogs";
pub const BLOG_PATH: &str = "/api/blogs/{id}";
pub const STATS_PATH: &str = "/api/blogs/stats";

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlogRepository>) -> Self {
        Self { store }
    }
}

/// Build the application router.
pub fn make_router(state: AppState, cors: bool) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            BLOGS_PATH,
            get(handlers::list_blogs).post(handlers::create_blog),
        )
        .route(STATS_PATH, get(handlers::blog_stats))
        .route(
            BLOG_PATH,
            get(handlers::get_blog)
                .put(handlers::update_blog)
                .delete(handlers::delete_blog),
        )
        .fallback(handlers::unknown_endpoint)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Bind the listener and serve until Ctrl-C.
pub async fn run_server(config: &ServerConfig, store: Arc<dyn BlogRepository>) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server listening on http://{}", addr);
    info!("Blogs endpoint: http://{}{}", addr, BLOGS_PATH);

    let app = make_router(AppState::new(store), config.cors);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
