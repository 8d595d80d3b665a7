/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router from the named-route table in `routes`.
///
/// # Example
///
/// ```no_run
/// use quotient_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = quotient_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```
use crate::config::Config;
use crate::routes::{self, FORM_EXAMPLE_GET, FORM_EXAMPLE_POST, HEALTH};
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /health         # Health check ("health")
/// ├── GET  /users/form     # Form page ("form_example_get")
/// └── POST /users/form     # Form submission ("form_example_post")
/// ```
///
/// Paths come from the `NamedRoute` constants in `routes`, which is what
/// keeps `path_for` reversal in sync with what is actually served.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH.path, get(routes::health::health_check))
        .route(FORM_EXAMPLE_GET.path, get(routes::users::form_example_get))
        .route(FORM_EXAMPLE_POST.path, post(routes::users::form_example_post))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
