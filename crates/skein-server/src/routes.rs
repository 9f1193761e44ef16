//! Router and request handlers.
//!
//! ## Endpoints
//!
//! - `GET  /`: Welcome document
//! - `GET  /health`: Health check
//! - `POST /calculate/yarn`: Yarn estimate for a project (JSON)
//! - `GET  /users`, `POST /users`, `GET /users/{id}`
//! - `GET  /patterns?difficulty=&category=&skip=&limit=`, `GET /patterns/{id}`
//! - `POST /patterns` (multipart form or JSON)
//! - `GET  /posts?category=&skip=&limit=`, `GET /posts/{id}`
//! - `POST /posts?author_id=` (form, JSON, or query parameters)
//!
//! List endpoints also answer with a trailing slash.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use skein_catalog::{Catalog, NewUser, Page, Pattern, PatternFilter, Post, User};
use skein_estimate::YarnEstimator;
use skein_types::{EstimationInput, EstimationResult};

use crate::error::AppError;
use crate::forms::{PatternUpload, PostSubmission};

/// Shared state available to all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    estimator: YarnEstimator,
}

impl AppState {
    /// Creates state with an empty catalog.
    #[must_use]
    pub fn new(estimator: YarnEstimator) -> Self {
        Self::with_catalog(Arc::new(Catalog::new()), estimator)
    }

    /// Creates state around an existing catalog.
    #[must_use]
    pub const fn with_catalog(catalog: Arc<Catalog>, estimator: YarnEstimator) -> Self {
        Self { catalog, estimator }
    }

    /// Returns the catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the estimator.
    #[must_use]
    pub const fn estimator(&self) -> &YarnEstimator {
        &self.estimator
    }
}

/// Builds the application router.
///
/// `cors_origins` lists the browser origins allowed to call the API; entries
/// that are not valid header values are skipped with a warning.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/calculate/yarn", post(calculate_yarn))
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .route("/patterns", get(list_patterns).post(create_pattern))
        .route("/patterns/", get(list_patterns).post(create_pattern))
        .route("/patterns/{id}", get(get_pattern))
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/", get(list_posts).post(create_post))
        .route("/posts/{id}", get(get_post))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

// ============================================================================
// Query parameters
// ============================================================================

/// Empty filter values (as sent by "all" dropdown entries) mean no filter.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    skip: Option<usize>,
    limit: Option<usize>,
}

impl PageQuery {
    fn page(&self) -> Page {
        let default = Page::default();
        Page::new(
            self.skip.unwrap_or(default.skip),
            self.limit.unwrap_or(default.limit),
        )
    }
}

#[derive(Debug, Deserialize)]
struct PatternQuery {
    skip: Option<usize>,
    limit: Option<usize>,
    difficulty: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PostQuery {
    skip: Option<usize>,
    limit: Option<usize>,
    category: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "skein",
        "message": "Welcome to the skein API",
        "description": "Community platform for knitters: patterns, posts and a yarn calculator",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `POST /calculate/yarn`: Estimate the yarn needed for a project.
async fn calculate_yarn(
    State(state): State<AppState>,
    payload: Result<Json<EstimationInput>, JsonRejection>,
) -> Result<Json<EstimationResult>, AppError> {
    let Json(input) = payload?;
    let request = input.validate()?;
    let result = state.estimator.estimate(&request)?;
    debug!(
        pattern_type = %result.pattern_type,
        size = %result.size,
        yarn_weight = %result.yarn_weight,
        gauge = request.gauge().stitches_per_inch(),
        grams = result.estimated_grams,
        skeins = result.recommended_skeins,
        "estimated yarn"
    );
    Ok(Json(result))
}

async fn list_users(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>, AppError> {
    let Query(query) = query?;
    Ok(Json(state.catalog.list_users(query.page()).await))
}

async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let Json(new) = payload?;
    let user = state.catalog.create_user(new).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<User>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.catalog.get_user(id).await?))
}

async fn list_patterns(
    State(state): State<AppState>,
    query: Result<Query<PatternQuery>, QueryRejection>,
) -> Result<Json<Vec<Pattern>>, AppError> {
    let Query(query) = query?;
    let filter = PatternFilter {
        difficulty: non_empty(query.difficulty.as_deref())
            .map(str::parse)
            .transpose()?,
        category: non_empty(query.category.as_deref())
            .map(str::parse)
            .transpose()?,
    };
    let page = PageQuery {
        skip: query.skip,
        limit: query.limit,
    }
    .page();
    Ok(Json(state.catalog.list_patterns(filter, page).await))
}

async fn create_pattern(
    State(state): State<AppState>,
    PatternUpload(new): PatternUpload,
) -> Result<(StatusCode, Json<Pattern>), AppError> {
    let pattern = state.catalog.create_pattern(new).await?;
    Ok((StatusCode::CREATED, Json(pattern)))
}

async fn get_pattern(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Pattern>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.catalog.get_pattern(id).await?))
}

async fn list_posts(
    State(state): State<AppState>,
    query: Result<Query<PostQuery>, QueryRejection>,
) -> Result<Json<Vec<Post>>, AppError> {
    let Query(query) = query?;
    let category = non_empty(query.category.as_deref())
        .map(str::parse)
        .transpose()?;
    let page = PageQuery {
        skip: query.skip,
        limit: query.limit,
    }
    .page();
    Ok(Json(state.catalog.list_posts(category, page).await))
}

async fn create_post(
    State(state): State<AppState>,
    PostSubmission { author_id, post }: PostSubmission,
) -> Result<(StatusCode, Json<Post>), AppError> {
    let post = state.catalog.create_post(post, author_id).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn get_post(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Post>, AppError> {
    let Path(id) = id?;
    Ok(Json(state.catalog.get_post(id).await?))
}
