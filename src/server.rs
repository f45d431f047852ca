//! Request orchestration: query extraction, validation, the fetch/classify/
//! render sequence, and response emission.

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::fetch::Fetcher;
use crate::models::CommitRecord;
use crate::platform;
use crate::render;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Fetcher,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(visualize))
        .route("/health", get(health))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct VisualizeParams {
    pub repo: Option<String>,
    pub limit: Option<String>,
    pub dark_mode: Option<String>,
    pub branch: Option<String>,
}

/// Per-request configuration, built once from query parameters and headers.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub repo_url: Option<String>,
    pub limit: u8,
    pub dark_mode: bool,
    pub branch: String,
}

impl RequestConfig {
    pub fn from_request(params: &VisualizeParams, headers: &HeaderMap) -> Self {
        // limit is clamped, never rejected: absent means 10, garbage casts
        // to 0 and clamps to the floor
        let limit = match &params.limit {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or(0).clamp(1, 50) as u8,
            None => 10,
        };

        let dark_mode = match &params.dark_mode {
            Some(raw) => parse_bool(raw),
            None => headers
                .get("sec-ch-prefers-color-scheme")
                .and_then(|value| value.to_str().ok())
                .map(|value| value.eq_ignore_ascii_case("dark"))
                .unwrap_or(false),
        };

        Self {
            repo_url: params.repo.clone(),
            limit,
            dark_mode,
            branch: params
                .branch
                .clone()
                .unwrap_or_else(|| "main".to_string()),
        }
    }
}

fn parse_bool(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

async fn visualize(
    State(state): State<AppState>,
    Query(params): Query<VisualizeParams>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let config = RequestConfig::from_request(&params, &headers);
    tracing::info!("Visualize request: {:?}", config);

    let repo_url = config
        .repo_url
        .as_deref()
        .ok_or_else(|| AppError::validation("Repository URL is required"))?;

    let target = platform::resolve(repo_url)?;
    let raw_commits = state
        .fetcher
        .fetch(&target, &config.branch, config.limit)
        .await?;
    let commits: Vec<CommitRecord> = raw_commits
        .into_iter()
        .map(CommitRecord::from_raw)
        .collect();
    let svg = render::render(&commits, config.dark_mode);

    tracing::info!(
        "Successfully generated SVG for {} ({} commits)",
        repo_url,
        commits.len()
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=300"),
        ],
        svg,
    )
        .into_response())
}
