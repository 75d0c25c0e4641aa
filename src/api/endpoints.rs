//! API endpoint handlers
//!
//! This module implements the HTTP surface: the page itself, its form
//! submission, a JSON recommendation endpoint and a health check.

use crate::api::page::render_page;
use crate::api::view::{RecommendationView, evaluate};
use crate::core::config::Config;
use crate::core::constants::prompt;
use crate::core::recommender::{MoodQuery, Recommender};
use axum::{
    Form, Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub recommender: Arc<Recommender>,
}

/// Body of a mood submission, from the page form or as JSON
#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    #[serde(default)]
    pub mood: String,
}

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit_form))
        .route("/v1/recommendations", post(create_recommendations))
        .route("/health", get(health_check))
        .with_state(state)
}

/// GET / - The empty page
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.config.has_api_key(), None))
}

/// POST / - Form submission from the page
async fn submit_form(
    State(state): State<AppState>,
    Form(request): Form<MoodRequest>,
) -> Html<String> {
    let view = evaluate(&state.recommender, MoodQuery::new(request.mood)).await;
    info!("📤 Page submission finished with status {:?}", view.status);
    Html(render_page(state.config.has_api_key(), Some(&view)))
}

/// POST /v1/recommendations - JSON recommendation endpoint
async fn create_recommendations(
    State(state): State<AppState>,
    Json(request): Json<MoodRequest>,
) -> Json<RecommendationView> {
    let view = evaluate(&state.recommender, MoodQuery::new(request.mood)).await;
    info!("📤 API request finished with status {:?}", view.status);
    Json(view)
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "provider": state.recommender.provider_name(),
        "api_key_configured": state.config.has_api_key(),
        "model": prompt::MODEL,
    }))
}
