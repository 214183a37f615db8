use axum::{
    extract::{Json, Query, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::app::App;
use crate::data::CATEGORIES;
use crate::error::AppError;
use crate::models::{Card, NewCard, ReviewCard, ReviewOutcome, StudyStats};

#[derive(Clone)]
pub struct ApiState {
    pub app: Arc<App>,
}

pub fn app_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/hebrew/review-cards", get(get_review_cards))
        .route("/api/hebrew/new-cards", get(get_new_cards))
        .route("/api/hebrew/review", post(submit_review))
        .route("/api/hebrew/stats", get(get_stats))
        .route("/api/hebrew/cards", get(get_all_cards).post(create_card))
        .route("/api/hebrew/categories", get(get_categories))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct UserQuery {
    user: String,
    limit: Option<i64>,
}

async fn get_review_cards(
    State(state): State<ApiState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<ReviewCard>>, AppError> {
    let limit = query.limit.unwrap_or(20);
    let cards = state.app.list_due_cards(&query.user, limit).await?;
    Ok(Json(cards))
}

async fn get_new_cards(
    State(state): State<ApiState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Vec<ReviewCard>>, AppError> {
    let limit = query.limit.unwrap_or(5);
    let cards = state.app.list_new_cards(&query.user, limit).await?;
    Ok(Json(cards))
}

#[derive(Deserialize)]
struct ReviewRequest {
    user: String,
    card_id: String,
    quality: i64,
}

async fn submit_review(
    State(state): State<ApiState>,
    Json(payload): Json<ReviewRequest>,
) -> Result<Json<ReviewOutcome>, AppError> {
    let outcome = state
        .app
        .submit_review(&payload.user, &payload.card_id, payload.quality)
        .await?;
    Ok(Json(outcome))
}

#[derive(Deserialize)]
struct StatsQuery {
    user: String,
}

async fn get_stats(
    State(state): State<ApiState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StudyStats>, AppError> {
    let stats = state.app.get_stats(&query.user).await?;
    Ok(Json(stats))
}

#[derive(Deserialize)]
struct CardsQuery {
    category: Option<String>,
}

async fn get_all_cards(
    State(state): State<ApiState>,
    Query(query): Query<CardsQuery>,
) -> Result<Json<Vec<Card>>, AppError> {
    let cards = state.app.list_cards(query.category.as_deref()).await?;
    Ok(Json(cards))
}

async fn create_card(
    State(state): State<ApiState>,
    Json(payload): Json<NewCard>,
) -> Result<Json<Card>, AppError> {
    let card = state.app.create_card(payload).await?;
    Ok(Json(card))
}

#[derive(Serialize)]
struct CategoryInfo {
    id: &'static str,
    name: &'static str,
    description: &'static str,
}

async fn get_categories() -> Json<Vec<CategoryInfo>> {
    let categories = CATEGORIES
        .iter()
        .map(|c| CategoryInfo {
            id: c.id,
            name: c.name,
            description: c.description,
        })
        .collect();
    Json(categories)
}
