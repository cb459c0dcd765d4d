//! Reward association statistics routes (graph store).

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use courtstat_domain::RewardStat;

use crate::api::error::ApiError;
use crate::app::App;

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/stat_awards", post(record_award))
        .route("/stat_awards/tournament/{id}", get(awards_by_tournament))
        .route("/stat_awards/match/{id}", get(awards_by_match))
        .route("/stat_awards/player/{id}", get(awards_by_player))
        .route("/stat_awards/reward/{id}", get(awards_by_reward))
}

async fn record_award(
    State(app): State<Arc<App>>,
    body: Result<Json<RewardStat>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(stat) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    app.use_cases.award_stats.record(&stat).await?;

    Ok(StatusCode::CREATED)
}

async fn awards_by_tournament(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RewardStat>>, ApiError> {
    Ok(Json(app.use_cases.award_stats.by_tournament(&id).await?))
}

async fn awards_by_match(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RewardStat>>, ApiError> {
    Ok(Json(app.use_cases.award_stats.by_match(&id).await?))
}

async fn awards_by_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RewardStat>>, ApiError> {
    Ok(Json(app.use_cases.award_stats.by_player(&id).await?))
}

async fn awards_by_reward(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RewardStat>>, ApiError> {
    Ok(Json(app.use_cases.award_stats.by_reward(&id).await?))
}
