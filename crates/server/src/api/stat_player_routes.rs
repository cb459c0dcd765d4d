//! Player performance statistics routes (column store).

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use courtstat_domain::PlayerStat;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::app::App;

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/stat_player", post(insert_stat))
        .route("/stat_player/goals/{mid}", get(players_above_avg_goals))
        .route("/stat_player/all_points/{mid}", get(players_above_total_avg))
        .route("/stat_player/{pid}/{mid}", get(stats_by_player_and_match))
}

async fn insert_stat(
    State(app): State<Arc<App>>,
    body: Result<Json<PlayerStat>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(stat) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    app.use_cases.player_stats.insert(&stat).await?;

    Ok(StatusCode::CREATED)
}

async fn stats_by_player_and_match(
    State(app): State<Arc<App>>,
    Path((player_id, match_id)): Path<(String, String)>,
) -> Result<Json<Vec<PlayerStat>>, ApiError> {
    let stats = app
        .use_cases
        .player_stats
        .by_player_and_match(&player_id, &match_id)
        .await?;

    Ok(Json(stats))
}

#[derive(Debug, Deserialize)]
struct GoalsQuery {
    goals: Option<String>,
}

async fn players_above_avg_goals(
    State(app): State<Arc<App>>,
    Path(match_id): Path<String>,
    Query(query): Query<GoalsQuery>,
) -> Result<Json<Vec<PlayerStat>>, ApiError> {
    let threshold = parse_threshold(query.goals.as_deref(), "goals")?;

    let stats = app
        .use_cases
        .player_stats
        .avg_goals_above(threshold, &match_id)
        .await?;

    Ok(Json(stats))
}

#[derive(Debug, Deserialize)]
struct PointsQuery {
    points: Option<String>,
}

async fn players_above_total_avg(
    State(app): State<Arc<App>>,
    Path(match_id): Path<String>,
    Query(query): Query<PointsQuery>,
) -> Result<Json<Vec<PlayerStat>>, ApiError> {
    let threshold = parse_threshold(query.points.as_deref(), "points")?;

    let stats = app
        .use_cases
        .player_stats
        .total_avg_above(threshold, &match_id)
        .await?;

    Ok(Json(stats))
}

fn parse_threshold(raw: Option<&str>, name: &str) -> Result<f64, ApiError> {
    raw.unwrap_or_default()
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("invalid {name} threshold")))
}
