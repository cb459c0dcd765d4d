//! Player API routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use courtstat_domain::{EntityId, Player};
use serde::Serialize;

use crate::api::error::{entity_error, ApiError};
use crate::api::pagination::ListQuery;
use crate::app::App;

const ENTITY: &str = "player";

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/player", post(create_player))
        .route("/player/list", get(list_players))
        .route(
            "/player/{id}",
            get(get_player).put(update_player).delete(delete_player),
        )
}

#[derive(Debug, Serialize)]
struct CreatePlayerResponse {
    #[serde(rename = "playerID")]
    player_id: String,
}

async fn create_player(
    State(app): State<Arc<App>>,
    body: Result<Json<Player>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatePlayerResponse>), ApiError> {
    let Json(player) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let id = app
        .use_cases
        .players
        .create(&player)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatePlayerResponse {
            player_id: id.to_string(),
        }),
    ))
}

async fn get_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_id(&id)?;

    let player = app
        .use_cases
        .players
        .get(&id)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(player))
}

async fn update_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<Player>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_id(&id)?;
    let Json(player) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let updated = app
        .use_cases
        .players
        .update(&id, player)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(updated))
}

async fn delete_player(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    app.use_cases
        .players
        .delete(&id)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn list_players(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = app
        .use_cases
        .players
        .list(query.page(ENTITY))
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(players))
}

fn parse_id(raw: &str) -> Result<EntityId, ApiError> {
    EntityId::parse(raw).map_err(|_| ApiError::BadRequest(format!("invalid {ENTITY} id")))
}
