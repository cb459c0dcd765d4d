//! Game API routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use courtstat_domain::{EntityId, Game};
use serde::Serialize;

use crate::api::error::{entity_error, ApiError};
use crate::api::pagination::ListQuery;
use crate::app::App;

const ENTITY: &str = "game";

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/game", post(create_game))
        .route("/game/list", get(list_games))
        .route(
            "/game/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
}

#[derive(Debug, Serialize)]
struct CreateGameResponse {
    #[serde(rename = "gameID")]
    game_id: String,
}

async fn create_game(
    State(app): State<Arc<App>>,
    body: Result<Json<Game>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateGameResponse>), ApiError> {
    let Json(game) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let id = app
        .use_cases
        .games
        .create(&game)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateGameResponse {
            game_id: id.to_string(),
        }),
    ))
}

async fn get_game(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Game>, ApiError> {
    let id = parse_id(&id)?;

    let game = app
        .use_cases
        .games
        .get(&id)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(game))
}

async fn update_game(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<Game>, JsonRejection>,
) -> Result<Json<Game>, ApiError> {
    let id = parse_id(&id)?;
    let Json(game) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let updated = app
        .use_cases
        .games
        .update(&id, game)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(updated))
}

async fn delete_game(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    app.use_cases
        .games
        .delete(&id)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn list_games(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let games = app
        .use_cases
        .games
        .list(query.page(ENTITY))
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(games))
}

fn parse_id(raw: &str) -> Result<EntityId, ApiError> {
    EntityId::parse(raw).map_err(|_| ApiError::BadRequest(format!("invalid {ENTITY} id")))
}
