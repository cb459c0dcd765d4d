//! League API routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use courtstat_domain::{EntityId, League};
use serde::Serialize;

use crate::api::error::{entity_error, ApiError};
use crate::api::pagination::ListQuery;
use crate::app::App;

const ENTITY: &str = "league";

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/league", post(create_league))
        .route("/league/list", get(list_leagues))
        .route(
            "/league/{id}",
            get(get_league).put(update_league).delete(delete_league),
        )
}

#[derive(Debug, Serialize)]
struct CreateLeagueResponse {
    #[serde(rename = "leagueID")]
    league_id: String,
}

async fn create_league(
    State(app): State<Arc<App>>,
    body: Result<Json<League>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLeagueResponse>), ApiError> {
    let Json(league) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let id = app
        .use_cases
        .leagues
        .create(&league)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateLeagueResponse {
            league_id: id.to_string(),
        }),
    ))
}

async fn get_league(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<League>, ApiError> {
    let id = parse_id(&id)?;

    let league = app
        .use_cases
        .leagues
        .get(&id)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(league))
}

async fn update_league(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<League>, JsonRejection>,
) -> Result<Json<League>, ApiError> {
    let id = parse_id(&id)?;
    let Json(league) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let updated = app
        .use_cases
        .leagues
        .update(&id, league)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(updated))
}

async fn delete_league(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    app.use_cases
        .leagues
        .delete(&id)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn list_leagues(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<League>>, ApiError> {
    let leagues = app
        .use_cases
        .leagues
        .list(query.page(ENTITY))
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(leagues))
}

fn parse_id(raw: &str) -> Result<EntityId, ApiError> {
    EntityId::parse(raw).map_err(|_| ApiError::BadRequest(format!("invalid {ENTITY} id")))
}
