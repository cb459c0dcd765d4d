//! Award API routes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use courtstat_domain::{Award, EntityId};
use serde::Serialize;

use crate::api::error::{entity_error, ApiError};
use crate::api::pagination::ListQuery;
use crate::app::App;

const ENTITY: &str = "award";

pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/award", post(create_award))
        .route("/award/list", get(list_awards))
        .route(
            "/award/{id}",
            get(get_award).put(update_award).delete(delete_award),
        )
}

#[derive(Debug, Serialize)]
struct CreateAwardResponse {
    #[serde(rename = "awardID")]
    award_id: String,
}

async fn create_award(
    State(app): State<Arc<App>>,
    body: Result<Json<Award>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAwardResponse>), ApiError> {
    let Json(award) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let id = app
        .use_cases
        .awards
        .create(&award)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAwardResponse {
            award_id: id.to_string(),
        }),
    ))
}

async fn get_award(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Award>, ApiError> {
    let id = parse_id(&id)?;

    let award = app
        .use_cases
        .awards
        .get(&id)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(award))
}

async fn update_award(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    body: Result<Json<Award>, JsonRejection>,
) -> Result<Json<Award>, ApiError> {
    let id = parse_id(&id)?;
    let Json(award) = body.map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let updated = app
        .use_cases
        .awards
        .update(&id, award)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(updated))
}

async fn delete_award(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    app.use_cases
        .awards
        .delete(&id)
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(StatusCode::NO_CONTENT)
}

async fn list_awards(
    State(app): State<Arc<App>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Award>>, ApiError> {
    let awards = app
        .use_cases
        .awards
        .list(query.page(ENTITY))
        .await
        .map_err(|e| entity_error(ENTITY, e))?;

    Ok(Json(awards))
}

fn parse_id(raw: &str) -> Result<EntityId, ApiError> {
    EntityId::parse(raw).map_err(|_| ApiError::BadRequest(format!("invalid {ENTITY} id")))
}
