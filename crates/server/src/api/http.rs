//! HTTP routes.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::app::App;

use super::{
    award_routes, game_routes, league_routes, player_routes, stat_awards_routes,
    stat_player_routes,
};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .nest("/v1", v1_routes())
}

fn v1_routes() -> Router<Arc<App>> {
    Router::new()
        .merge(player_routes::routes())
        .merge(award_routes::routes())
        .merge(game_routes::routes())
        .merge(league_routes::routes())
        .merge(stat_player_routes::routes())
        .merge(stat_awards_routes::routes())
}

async fn health() -> &'static str {
    "OK"
}
