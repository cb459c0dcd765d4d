//! HTTP entry points.

pub mod error;
pub mod http;
pub mod pagination;

mod award_routes;
mod game_routes;
mod league_routes;
mod player_routes;
mod stat_awards_routes;
mod stat_player_routes;
