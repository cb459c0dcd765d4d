//! Pass-through use cases.
//!
//! One service per entity/statistics kind, holding only the port trait. No
//! business rules live here beyond pagination validation; the layer exists
//! to decouple the HTTP surface from storage technology.

mod entity_crud;
mod stat_awards;
mod stat_player;

pub use entity_crud::EntityCrud;
pub use stat_awards::AwardStatQueries;
pub use stat_player::PlayerStatQueries;

use courtstat_domain::{Award, Game, League, Player};

use crate::infrastructure::ports::RepoError;

/// Shared error type for the use-case layer.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("invalid page size")]
    InvalidPageSize,
    #[error("invalid page number")]
    InvalidPageNumber,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Container for all use cases.
pub struct UseCases {
    pub players: EntityCrud<Player>,
    pub awards: EntityCrud<Award>,
    pub games: EntityCrud<Game>,
    pub leagues: EntityCrud<League>,
    pub player_stats: PlayerStatQueries,
    pub award_stats: AwardStatQueries,
}
