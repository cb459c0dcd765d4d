//! Application state and composition.

use std::sync::Arc;

use courtstat_domain::{Award, Game, League, Player};

use crate::infrastructure::ports::{EntityRepo, PlayerStatRepo, RewardStatRepo};
use crate::use_cases::{AwardStatQueries, EntityCrud, PlayerStatQueries, UseCases};

/// Container for all repository ports, injected as trait objects so the
/// rest of the application never sees a concrete storage type.
pub struct Repositories {
    pub players: Arc<dyn EntityRepo<Player>>,
    pub awards: Arc<dyn EntityRepo<Award>>,
    pub games: Arc<dyn EntityRepo<Game>>,
    pub leagues: Arc<dyn EntityRepo<League>>,
    pub player_stats: Arc<dyn PlayerStatRepo>,
    pub award_stats: Arc<dyn RewardStatRepo>,
}

/// Main application state, passed to HTTP handlers via axum state.
pub struct App {
    pub use_cases: UseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: Repositories) -> Self {
        Self {
            use_cases: UseCases {
                players: EntityCrud::new(repos.players),
                awards: EntityCrud::new(repos.awards),
                games: EntityCrud::new(repos.games),
                leagues: EntityCrud::new(repos.leagues),
                player_stats: PlayerStatQueries::new(repos.player_stats),
                award_stats: AwardStatQueries::new(repos.award_stats),
            },
        }
    }
}
