//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the server. Ports exist so the
//! use-case layer holds an interface per entity and per statistics kind,
//! never a concrete storage type:
//! - Entity CRUD (document store today)
//! - Player performance facts (column store today)
//! - Reward association facts (graph store today)

use async_trait::async_trait;
use courtstat_domain::{EntityId, Page, PlayerStat, RewardStat};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not found")]
    NotFound,
    #[error("invalid id")]
    InvalidId,
    #[error("database error: {0}")]
    Database(String),
}

impl RepoError {
    pub fn database(op: &str, e: impl std::fmt::Display) -> Self {
        Self::Database(format!("{op}: {e}"))
    }
}

// =============================================================================
// Entity CRUD port (one instantiation per entity kind)
// =============================================================================

/// CRUD contract shared by every entity kind.
///
/// `update` is a full document replace and returns the supplied entity, not
/// a post-write read. `list` pages 1-indexed in the store's natural
/// (insertion) order; an empty page is not an error.
#[async_trait]
pub trait EntityRepo<E>: Send + Sync {
    async fn create(&self, entity: &E) -> Result<EntityId, RepoError>;
    async fn get(&self, id: &EntityId) -> Result<E, RepoError>;
    async fn update(&self, id: &EntityId, entity: E) -> Result<E, RepoError>;
    async fn delete(&self, id: &EntityId) -> Result<(), RepoError>;
    async fn list(&self, page: Page) -> Result<Vec<E>, RepoError>;
}

// =============================================================================
// Statistics ports
// =============================================================================

/// Append-only per-player-per-match performance facts with aggregation
/// queries pushed into the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerStatRepo: Send + Sync {
    /// Append one row. Duplicate (player, match) pairs accumulate.
    async fn insert(&self, stat: &PlayerStat) -> Result<(), RepoError>;

    /// All rows matching both keys, unaggregated.
    async fn by_player_and_match(
        &self,
        player_id: &str,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError>;

    /// Players whose mean goals within the match strictly exceed the
    /// threshold; one synthetic record per player carrying the average.
    async fn avg_goals_above(
        &self,
        threshold: f64,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError>;

    /// Players whose summed per-column means strictly exceed the threshold.
    async fn total_avg_above(
        &self,
        threshold: f64,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError>;
}

/// Reward/player/match/tournament associations stored as a labeled graph.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RewardStatRepo: Send + Sync {
    /// Idempotently ensure the four nodes and three edges exist.
    async fn record(&self, stat: &RewardStat) -> Result<(), RepoError>;

    /// Tournament <- Match <- Reward -> Player, full tuples.
    async fn by_tournament(&self, tournament_id: &str) -> Result<Vec<RewardStat>, RepoError>;

    /// Match <- Reward -> Player tuples; tournament is left empty.
    async fn by_match(&self, match_id: &str) -> Result<Vec<RewardStat>, RepoError>;

    /// Player <- Reward -> Match -> Tournament, queried player filled in.
    async fn by_player(&self, player_id: &str) -> Result<Vec<RewardStat>, RepoError>;

    /// Reward -> Player plus Reward -> Match -> Tournament, queried reward
    /// filled in.
    async fn by_reward(&self, reward_id: &str) -> Result<Vec<RewardStat>, RepoError>;
}
