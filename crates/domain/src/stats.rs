//! Append-only statistics facts.
//!
//! Facts reference entity identifiers by value only; nothing checks that the
//! referenced player or match exists. Facts are inserted and queried, never
//! updated or deleted.

use serde::{Deserialize, Serialize};

/// One per-player-per-match performance row in the column store.
///
/// `avg_goals` and `total_avg_stats` are derived values populated only in
/// aggregation query responses, never on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStat {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub goals: i64,
    #[serde(default)]
    pub assists: i64,
    #[serde(default)]
    pub interceptions: i64,
    #[serde(default)]
    pub rebounds: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_goals: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_avg_stats: Option<f64>,
}

/// A "player received reward for performance in match, which is part of
/// tournament" association, stored as a node/edge set in the graph store.
///
/// Traversal queries leave the fields outside the traversed pattern empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardStat {
    #[serde(default)]
    pub player_id: String,
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub reward_id: String,
    #[serde(default)]
    pub tournament_id: String,
}
