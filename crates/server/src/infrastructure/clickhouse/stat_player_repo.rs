//! ClickHouse player-stat repository.
//!
//! Aggregation is pushed into the storage query: each threshold endpoint is
//! one grouped scan over the match's rows, never a client-side fold over the
//! fact table.

use async_trait::async_trait;
use clickhouse::{Client, Row};
use courtstat_domain::PlayerStat;
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::{PlayerStatRepo, RepoError};

const PLAYER_STATS_TABLE: &str = "player_stats";

/// Physical row shape of the fact table.
#[derive(Debug, Row, Serialize, Deserialize)]
struct PlayerStatRow {
    player_id: String,
    match_id: String,
    goals: i64,
    assists: i64,
    interceptions: i64,
    rebounds: i64,
}

#[derive(Debug, Row, Deserialize)]
struct AvgGoalsRow {
    player_id: String,
    avg_goals: f64,
}

#[derive(Debug, Row, Deserialize)]
struct TotalAvgRow {
    player_id: String,
    total_avg_stats: f64,
}

pub struct ClickhousePlayerStatRepo {
    client: Client,
}

impl ClickhousePlayerStatRepo {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlayerStatRepo for ClickhousePlayerStatRepo {
    async fn insert(&self, stat: &PlayerStat) -> Result<(), RepoError> {
        let row = PlayerStatRow {
            player_id: stat.player_id.clone(),
            match_id: stat.match_id.clone(),
            goals: stat.goals,
            assists: stat.assists,
            interceptions: stat.interceptions,
            rebounds: stat.rebounds,
        };

        let mut insert = self
            .client
            .insert::<PlayerStatRow>(PLAYER_STATS_TABLE)
            .map_err(|e| RepoError::database("insert", e))?;
        insert
            .write(&row)
            .await
            .map_err(|e| RepoError::database("insert", e))?;
        insert
            .end()
            .await
            .map_err(|e| RepoError::database("insert", e))?;

        tracing::debug!(player_id = %stat.player_id, match_id = %stat.match_id, "Inserted player stat row");
        Ok(())
    }

    async fn by_player_and_match(
        &self,
        player_id: &str,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError> {
        let rows = self
            .client
            .query(
                "SELECT ?fields FROM player_stats
                 WHERE player_id = ? AND match_id = ?",
            )
            .bind(player_id)
            .bind(match_id)
            .fetch_all::<PlayerStatRow>()
            .await
            .map_err(|e| RepoError::database("query", e))?;

        Ok(rows
            .into_iter()
            .map(|row| PlayerStat {
                player_id: row.player_id,
                match_id: row.match_id,
                goals: row.goals,
                assists: row.assists,
                interceptions: row.interceptions,
                rebounds: row.rebounds,
                ..Default::default()
            })
            .collect())
    }

    async fn avg_goals_above(
        &self,
        threshold: f64,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError> {
        let rows = self
            .client
            .query(
                "SELECT player_id, avg(goals) AS avg_goals
                 FROM player_stats
                 WHERE match_id = ?
                 GROUP BY player_id
                 HAVING avg_goals > ?",
            )
            .bind(match_id)
            .bind(threshold)
            .fetch_all::<AvgGoalsRow>()
            .await
            .map_err(|e| RepoError::database("query", e))?;

        Ok(rows
            .into_iter()
            .map(|row| PlayerStat {
                player_id: row.player_id,
                avg_goals: Some(row.avg_goals),
                ..Default::default()
            })
            .collect())
    }

    async fn total_avg_above(
        &self,
        threshold: f64,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError> {
        let rows = self
            .client
            .query(
                "SELECT player_id,
                        avg(goals) + avg(assists) + avg(interceptions) + avg(rebounds) AS total_avg_stats
                 FROM player_stats
                 WHERE match_id = ?
                 GROUP BY player_id
                 HAVING total_avg_stats > ?",
            )
            .bind(match_id)
            .bind(threshold)
            .fetch_all::<TotalAvgRow>()
            .await
            .map_err(|e| RepoError::database("query", e))?;

        Ok(rows
            .into_iter()
            .map(|row| PlayerStat {
                player_id: row.player_id,
                total_avg_stats: Some(row.total_avg_stats),
                ..Default::default()
            })
            .collect())
    }
}
