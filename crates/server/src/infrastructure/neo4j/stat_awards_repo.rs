//! Neo4j reward-association repository.
//!
//! Associations are stored as four node kinds connected by three directed
//! relationships:
//! - `(Reward)-[:AWARDED_TO]->(Player)`
//! - `(Reward)-[:AWARDED_FOR_MATCH]->(Match)`
//! - `(Match)-[:PART_OF_TOURNAMENT]->(Tournament)`
//!
//! Writes merge by natural identifier, so re-recording the same association
//! is a no-op. Reads are pattern matches that never mutate graph state.

use async_trait::async_trait;
use courtstat_domain::RewardStat;
use neo4rs::{query, Graph, Row};

use crate::infrastructure::ports::{RepoError, RewardStatRepo};

pub struct Neo4jRewardStatRepo {
    graph: Graph,
}

impl Neo4jRewardStatRepo {
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }

    async fn collect_rows(
        &self,
        q: neo4rs::Query,
        map_row: impl Fn(&Row) -> Result<RewardStat, neo4rs::DeError>,
    ) -> Result<Vec<RewardStat>, RepoError> {
        let mut result = self
            .graph
            .execute(q)
            .await
            .map_err(|e| RepoError::database("query", e))?;

        let mut stats = Vec::new();
        while let Some(row) = result
            .next()
            .await
            .map_err(|e| RepoError::database("query", e))?
        {
            stats.push(map_row(&row).map_err(|e| RepoError::database("query", e))?);
        }

        Ok(stats)
    }
}

#[async_trait]
impl RewardStatRepo for Neo4jRewardStatRepo {
    async fn record(&self, stat: &RewardStat) -> Result<(), RepoError> {
        let q = query(
            "MERGE (r:Reward {id: $reward_id})
             MERGE (p:Player {id: $player_id})
             MERGE (m:Match {id: $match_id})
             MERGE (t:Tournament {id: $tournament_id})
             MERGE (r)-[:AWARDED_TO]->(p)
             MERGE (r)-[:AWARDED_FOR_MATCH]->(m)
             MERGE (m)-[:PART_OF_TOURNAMENT]->(t)",
        )
        .param("reward_id", stat.reward_id.clone())
        .param("player_id", stat.player_id.clone())
        .param("match_id", stat.match_id.clone())
        .param("tournament_id", stat.tournament_id.clone());

        self.graph
            .run(q)
            .await
            .map_err(|e| RepoError::database("merge", e))?;

        tracing::debug!(
            reward_id = %stat.reward_id,
            player_id = %stat.player_id,
            "Recorded reward association"
        );
        Ok(())
    }

    async fn by_tournament(&self, tournament_id: &str) -> Result<Vec<RewardStat>, RepoError> {
        let q = query(
            "MATCH (t:Tournament {id: $tournament_id})<-[:PART_OF_TOURNAMENT]-(m:Match)
                   <-[:AWARDED_FOR_MATCH]-(r:Reward)-[:AWARDED_TO]->(p:Player)
             RETURN p.id AS player_id, r.id AS reward_id, m.id AS match_id, t.id AS tournament_id",
        )
        .param("tournament_id", tournament_id);

        self.collect_rows(q, |row| {
            Ok(RewardStat {
                player_id: row.get("player_id")?,
                reward_id: row.get("reward_id")?,
                match_id: row.get("match_id")?,
                tournament_id: row.get("tournament_id")?,
            })
        })
        .await
    }

    async fn by_match(&self, match_id: &str) -> Result<Vec<RewardStat>, RepoError> {
        let q = query(
            "MATCH (m:Match {id: $match_id})<-[:AWARDED_FOR_MATCH]-(r:Reward)-[:AWARDED_TO]->(p:Player)
             RETURN p.id AS player_id, r.id AS reward_id, m.id AS match_id",
        )
        .param("match_id", match_id);

        self.collect_rows(q, |row| {
            Ok(RewardStat {
                player_id: row.get("player_id")?,
                reward_id: row.get("reward_id")?,
                match_id: row.get("match_id")?,
                ..Default::default()
            })
        })
        .await
    }

    async fn by_player(&self, player_id: &str) -> Result<Vec<RewardStat>, RepoError> {
        let q = query(
            "MATCH (p:Player {id: $player_id})<-[:AWARDED_TO]-(r:Reward)
                   -[:AWARDED_FOR_MATCH]->(m:Match)-[:PART_OF_TOURNAMENT]->(t:Tournament)
             RETURN r.id AS reward_id, m.id AS match_id, t.id AS tournament_id",
        )
        .param("player_id", player_id);

        let player_id = player_id.to_string();
        self.collect_rows(q, move |row| {
            Ok(RewardStat {
                player_id: player_id.clone(),
                reward_id: row.get("reward_id")?,
                match_id: row.get("match_id")?,
                tournament_id: row.get("tournament_id")?,
            })
        })
        .await
    }

    async fn by_reward(&self, reward_id: &str) -> Result<Vec<RewardStat>, RepoError> {
        let q = query(
            "MATCH (r:Reward {id: $reward_id})-[:AWARDED_TO]->(p:Player),
                   (r)-[:AWARDED_FOR_MATCH]->(m:Match)-[:PART_OF_TOURNAMENT]->(t:Tournament)
             RETURN p.id AS player_id, m.id AS match_id, t.id AS tournament_id",
        )
        .param("reward_id", reward_id);

        let reward_id = reward_id.to_string();
        self.collect_rows(q, move |row| {
            Ok(RewardStat {
                player_id: row.get("player_id")?,
                reward_id: reward_id.clone(),
                match_id: row.get("match_id")?,
                tournament_id: row.get("tournament_id")?,
            })
        })
        .await
    }
}
