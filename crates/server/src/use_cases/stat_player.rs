//! Player performance statistics use case.

use std::sync::Arc;

use courtstat_domain::PlayerStat;

use crate::infrastructure::ports::PlayerStatRepo;
use crate::use_cases::ServiceError;

/// Forwards statistics calls unchanged to the column-store repository.
pub struct PlayerStatQueries {
    repo: Arc<dyn PlayerStatRepo>,
}

impl PlayerStatQueries {
    pub fn new(repo: Arc<dyn PlayerStatRepo>) -> Self {
        Self { repo }
    }

    pub async fn insert(&self, stat: &PlayerStat) -> Result<(), ServiceError> {
        Ok(self.repo.insert(stat).await?)
    }

    pub async fn by_player_and_match(
        &self,
        player_id: &str,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, ServiceError> {
        Ok(self.repo.by_player_and_match(player_id, match_id).await?)
    }

    pub async fn avg_goals_above(
        &self,
        threshold: f64,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, ServiceError> {
        Ok(self.repo.avg_goals_above(threshold, match_id).await?)
    }

    pub async fn total_avg_above(
        &self,
        threshold: f64,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, ServiceError> {
        Ok(self.repo.total_avg_above(threshold, match_id).await?)
    }
}
