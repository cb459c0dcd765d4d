//! Reward association statistics use case.

use std::sync::Arc;

use courtstat_domain::RewardStat;

use crate::infrastructure::ports::RewardStatRepo;
use crate::use_cases::ServiceError;

/// Forwards association calls unchanged to the graph-store repository.
pub struct AwardStatQueries {
    repo: Arc<dyn RewardStatRepo>,
}

impl AwardStatQueries {
    pub fn new(repo: Arc<dyn RewardStatRepo>) -> Self {
        Self { repo }
    }

    pub async fn record(&self, stat: &RewardStat) -> Result<(), ServiceError> {
        Ok(self.repo.record(stat).await?)
    }

    pub async fn by_tournament(&self, tournament_id: &str) -> Result<Vec<RewardStat>, ServiceError> {
        Ok(self.repo.by_tournament(tournament_id).await?)
    }

    pub async fn by_match(&self, match_id: &str) -> Result<Vec<RewardStat>, ServiceError> {
        Ok(self.repo.by_match(match_id).await?)
    }

    pub async fn by_player(&self, player_id: &str) -> Result<Vec<RewardStat>, ServiceError> {
        Ok(self.repo.by_player(player_id).await?)
    }

    pub async fn by_reward(&self, reward_id: &str) -> Result<Vec<RewardStat>, ServiceError> {
        Ok(self.repo.by_reward(reward_id).await?)
    }
}
