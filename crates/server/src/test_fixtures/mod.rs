//! In-memory repository fakes for router tests.
//!
//! These implement the port traits over plain collections so the full HTTP
//! stack can be exercised without storage engines. The aggregation fakes
//! compute grouped averages in one pass over the rows, mirroring the
//! semantics the column store evaluates server-side; the association fake
//! keeps a tuple set, which gives merge idempotence for free.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use courtstat_domain::{Award, EntityId, Game, League, Page, Player, PlayerStat, RewardStat};

use crate::api;
use crate::app::{App, Repositories};
use crate::infrastructure::ports::{
    EntityRepo, PlayerStatRepo, RepoError, RewardStatRepo,
};

// =============================================================================
// Entity fake
// =============================================================================

#[derive(Default)]
pub struct InMemoryEntityRepo<E> {
    docs: Mutex<Vec<(EntityId, E)>>,
    next_id: AtomicU64,
}

impl<E> InMemoryEntityRepo<E> {
    pub fn new() -> Self {
        Self {
            docs: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn generate_id(&self) -> EntityId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        EntityId::from_store(format!("{n:024x}"))
    }
}

#[async_trait]
impl<E> EntityRepo<E> for InMemoryEntityRepo<E>
where
    E: Clone + Send + Sync,
{
    async fn create(&self, entity: &E) -> Result<EntityId, RepoError> {
        let id = self.generate_id();
        self.docs
            .lock()
            .expect("lock")
            .push((id.clone(), entity.clone()));
        Ok(id)
    }

    async fn get(&self, id: &EntityId) -> Result<E, RepoError> {
        self.docs
            .lock()
            .expect("lock")
            .iter()
            .find(|(stored, _)| stored == id)
            .map(|(_, entity)| entity.clone())
            .ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: &EntityId, entity: E) -> Result<E, RepoError> {
        let mut docs = self.docs.lock().expect("lock");
        let slot = docs
            .iter_mut()
            .find(|(stored, _)| stored == id)
            .ok_or(RepoError::NotFound)?;
        slot.1 = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepoError> {
        let mut docs = self.docs.lock().expect("lock");
        let before = docs.len();
        docs.retain(|(stored, _)| stored != id);
        if docs.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn list(&self, page: Page) -> Result<Vec<E>, RepoError> {
        Ok(self
            .docs
            .lock()
            .expect("lock")
            .iter()
            .skip(page.offset().max(0) as usize)
            .take(page.size.max(0) as usize)
            .map(|(_, entity)| entity.clone())
            .collect())
    }
}

// =============================================================================
// Player stat fake
// =============================================================================

#[derive(Default)]
pub struct InMemoryPlayerStatRepo {
    rows: Mutex<Vec<PlayerStat>>,
}

struct GroupSums {
    goals: f64,
    assists: f64,
    interceptions: f64,
    rebounds: f64,
    count: f64,
}

impl InMemoryPlayerStatRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn group_by_player(&self, match_id: &str) -> BTreeMap<String, GroupSums> {
        let mut groups: BTreeMap<String, GroupSums> = BTreeMap::new();
        for row in self
            .rows
            .lock()
            .expect("lock")
            .iter()
            .filter(|row| row.match_id == match_id)
        {
            let group = groups.entry(row.player_id.clone()).or_insert(GroupSums {
                goals: 0.0,
                assists: 0.0,
                interceptions: 0.0,
                rebounds: 0.0,
                count: 0.0,
            });
            group.goals += row.goals as f64;
            group.assists += row.assists as f64;
            group.interceptions += row.interceptions as f64;
            group.rebounds += row.rebounds as f64;
            group.count += 1.0;
        }
        groups
    }
}

#[async_trait]
impl PlayerStatRepo for InMemoryPlayerStatRepo {
    async fn insert(&self, stat: &PlayerStat) -> Result<(), RepoError> {
        // Derived fields never land in the fact table.
        self.rows.lock().expect("lock").push(PlayerStat {
            avg_goals: None,
            total_avg_stats: None,
            ..stat.clone()
        });
        Ok(())
    }

    async fn by_player_and_match(
        &self,
        player_id: &str,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError> {
        Ok(self
            .rows
            .lock()
            .expect("lock")
            .iter()
            .filter(|row| row.player_id == player_id && row.match_id == match_id)
            .cloned()
            .collect())
    }

    async fn avg_goals_above(
        &self,
        threshold: f64,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError> {
        Ok(self
            .group_by_player(match_id)
            .into_iter()
            .filter_map(|(player_id, sums)| {
                let avg = sums.goals / sums.count;
                (avg > threshold).then(|| PlayerStat {
                    player_id,
                    avg_goals: Some(avg),
                    ..Default::default()
                })
            })
            .collect())
    }

    async fn total_avg_above(
        &self,
        threshold: f64,
        match_id: &str,
    ) -> Result<Vec<PlayerStat>, RepoError> {
        Ok(self
            .group_by_player(match_id)
            .into_iter()
            .filter_map(|(player_id, sums)| {
                let total = (sums.goals + sums.assists + sums.interceptions + sums.rebounds)
                    / sums.count;
                (total > threshold).then(|| PlayerStat {
                    player_id,
                    total_avg_stats: Some(total),
                    ..Default::default()
                })
            })
            .collect())
    }
}

// =============================================================================
// Reward stat fake
// =============================================================================

type RewardTuple = (String, String, String, String);

#[derive(Default)]
pub struct InMemoryRewardStatRepo {
    // (reward, player, match, tournament) tuples; a set makes re-recording
    // the same association a no-op, like merge-by-identifier in the graph.
    edges: Mutex<BTreeSet<RewardTuple>>,
}

impl InMemoryRewardStatRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn select(
        &self,
        keep: impl Fn(&RewardTuple) -> bool,
        shape: impl Fn(&RewardTuple) -> RewardStat,
    ) -> Vec<RewardStat> {
        self.edges
            .lock()
            .expect("lock")
            .iter()
            .filter(|tuple| keep(tuple))
            .map(|tuple| shape(tuple))
            .collect()
    }
}

#[async_trait]
impl RewardStatRepo for InMemoryRewardStatRepo {
    async fn record(&self, stat: &RewardStat) -> Result<(), RepoError> {
        self.edges.lock().expect("lock").insert((
            stat.reward_id.clone(),
            stat.player_id.clone(),
            stat.match_id.clone(),
            stat.tournament_id.clone(),
        ));
        Ok(())
    }

    async fn by_tournament(&self, tournament_id: &str) -> Result<Vec<RewardStat>, RepoError> {
        Ok(self.select(
            |(_, _, _, tournament)| tournament == tournament_id,
            |(reward, player, match_id, tournament)| RewardStat {
                reward_id: reward.clone(),
                player_id: player.clone(),
                match_id: match_id.clone(),
                tournament_id: tournament.clone(),
            },
        ))
    }

    async fn by_match(&self, match_id: &str) -> Result<Vec<RewardStat>, RepoError> {
        Ok(self.select(
            |(_, _, m, _)| m == match_id,
            |(reward, player, m, _)| RewardStat {
                reward_id: reward.clone(),
                player_id: player.clone(),
                match_id: m.clone(),
                ..Default::default()
            },
        ))
    }

    async fn by_player(&self, player_id: &str) -> Result<Vec<RewardStat>, RepoError> {
        Ok(self.select(
            |(_, player, _, _)| player == player_id,
            |(reward, player, match_id, tournament)| RewardStat {
                reward_id: reward.clone(),
                player_id: player.clone(),
                match_id: match_id.clone(),
                tournament_id: tournament.clone(),
            },
        ))
    }

    async fn by_reward(&self, reward_id: &str) -> Result<Vec<RewardStat>, RepoError> {
        Ok(self.select(
            |(reward, _, _, _)| reward == reward_id,
            |(reward, player, match_id, tournament)| RewardStat {
                reward_id: reward.clone(),
                player_id: player.clone(),
                match_id: match_id.clone(),
                tournament_id: tournament.clone(),
            },
        ))
    }
}

// =============================================================================
// App wiring
// =============================================================================

/// Build an App over in-memory repositories.
pub fn test_app() -> Arc<App> {
    Arc::new(App::new(Repositories {
        players: Arc::new(InMemoryEntityRepo::<Player>::new()),
        awards: Arc::new(InMemoryEntityRepo::<Award>::new()),
        games: Arc::new(InMemoryEntityRepo::<Game>::new()),
        leagues: Arc::new(InMemoryEntityRepo::<League>::new()),
        player_stats: Arc::new(InMemoryPlayerStatRepo::new()),
        award_stats: Arc::new(InMemoryRewardStatRepo::new()),
    }))
}

/// Build the full router over in-memory repositories.
pub fn test_router() -> Router {
    api::http::routes().with_state(test_app())
}
