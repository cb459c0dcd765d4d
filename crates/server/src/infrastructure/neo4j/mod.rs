//! Graph store (Neo4j) adapters.

use neo4rs::{query, Graph};

mod stat_awards_repo;

pub use stat_awards_repo::Neo4jRewardStatRepo;

/// Connect to the graph store.
pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Graph, neo4rs::Error> {
    let graph = Graph::new(uri, user, password).await?;
    tracing::info!("Connected to Neo4j at {uri}");
    Ok(graph)
}

/// Initialize graph schema with required constraints.
///
/// Called once on startup. Uniqueness on each label's `id` backs the
/// merge-by-identifier idempotence of `record`. Constraints are created with
/// IF NOT EXISTS to be idempotent.
pub async fn ensure_schema(graph: &Graph) -> Result<(), neo4rs::Error> {
    for (name, label) in [
        ("reward_id_unique", "Reward"),
        ("player_id_unique", "Player"),
        ("match_id_unique", "Match"),
        ("tournament_id_unique", "Tournament"),
    ] {
        graph
            .run(query(&format!(
                "CREATE CONSTRAINT {name} IF NOT EXISTS
                 FOR (n:{label}) REQUIRE n.id IS UNIQUE"
            )))
            .await?;
    }

    tracing::info!("Neo4j schema initialized (constraints ensured)");
    Ok(())
}
