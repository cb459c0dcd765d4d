//! Column store (ClickHouse) adapters.

use clickhouse::Client;

mod stat_player_repo;

pub use stat_player_repo::ClickhousePlayerStatRepo;

/// Append-only fact table, sorted-merge keyed by (player, match).
const CREATE_PLAYER_STATS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS player_stats
    (
        player_id     String,
        match_id      String,
        goals         Int64,
        assists       Int64,
        interceptions Int64,
        rebounds      Int64
    )
    ENGINE = MergeTree()
    ORDER BY (player_id, match_id)
";

/// Build a client for the column store and ensure the fact table exists.
pub async fn connect(url: &str, database: &str) -> Result<Client, clickhouse::error::Error> {
    let client = Client::default().with_url(url).with_database(database);

    client.query(CREATE_PLAYER_STATS_TABLE).execute().await?;
    tracing::info!("ClickHouse player_stats table ensured");

    Ok(client)
}
