//! Document store (MongoDB) adapters.

use std::sync::Arc;

use courtstat_domain::{Award, Game, League, Player};
use mongodb::bson::doc;
use mongodb::{Client, Database};

mod entity_repo;

pub use entity_repo::MongoEntityRepo;

/// Collection names, one document collection per entity kind.
const PLAYER_COLLECTION: &str = "player";
const AWARD_COLLECTION: &str = "award";
const GAME_COLLECTION: &str = "game";
const LEAGUE_COLLECTION: &str = "league";

/// Connect to the document store and verify the connection.
pub async fn connect(url: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(url).await?;
    let db = client.database(db_name);
    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to MongoDB database {db_name}");
    Ok(db)
}

/// All document-store repositories created from one database handle.
pub struct MongoRepositories {
    pub player: Arc<MongoEntityRepo<Player>>,
    pub award: Arc<MongoEntityRepo<Award>>,
    pub game: Arc<MongoEntityRepo<Game>>,
    pub league: Arc<MongoEntityRepo<League>>,
}

impl MongoRepositories {
    pub fn new(db: &Database) -> Self {
        Self {
            player: Arc::new(MongoEntityRepo::new(db, PLAYER_COLLECTION)),
            award: Arc::new(MongoEntityRepo::new(db, AWARD_COLLECTION)),
            game: Arc::new(MongoEntityRepo::new(db, GAME_COLLECTION)),
            league: Arc::new(MongoEntityRepo::new(db, LEAGUE_COLLECTION)),
        }
    }
}
