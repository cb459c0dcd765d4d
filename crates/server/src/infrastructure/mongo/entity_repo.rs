//! Generic MongoDB collection repository.
//!
//! One instantiation per entity kind; each wraps a single collection. The
//! stored `_id` is excluded from every read projection so domain types stay
//! free of storage fields, and update/delete check matched counts instead of
//! decoding pre-images.

use async_trait::async_trait;
use courtstat_domain::{EntityId, Page};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::infrastructure::ports::{EntityRepo, RepoError};

pub struct MongoEntityRepo<E: Send + Sync> {
    collection: Collection<E>,
}

impl<E> MongoEntityRepo<E>
where
    E: Send + Sync,
{
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }

    fn id_filter(id: &EntityId) -> Result<Document, RepoError> {
        let object_id = ObjectId::parse_str(id.as_str()).map_err(|_| RepoError::InvalidId)?;
        Ok(doc! { "_id": object_id })
    }

    fn without_id() -> Document {
        doc! { "_id": 0 }
    }
}

#[async_trait]
impl<E> EntityRepo<E> for MongoEntityRepo<E>
where
    E: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    async fn create(&self, entity: &E) -> Result<EntityId, RepoError> {
        let result = self
            .collection
            .insert_one(entity)
            .await
            .map_err(|e| RepoError::database("insert", e))?;

        let object_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepoError::Database("insert: store returned no object id".into()))?;

        tracing::debug!(id = %object_id, "Created document");
        Ok(EntityId::from_store(object_id.to_hex()))
    }

    async fn get(&self, id: &EntityId) -> Result<E, RepoError> {
        let found = self
            .collection
            .find_one(Self::id_filter(id)?)
            .projection(Self::without_id())
            .await
            .map_err(|e| RepoError::database("find", e))?;

        found.ok_or(RepoError::NotFound)
    }

    async fn update(&self, id: &EntityId, entity: E) -> Result<E, RepoError> {
        let result = self
            .collection
            .replace_one(Self::id_filter(id)?, &entity)
            .await
            .map_err(|e| RepoError::database("replace", e))?;

        if result.matched_count == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(id = %id, "Replaced document");
        Ok(entity)
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepoError> {
        let result = self
            .collection
            .delete_one(Self::id_filter(id)?)
            .await
            .map_err(|e| RepoError::database("delete", e))?;

        if result.deleted_count == 0 {
            return Err(RepoError::NotFound);
        }

        tracing::debug!(id = %id, "Deleted document");
        Ok(())
    }

    async fn list(&self, page: Page) -> Result<Vec<E>, RepoError> {
        // Natural (insertion) order; callers rely on it for paging.
        let cursor = self
            .collection
            .find(doc! {})
            .projection(Self::without_id())
            .skip(page.offset().max(0) as u64)
            .limit(page.size)
            .await
            .map_err(|e| RepoError::database("find", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepoError::database("cursor", e))
    }
}
