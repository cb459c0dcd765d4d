//! CRUD use case, one instantiation per entity kind.

use std::sync::Arc;

use courtstat_domain::{EntityId, Page};

use crate::infrastructure::ports::EntityRepo;
use crate::use_cases::ServiceError;

/// Forwards CRUD calls unchanged to the entity's repository.
///
/// The one decision made here is pagination validation: parsed but
/// non-positive page parameters are rejected rather than defaulted.
pub struct EntityCrud<E> {
    repo: Arc<dyn EntityRepo<E>>,
}

impl<E> EntityCrud<E>
where
    E: Send + Sync,
{
    pub fn new(repo: Arc<dyn EntityRepo<E>>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, entity: &E) -> Result<EntityId, ServiceError> {
        Ok(self.repo.create(entity).await?)
    }

    pub async fn get(&self, id: &EntityId) -> Result<E, ServiceError> {
        Ok(self.repo.get(id).await?)
    }

    pub async fn update(&self, id: &EntityId, entity: E) -> Result<E, ServiceError> {
        Ok(self.repo.update(id, entity).await?)
    }

    pub async fn delete(&self, id: &EntityId) -> Result<(), ServiceError> {
        Ok(self.repo.delete(id).await?)
    }

    pub async fn list(&self, page: Page) -> Result<Vec<E>, ServiceError> {
        if !page.is_valid_size() {
            return Err(ServiceError::InvalidPageSize);
        }
        if !page.is_valid_number() {
            return Err(ServiceError::InvalidPageNumber);
        }
        Ok(self.repo.list(page).await?)
    }
}
