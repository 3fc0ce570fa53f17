use async_trait::async_trait;
use uuid::Uuid;

use models::category;

use crate::errors::ServiceError;

/// In-place change applied to a loaded category before it is written back.
/// Returning an error aborts the write.
pub type CategoryMutation = Box<dyn FnOnce(&mut category::Model) -> Result<(), ServiceError> + Send>;

/// Persistence for categories, keyed by id.
///
/// Deleting a category also removes the products that reference it.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<category::Model>, ServiceError>;
    async fn create(&self, category: &category::Model) -> Result<category::Model, ServiceError>;
    /// Load, mutate and persist one row atomically. `Ok(None)` when the row is missing.
    async fn update_with(&self, id: Uuid, mutate: CategoryMutation) -> Result<Option<category::Model>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
}
