use async_trait::async_trait;
use uuid::Uuid;

use models::product;

use crate::errors::ServiceError;

/// In-place change applied to a loaded product before it is written back.
/// Returning an error aborts the write.
pub type ProductMutation = Box<dyn FnOnce(&mut product::Model) -> Result<(), ServiceError> + Send>;

/// Persistence for products, keyed by id.
///
/// `create`/`update_with` fail if `category_id` does not name a stored category.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError>;
    async fn create(&self, product: &product::Model) -> Result<product::Model, ServiceError>;
    /// Load, mutate and persist one row atomically. `Ok(None)` when the row is missing.
    async fn update_with(&self, id: Uuid, mutate: ProductMutation) -> Result<Option<product::Model>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
}
