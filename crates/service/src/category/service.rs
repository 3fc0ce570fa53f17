use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::{category, validation};

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;
use crate::metrics::observed;

const ENTITY: &str = "category";

/// Application service for categories.
/// Owns the name rules; storage details stay behind the repository.
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn find(&self, id: Uuid) -> Result<category::Model, ServiceError> {
        observed(ENTITY, "find", self.load(id)).await
    }

    async fn load(&self, id: Uuid) -> Result<category::Model, ServiceError> {
        self.repo.get(id).await?.ok_or(ServiceError::CategoryNotFound(id))
    }

    pub async fn find_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        observed(ENTITY, "find_all", self.repo.list()).await
    }

    /// Create a category with a fresh id.
    ///
    /// # Examples
    /// ```
    /// use service::category::CategoryService;
    /// use service::storage::memory::MemoryStore;
    /// let store = MemoryStore::new();
    /// let svc = CategoryService::new(store);
    /// let tools = tokio_test::block_on(svc.add("Tools")).unwrap();
    /// assert_eq!(tokio_test::block_on(svc.find(tools.id)).unwrap().name, "Tools");
    /// assert!(tokio_test::block_on(svc.add("  ")).is_err());
    /// ```
    #[instrument(skip(self))]
    pub async fn add(&self, name: &str) -> Result<category::Model, ServiceError> {
        observed(ENTITY, "add", async {
            let category = category::Model::new(name);
            validation::validate(&category)?;
            let saved = self.repo.create(&category).await?;
            info!(category_id = %saved.id, name = %saved.name, "category_added");
            Ok(saved)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn edit(&self, id: Uuid, name: &str) -> Result<category::Model, ServiceError> {
        observed(ENTITY, "edit", async {
            let name = name.to_string();
            let saved = self
                .repo
                .update_with(
                    id,
                    Box::new(move |row: &mut category::Model| -> Result<(), ServiceError> {
                        row.name = name;
                        validation::validate(&*row)?;
                        Ok(())
                    }),
                )
                .await?
                .ok_or(ServiceError::CategoryNotFound(id))?;
            info!(category_id = %saved.id, name = %saved.name, "category_edited");
            Ok(saved)
        })
        .await
    }

    /// Remove one category; its products go with it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        observed(ENTITY, "delete", async {
            let category = self.load(id).await?;
            if !self.repo.delete(category.id).await? {
                // removed by someone else between the lookup and the delete
                return Err(ServiceError::CategoryNotFound(id));
            }
            info!(category_id = %id, "category_deleted");
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Result<(), ServiceError> {
        observed(ENTITY, "delete_all", async {
            let removed = self.repo.delete_all().await?;
            info!(removed, "categories_cleared");
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStore;

    fn service() -> CategoryService {
        CategoryService::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn add_then_find_returns_same_name() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.add("Tools").await?;
        let found = svc.find(created.id).await?;
        assert_eq!(found.name, "Tools");
        assert_eq!(found.id, created.id);
        Ok(())
    }

    #[tokio::test]
    async fn blank_name_is_rejected_and_not_persisted() -> Result<(), anyhow::Error> {
        let svc = service();
        for name in ["", "   ", "\t\n"] {
            match svc.add(name).await {
                Err(ServiceError::Validation(msgs)) => {
                    assert_eq!(msgs, vec!["Category name can't be null or empty"]);
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
        assert!(svc.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn edit_replaces_name() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.add("Tols").await?;
        let edited = svc.edit(created.id, "Tools").await?;
        assert_eq!(edited.id, created.id);
        assert_eq!(svc.find(created.id).await?.name, "Tools");
        Ok(())
    }

    #[tokio::test]
    async fn edit_to_blank_keeps_stored_name() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.add("Tools").await?;
        assert!(matches!(svc.edit(created.id, " ").await, Err(ServiceError::Validation(_))));
        assert_eq!(svc.find(created.id).await?.name, "Tools");
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let svc = service();
        let id = Uuid::new_v4();
        assert!(matches!(svc.find(id).await, Err(ServiceError::CategoryNotFound(x)) if x == id));
        assert!(matches!(svc.edit(id, "Tools").await, Err(ServiceError::CategoryNotFound(_))));
        assert!(matches!(svc.delete(id).await, Err(ServiceError::CategoryNotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_category() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc.add("Tools").await?;
        svc.delete(created.id).await?;
        assert!(matches!(svc.find(created.id).await, Err(ServiceError::CategoryNotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_all_empties_store_regardless_of_count() -> Result<(), anyhow::Error> {
        let svc = service();
        svc.delete_all().await?;
        assert!(svc.find_all().await?.is_empty());
        for i in 0..3 {
            svc.add(&format!("category {i}")).await?;
        }
        assert_eq!(svc.find_all().await?.len(), 3);
        svc.delete_all().await?;
        assert!(svc.find_all().await?.is_empty());
        Ok(())
    }
}
