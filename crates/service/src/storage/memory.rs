use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use models::{category, product};

use crate::category::repository::{CategoryMutation, CategoryRepository};
use crate::errors::ServiceError;
use crate::product::repository::{ProductMutation, ProductRepository};

/// In-memory store backing both repositories.
///
/// Keeps insertion order and enforces the relational schema's rules: a
/// product must reference a stored category, and deleting a category
/// deletes its products. Locks are always taken categories-then-products.
#[derive(Default)]
pub struct MemoryStore {
    categories: RwLock<Vec<category::Model>>,
    products: RwLock<Vec<product::Model>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

fn missing_category(id: Uuid) -> ServiceError {
    ServiceError::Db(format!("foreign key violation: category {id} does not exist"))
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
        Ok(self.categories.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<category::Model>, ServiceError> {
        Ok(self.categories.read().await.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, category: &category::Model) -> Result<category::Model, ServiceError> {
        let mut categories = self.categories.write().await;
        if categories.iter().any(|c| c.id == category.id) {
            return Err(ServiceError::Db(format!("duplicate category id {}", category.id)));
        }
        categories.push(category.clone());
        Ok(category.clone())
    }

    async fn update_with(&self, id: Uuid, mutate: CategoryMutation) -> Result<Option<category::Model>, ServiceError> {
        let mut categories = self.categories.write().await;
        let Some(slot) = categories.iter_mut().find(|c| c.id == id) else { return Ok(None) };
        // mutate a copy so a rejected change leaves the row as it was
        let mut next = slot.clone();
        mutate(&mut next)?;
        next.id = id;
        *slot = next.clone();
        Ok(Some(next))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut categories = self.categories.write().await;
        let before = categories.len();
        categories.retain(|c| c.id != id);
        let existed = categories.len() != before;
        if existed {
            self.products.write().await.retain(|p| p.category_id != id);
        }
        Ok(existed)
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        let mut categories = self.categories.write().await;
        let removed = categories.len() as u64;
        categories.clear();
        self.products.write().await.clear();
        Ok(removed)
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self.products.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
        Ok(self.products.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, product: &product::Model) -> Result<product::Model, ServiceError> {
        let categories = self.categories.read().await;
        if !categories.iter().any(|c| c.id == product.category_id) {
            return Err(missing_category(product.category_id));
        }
        let mut products = self.products.write().await;
        if products.iter().any(|p| p.id == product.id) {
            return Err(ServiceError::Db(format!("duplicate product id {}", product.id)));
        }
        products.push(product.clone());
        Ok(product.clone())
    }

    async fn update_with(&self, id: Uuid, mutate: ProductMutation) -> Result<Option<product::Model>, ServiceError> {
        let categories = self.categories.read().await;
        let mut products = self.products.write().await;
        let Some(slot) = products.iter_mut().find(|p| p.id == id) else { return Ok(None) };
        let mut next = slot.clone();
        mutate(&mut next)?;
        next.id = id;
        if !categories.iter().any(|c| c.id == next.category_id) {
            return Err(missing_category(next.category_id));
        }
        *slot = next.clone();
        Ok(Some(next))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() != before)
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        let mut products = self.products.write().await;
        let removed = products.len() as u64;
        products.clear();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product_in(category_id: Uuid) -> product::Model {
        product::Model::new("Hammer", "steel", category_id, 10.0, 1, Utc::now().into())
    }

    #[tokio::test]
    async fn product_write_requires_stored_category() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let orphan = product_in(Uuid::new_v4());
        assert!(matches!(ProductRepository::create(&*store, &orphan).await, Err(ServiceError::Db(_))));

        let cat = CategoryRepository::create(&*store, &category::Model::new("Tools")).await?;
        let p = ProductRepository::create(&*store, &product_in(cat.id)).await?;
        let moved = ProductRepository::update_with(&*store, p.id, Box::new(|row: &mut product::Model| -> Result<(), ServiceError> {
            row.category_id = Uuid::new_v4();
            Ok(())
        }))
        .await;
        assert!(matches!(moved, Err(ServiceError::Db(_))));
        assert_eq!(ProductRepository::get(&*store, p.id).await?, Some(p));
        Ok(())
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let names = ["c", "a", "b"];
        for n in names {
            CategoryRepository::create(&*store, &category::Model::new(n)).await?;
        }
        let listed: Vec<String> = CategoryRepository::list(&*store).await?.into_iter().map(|c| c.name).collect();
        assert_eq!(listed, names);
        Ok(())
    }

    #[tokio::test]
    async fn category_delete_cascades_and_reports_existence() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let cat = CategoryRepository::create(&*store, &category::Model::new("Tools")).await?;
        ProductRepository::create(&*store, &product_in(cat.id)).await?;
        ProductRepository::create(&*store, &product_in(cat.id)).await?;

        assert!(CategoryRepository::delete(&*store, cat.id).await?);
        assert!(!CategoryRepository::delete(&*store, cat.id).await?);
        assert!(ProductRepository::list(&*store).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_with_on_missing_row_returns_none() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let touched = CategoryRepository::update_with(&*store, Uuid::new_v4(), Box::new(|c: &mut category::Model| -> Result<(), ServiceError> {
            c.name = "ghost".into();
            Ok(())
        }))
        .await?;
        assert!(touched.is_none());
        assert!(CategoryRepository::list(&*store).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn rejected_mutation_keeps_stored_row() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let cat = CategoryRepository::create(&*store, &category::Model::new("Tools")).await?;
        let res = CategoryRepository::update_with(&*store, cat.id, Box::new(|c: &mut category::Model| -> Result<(), ServiceError> {
            c.name = "Garden".into();
            Err(ServiceError::Validation(vec!["rejected".into()]))
        }))
        .await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        assert_eq!(CategoryRepository::get(&*store, cat.id).await?, Some(cat));
        Ok(())
    }
}
