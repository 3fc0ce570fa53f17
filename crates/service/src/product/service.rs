use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::{product, validation};

use crate::category::CategoryService;
use crate::errors::ServiceError;
use crate::metrics::observed;
use crate::product::domain::ProductInput;
use crate::product::repository::ProductRepository;

const ENTITY: &str = "product";

/// Application service for products.
/// Resolves the referenced category through [`CategoryService`] on every write.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
    categories: Arc<CategoryService>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>, categories: Arc<CategoryService>) -> Self {
        Self { repo, categories }
    }

    pub async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        observed(ENTITY, "find_all", self.repo.list()).await
    }

    #[instrument(skip(self))]
    pub async fn find(&self, id: Uuid) -> Result<product::Model, ServiceError> {
        observed(ENTITY, "find", self.load(id)).await
    }

    async fn load(&self, id: Uuid) -> Result<product::Model, ServiceError> {
        self.repo.get(id).await?.ok_or(ServiceError::ProductNotFound(id))
    }

    /// Create a product in an existing category.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::{category::CategoryService, product::{ProductInput, ProductService}};
    /// use service::storage::memory::MemoryStore;
    /// let store = MemoryStore::new();
    /// let categories = Arc::new(CategoryService::new(store.clone()));
    /// let products = ProductService::new(store, categories.clone());
    /// let tools = tokio_test::block_on(categories.add("Tools")).unwrap();
    /// let input = ProductInput { name: "Hammer".into(), description: "steel".into(), category_id: tools.id, price: 1000.0, amount: 10 };
    /// let hammer = tokio_test::block_on(products.add(input)).unwrap();
    /// assert_eq!(hammer.date_creation, hammer.date_last_change);
    /// ```
    #[instrument(skip(self, input), fields(name = %input.name, category_id = %input.category_id))]
    pub async fn add(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        observed(ENTITY, "add", async move {
            let category = self.categories.find(input.category_id).await?;
            let product = product::Model::new(
                &input.name,
                &input.description,
                category.id,
                input.price,
                input.amount,
                Utc::now().into(),
            );
            validation::validate(&product)?;
            let saved = self.repo.create(&product).await?;
            info!(product_id = %saved.id, category_id = %saved.category_id, amount = saved.amount, "product_added");
            Ok(saved)
        })
        .await
    }

    /// Replace every field of a product.
    ///
    /// `date_last_change` moves only when `amount` differs from the stored value.
    /// Comparison, validation and write run against the row locked by the repository.
    #[instrument(skip(self, input), fields(category_id = %input.category_id))]
    pub async fn edit(&self, id: Uuid, input: ProductInput) -> Result<product::Model, ServiceError> {
        observed(ENTITY, "edit", async move {
            self.load(id).await?;
            let category = self.categories.find(input.category_id).await?;
            let now: DateTime<FixedOffset> = Utc::now().into();

            let saved = self
                .repo
                .update_with(
                    id,
                    Box::new(move |row: &mut product::Model| -> Result<(), ServiceError> {
                        row.name = input.name;
                        row.description = input.description;
                        row.price = input.price;
                        row.category_id = category.id;
                        let amount_changed = row.set_amount(input.amount, now);
                        debug!(amount_changed, "amount_compared");
                        validation::validate(&*row)?;
                        Ok(())
                    }),
                )
                .await?
                .ok_or(ServiceError::ProductNotFound(id))?;
            info!(product_id = %saved.id, amount = saved.amount, "product_edited");
            Ok(saved)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        observed(ENTITY, "delete", async {
            let product = self.load(id).await?;
            if !self.repo.delete(product.id).await? {
                return Err(ServiceError::ProductNotFound(id));
            }
            info!(product_id = %id, "product_deleted");
            Ok(())
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Result<(), ServiceError> {
        observed(ENTITY, "delete_all", async {
            let removed = self.repo.delete_all().await?;
            info!(removed, "products_cleared");
            Ok(())
        })
        .await
    }
}
