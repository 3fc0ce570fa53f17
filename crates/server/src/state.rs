use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::category::{repository::CategoryRepository, CategoryService};
use service::product::{repository::ProductRepository, ProductService};
use service::storage::{
    memory::MemoryStore,
    seaorm::{SeaOrmCategoryRepository, SeaOrmProductRepository},
};

/// Services shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<CategoryService>,
    pub products: Arc<ProductService>,
}

impl AppState {
    pub fn new(category_repo: Arc<dyn CategoryRepository>, product_repo: Arc<dyn ProductRepository>) -> Self {
        let categories = Arc::new(CategoryService::new(category_repo));
        let products = Arc::new(ProductService::new(product_repo, Arc::clone(&categories)));
        Self { categories, products }
    }

    pub fn postgres(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCategoryRepository { db: db.clone() }),
            Arc::new(SeaOrmProductRepository { db }),
        )
    }

    pub fn in_memory() -> Self {
        let store = MemoryStore::new();
        Self::new(store.clone(), store)
    }
}
