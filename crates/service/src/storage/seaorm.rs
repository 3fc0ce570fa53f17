use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use models::{category, product};

use crate::category::repository::{CategoryMutation, CategoryRepository};
use crate::errors::ServiceError;
use crate::product::repository::{ProductMutation, ProductRepository};

fn db_err(e: impl std::fmt::Display) -> ServiceError {
    ServiceError::Db(e.to_string())
}

/// Unwrap a transaction result: mutation errors pass through, connection and
/// commit failures become `Db`.
fn tx_err(e: TransactionError<ServiceError>) -> ServiceError {
    match e {
        TransactionError::Connection(db) => db_err(db),
        TransactionError::Transaction(inner) => inner,
    }
}

/// SeaORM-backed category repository.
#[derive(Clone)]
pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn list(&self) -> Result<Vec<category::Model>, ServiceError> {
        category::Entity::find().all(&self.db).await.map_err(db_err)
    }

    async fn get(&self, id: Uuid) -> Result<Option<category::Model>, ServiceError> {
        category::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn create(&self, category: &category::Model) -> Result<category::Model, ServiceError> {
        category.to_active_model().insert(&self.db).await.map_err(db_err)
    }

    async fn update_with(&self, id: Uuid, mutate: CategoryMutation) -> Result<Option<category::Model>, ServiceError> {
        self.db
            .transaction::<_, Option<category::Model>, ServiceError>(|txn| {
                Box::pin(async move {
                    // FOR UPDATE keeps the row ours until commit
                    let Some(mut row) = category::Entity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await
                        .map_err(db_err)?
                    else {
                        return Ok(None);
                    };
                    mutate(&mut row)?;
                    row.id = id;
                    let saved = row.to_active_model().update(txn).await.map_err(db_err)?;
                    Ok(Some(saved))
                })
            })
            .await
            .map_err(tx_err)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = category::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        let res = category::Entity::delete_many().exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected)
    }
}

/// SeaORM-backed product repository.
#[derive(Clone)]
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .order_by_asc(product::Column::DateCreation)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn get(&self, id: Uuid) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn create(&self, product: &product::Model) -> Result<product::Model, ServiceError> {
        product.to_active_model().insert(&self.db).await.map_err(db_err)
    }

    async fn update_with(&self, id: Uuid, mutate: ProductMutation) -> Result<Option<product::Model>, ServiceError> {
        self.db
            .transaction::<_, Option<product::Model>, ServiceError>(|txn| {
                Box::pin(async move {
                    let Some(mut row) = product::Entity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await
                        .map_err(db_err)?
                    else {
                        return Ok(None);
                    };
                    // compared against the locked row, not an earlier read
                    mutate(&mut row)?;
                    row.id = id;
                    let saved = row.to_active_model().update(txn).await.map_err(db_err)?;
                    Ok(Some(saved))
                })
            })
            .await
            .map_err(tx_err)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        let res = product::Entity::delete_many().exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected)
    }
}
