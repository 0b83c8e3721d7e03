use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};

use crate::{
    entity,
    error::ProductResult,
    models::{OperationResult, Product, messages},
    repository::ProductRepository,
};

/// Postgres-backed repository.
///
/// Each mutating call runs in its own transaction. Returning early drops the
/// transaction, which rolls it back.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create(&self, product: Product) -> ProductResult<OperationResult> {
        let txn = self.db.begin().await?;

        let existing = entity::Entity::find()
            .filter(entity::Column::Name.eq(product.name.as_str()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            tracing::info!(name = %product.name, "Rejected duplicate product");
            return Ok(OperationResult::failed(messages::ALREADY_EXISTS));
        }

        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(product.name),
            quantity: Set(product.quantity),
            price: Set(product.price),
        };

        // A concurrent insert of the same name can still win the race; the
        // unique index reports it here.
        let model = match active_model.insert(&txn).await {
            Ok(model) => model,
            Err(e) if is_unique_violation(&e) => {
                return Ok(OperationResult::failed(messages::ALREADY_EXISTS));
            }
            Err(e) => return Err(e.into()),
        };
        txn.commit().await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(OperationResult::ok(messages::ADDED))
    }

    async fn update(&self, product: Product) -> ProductResult<OperationResult> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::Entity::find_by_id(product.id).one(&txn).await? else {
            return Ok(OperationResult::failed(messages::NOT_FOUND));
        };

        let name_taken = entity::Entity::find()
            .filter(entity::Column::Name.eq(product.name.as_str()))
            .filter(entity::Column::Id.ne(product.id))
            .one(&txn)
            .await?
            .is_some();
        if name_taken {
            tracing::info!(product_id = product.id, name = %product.name, "Rejected rename onto existing name");
            return Ok(OperationResult::failed(messages::NAME_TAKEN));
        }

        let mut active_model = existing.into_active_model();
        active_model.name = Set(product.name);
        active_model.quantity = Set(product.quantity);
        active_model.price = Set(product.price);

        match active_model.update(&txn).await {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Ok(OperationResult::failed(messages::NAME_TAKEN));
            }
            Err(e) => return Err(e.into()),
        }
        txn.commit().await?;

        tracing::info!(product_id = product.id, "Updated product");
        Ok(OperationResult::ok(messages::UPDATED))
    }

    async fn delete(&self, id: i32) -> ProductResult<OperationResult> {
        let txn = self.db.begin().await?;

        let result = entity::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Ok(OperationResult::failed(messages::NOT_FOUND));
        }
        txn.commit().await?;

        tracing::info!(product_id = id, "Deleted product");
        Ok(OperationResult::ok(messages::DELETED))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, name: &str) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
            quantity: 10,
            price: Decimal::new(1250, 2),
        }
    }

    fn input(id: i32, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            quantity: 10,
            price: Decimal::new(1250, 2),
        }
    }

    #[tokio::test]
    async fn test_get_all_maps_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Product 1"), model(2, "Product 2")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let products = repo.get_all().await.unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(products[1].name, "Product 2");
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.find_by_id(7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_inserts_new_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .append_query_results([vec![model(1, "Widget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.create(input(0, "Widget")).await.unwrap();
        assert_eq!(result, OperationResult::ok(messages::ADDED));
    }

    #[tokio::test]
    async fn test_create_duplicate_name_skips_insert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Widget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.create(input(0, "Widget")).await.unwrap();
        assert_eq!(result, OperationResult::failed(messages::ALREADY_EXISTS));
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.update(input(5, "Widget")).await.unwrap();
        assert_eq!(result, OperationResult::failed(messages::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_update_rejects_taken_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(2, "Gadget")]])
            .append_query_results([vec![model(1, "Widget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.update(input(2, "Widget")).await.unwrap();
        assert_eq!(result, OperationResult::failed(messages::NAME_TAKEN));
    }

    #[tokio::test]
    async fn test_update_writes_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Widget")]])
            .append_query_results([Vec::<entity::Model>::new()])
            .append_query_results([vec![model(1, "Gadget")]])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.update(input(1, "Gadget")).await.unwrap();
        assert_eq!(result, OperationResult::ok(messages::UPDATED));
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.delete(9).await.unwrap();
        assert_eq!(result, OperationResult::failed(messages::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.delete(1).await.unwrap();
        assert_eq!(result, OperationResult::ok(messages::DELETED));
    }

    #[tokio::test]
    async fn test_store_failure_is_an_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgProductRepository::new(db);

        assert!(repo.get_all().await.is_err());
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_duplicate_insert_is_recognised_as_unique_violation() {
        let db = test_utils::TestDatabase::new().await;
        let row = || entity::ActiveModel {
            id: NotSet,
            name: Set("Widget".to_string()),
            quantity: Set(1),
            price: Set(Decimal::ONE),
        };

        row().insert(&db.connection()).await.unwrap();
        let err = row().insert(&db.connection()).await.unwrap_err();

        assert!(is_unique_violation(&err));
        assert!(!is_unique_violation(&DbErr::Custom("other".to_string())));
    }
}
