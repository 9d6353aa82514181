//! Generic repository shared by every table.

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use common::{AppError, AppResult};

use super::entities::KeyedTable;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Rows per `INSERT` statement when bulk loading; keeps SQLite under its
/// bound-parameter limit.
const INSERT_BATCH_SIZE: usize = 100;

/// Record repository trait for dependency injection.
///
/// Lookups return `Option`; mutations of a missing id return
/// `AppError::NotFound`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RecordRepository<R: Send + Sync + 'static>: Send + Sync {
    /// All records ordered by id
    async fn list(&self) -> AppResult<Vec<R>>;

    /// Find record by id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<R>>;

    /// Insert a record with its client-supplied id
    async fn create(&self, record: R) -> AppResult<()>;

    /// Overwrite every column of the row keyed by `id`, the id included
    async fn replace(&self, id: i32, record: R) -> AppResult<()>;

    /// Remove the row keyed by `id`
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// SeaORM-backed repository, parameterized by the table's active model.
pub struct RecordStore<A> {
    db: DatabaseConnection,
    _table: PhantomData<fn() -> A>,
}

impl<A> RecordStore<A> {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _table: PhantomData,
        }
    }
}

#[async_trait]
impl<A, R> RecordRepository<R> for RecordStore<A>
where
    A: ActiveModelTrait + From<R> + Send + 'static,
    A::Entity: KeyedTable,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A> + Into<R> + Sync,
    R: Send + Sync + 'static,
{
    async fn list(&self) -> AppResult<Vec<R>> {
        let models = <A::Entity as EntityTrait>::find()
            .order_by_asc(<A::Entity as KeyedTable>::id_column())
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<R>> {
        let result = <A::Entity as EntityTrait>::find()
            .filter(<A::Entity as KeyedTable>::id_column().eq(id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, record: R) -> AppResult<()> {
        <A::Entity as EntityTrait>::insert(A::from(record))
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn replace(&self, id: i32, record: R) -> AppResult<()> {
        // UPDATE .. SET every column WHERE id = :id, so the key itself can move
        let result = <A::Entity as EntityTrait>::update_many()
            .set(A::from(record))
            .filter(<A::Entity as KeyedTable>::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = <A::Entity as EntityTrait>::delete_many()
            .filter(<A::Entity as KeyedTable>::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Bulk insert records into the table of `A`, in batches.
///
/// Takes any connection so that callers can run it inside a transaction.
pub async fn insert_all<A, R, C>(conn: &C, records: Vec<R>) -> Result<u64, DbErr>
where
    A: ActiveModelTrait + From<R> + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let mut pending: Vec<A> = records.into_iter().map(A::from).collect();
    let mut inserted = 0;

    while !pending.is_empty() {
        let rest = pending.split_off(pending.len().min(INSERT_BATCH_SIZE));
        inserted += <A::Entity as EntityTrait>::insert_many(pending)
            .exec_without_returning(conn)
            .await?;
        pending = rest;
    }

    Ok(inserted)
}
