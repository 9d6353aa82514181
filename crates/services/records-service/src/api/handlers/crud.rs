//! Handler bodies shared by every record type.
//!
//! The per-entity modules only bind a repository and a [`Resource`] to
//! these functions, and carry the OpenAPI annotations.

use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use tracing::{debug, info};

use common::{AppResult, OptionExt};

use crate::repository::RecordRepository;

/// Plain-text confirmation returned by a successful mutation.
pub type Confirmation = (StatusCode, &'static str);

/// Naming and confirmation texts of one record type.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    /// Singular name used in logs
    pub name: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

/// Every record, ordered by id.
pub async fn list<R>(repo: &dyn RecordRepository<R>) -> AppResult<Json<Vec<R>>>
where
    R: Serialize + Send + Sync + 'static,
{
    let records = repo.list().await?;
    debug!(count = records.len(), "Records listed");
    Ok(Json(records))
}

/// The record with `id`, wrapped in a one-element array.
pub async fn fetch<R>(repo: &dyn RecordRepository<R>, id: i32) -> AppResult<Json<Vec<R>>>
where
    R: Serialize + Send + Sync + 'static,
{
    let record = repo.find_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(vec![record]))
}

/// Insert `record` under its own id.
pub async fn create<R>(
    repo: &dyn RecordRepository<R>,
    resource: Resource,
    record: R,
) -> AppResult<Confirmation>
where
    R: Send + Sync + 'static,
{
    repo.create(record).await?;
    info!(resource = resource.name, "Record created");
    Ok((StatusCode::OK, resource.created))
}

/// Overwrite the record at `id`; `record.id` becomes its new key.
pub async fn replace<R>(
    repo: &dyn RecordRepository<R>,
    resource: Resource,
    id: i32,
    record: R,
) -> AppResult<Confirmation>
where
    R: Send + Sync + 'static,
{
    repo.replace(id, record).await?;
    info!(resource = resource.name, id, "Record replaced");
    Ok((StatusCode::CREATED, resource.updated))
}

/// Delete the record at `id`; the removal is committed before replying.
pub async fn remove<R>(
    repo: &dyn RecordRepository<R>,
    resource: Resource,
    id: i32,
) -> AppResult<Confirmation>
where
    R: Send + Sync + 'static,
{
    repo.delete(id).await?;
    info!(resource = resource.name, id, "Record deleted");
    Ok((StatusCode::CREATED, resource.deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockRecordRepository;
    use common::AppError;
    use domain::Offer;
    use mockall::predicate::eq;
    use sea_orm::DbErr;

    const OFFER: Resource = Resource {
        name: "offer",
        created: "created",
        updated: "updated",
        deleted: "deleted",
    };

    fn offer(id: i32) -> Offer {
        Offer {
            id,
            executor_id: 2,
            order_id: 1,
        }
    }

    #[tokio::test]
    async fn storage_failure_is_a_server_error() {
        let mut repo = MockRecordRepository::<Offer>::new();
        repo.expect_list()
            .returning(|| Err(AppError::Database(DbErr::Custom("disk I/O error".into()))));

        let err = list(&repo).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "A database error occurred");
    }

    #[tokio::test]
    async fn fetch_wraps_the_record_in_an_array() {
        let mut repo = MockRecordRepository::<Offer>::new();
        repo.expect_find_by_id()
            .with(eq(4))
            .returning(|id| Ok(Some(offer(id))));

        let Json(body) = fetch(&repo, 4).await.unwrap();
        assert_eq!(body, vec![offer(4)]);
    }

    #[tokio::test]
    async fn fetch_of_missing_id_is_not_found() {
        let mut repo = MockRecordRepository::<Offer>::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let err = fetch(&repo, 4).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn mutations_answer_with_their_confirmation() {
        let mut repo = MockRecordRepository::<Offer>::new();
        repo.expect_create().times(1).returning(|_| Ok(()));
        repo.expect_replace()
            .withf(|id, record| *id == 1 && record.id == 5)
            .returning(|_, _| Ok(()));
        repo.expect_delete().with(eq(5)).returning(|_| Ok(()));

        assert_eq!(
            create(&repo, OFFER, offer(1)).await.unwrap(),
            (StatusCode::OK, "created")
        );
        assert_eq!(
            replace(&repo, OFFER, 1, offer(5)).await.unwrap(),
            (StatusCode::CREATED, "updated")
        );
        assert_eq!(
            remove(&repo, OFFER, 5).await.unwrap(),
            (StatusCode::CREATED, "deleted")
        );
    }

    #[tokio::test]
    async fn delete_of_missing_id_propagates_not_found() {
        let mut repo = MockRecordRepository::<Offer>::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));

        let err = remove(&repo, OFFER, 9).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
