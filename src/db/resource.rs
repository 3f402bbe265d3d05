use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::common::ResourceError;
use crate::models::Validate;

/// A document collection with admin CRUD and an active-only public view.
///
/// Reads and deletes are generic over the table name; inserts and updates are
/// written per resource since their column lists differ.
pub trait Resource: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    const TABLE: &'static str;
    const LABEL: &'static str;

    type Create: DeserializeOwned + Validate + Send + Sync + 'static;
    type Update: DeserializeOwned + Validate + Send + Sync + 'static;

    fn insert<'a>(pool: &'a PgPool, data: &'a Self::Create) -> BoxFuture<'a, Result<Self, sqlx::Error>>;

    fn update<'a>(
        pool: &'a PgPool,
        id: Uuid,
        data: &'a Self::Update,
    ) -> BoxFuture<'a, Result<Option<Self>, sqlx::Error>>;
}

/// Resources addressable by a unique slug on the public site.
pub trait Slugged: Resource {}

const ORDER: &str = "ORDER BY display_order ASC, created_at ASC";

pub async fn find_all<R: Resource>(pool: &PgPool, active_only: bool) -> Result<Vec<R>, sqlx::Error> {
    let sql = if active_only {
        format!("SELECT * FROM {} WHERE is_active {ORDER}", R::TABLE)
    } else {
        format!("SELECT * FROM {} {ORDER}", R::TABLE)
    };

    sqlx::query_as::<_, R>(&sql).fetch_all(pool).await
}

pub async fn find_by_id<R: Resource>(
    pool: &PgPool,
    id: Uuid,
    active_only: bool,
) -> Result<Option<R>, sqlx::Error> {
    let sql = if active_only {
        format!("SELECT * FROM {} WHERE id = $1 AND is_active", R::TABLE)
    } else {
        format!("SELECT * FROM {} WHERE id = $1", R::TABLE)
    };

    sqlx::query_as::<_, R>(&sql).bind(id).fetch_optional(pool).await
}

pub async fn find_by_slug<R: Slugged>(pool: &PgPool, slug: &str) -> Result<Option<R>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} WHERE slug = $1 AND is_active", R::TABLE);

    sqlx::query_as::<_, R>(&sql).bind(slug).fetch_optional(pool).await
}

pub async fn count<R: Resource>(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);

    sqlx::query_scalar::<_, i64>(&sql).fetch_one(pool).await
}

pub async fn create<R: Resource>(pool: &PgPool, data: &R::Create) -> Result<R, ResourceError> {
    R::insert(pool, data)
        .await
        .map_err(|e| ResourceError::from_write(R::LABEL, e))
}

pub async fn update<R: Resource>(pool: &PgPool, id: Uuid, data: &R::Update) -> Result<R, ResourceError> {
    R::update(pool, id, data)
        .await
        .map_err(|e| ResourceError::from_write(R::LABEL, e))?
        .ok_or(ResourceError::NotFound(R::LABEL))
}

pub async fn delete<R: Resource>(pool: &PgPool, id: Uuid) -> Result<(), ResourceError> {
    let sql = format!("DELETE FROM {} WHERE id = $1", R::TABLE);

    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    if result.rows_affected() == 0 {
        return Err(ResourceError::NotFound(R::LABEL));
    }
    Ok(())
}
