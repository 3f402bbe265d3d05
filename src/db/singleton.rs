use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

use crate::models::Validate;

/// A content document with exactly one row. Column defaults in the migration
/// supply the copy used when the row is first created.
pub trait Singleton: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    const TABLE: &'static str;

    type Update: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Applies a partial update to the existing row.
    fn apply<'a>(pool: &'a PgPool, data: &'a Self::Update) -> BoxFuture<'a, Result<Self, sqlx::Error>>;
}

pub async fn find_singleton<S: Singleton>(pool: &PgPool) -> Result<Option<S>, sqlx::Error> {
    let sql = format!("SELECT * FROM {} WHERE slot", S::TABLE);

    sqlx::query_as::<_, S>(&sql).fetch_optional(pool).await
}

/// Fetches the document, inserting the defaults first when the table is empty.
/// Concurrent first reads converge on the same row.
pub async fn get_or_create<S: Singleton>(pool: &PgPool) -> Result<S, sqlx::Error> {
    if let Some(doc) = find_singleton::<S>(pool).await? {
        return Ok(doc);
    }

    let insert = format!("INSERT INTO {} DEFAULT VALUES ON CONFLICT (slot) DO NOTHING", S::TABLE);
    sqlx::query(&insert).execute(pool).await?;
    log::info!("Created default {} document", S::TABLE);

    let select = format!("SELECT * FROM {} WHERE slot", S::TABLE);
    sqlx::query_as::<_, S>(&select).fetch_one(pool).await
}

pub async fn update_singleton<S: Singleton>(pool: &PgPool, data: &S::Update) -> Result<S, sqlx::Error> {
    get_or_create::<S>(pool).await?;
    S::apply(pool, data).await
}
