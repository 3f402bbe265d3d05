use futures_util::future::BoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use super::Resource;
use crate::models::{Client, ClientCreate, ClientUpdate};

impl Resource for Client {
    const TABLE: &'static str = "clients";
    const LABEL: &'static str = "Client";

    type Create = ClientCreate;
    type Update = ClientUpdate;

    fn insert<'a>(pool: &'a PgPool, data: &'a ClientCreate) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Client>(
                r#"
                INSERT INTO clients (name, logo_url, website_url, display_order, is_active)
                VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, TRUE))
                RETURNING *
                "#,
            )
            .bind(data.name.trim())
            .bind(data.logo_url.trim())
            .bind(data.website_url.as_deref())
            .bind(data.display_order)
            .bind(data.is_active)
            .fetch_one(pool)
            .await
        })
    }

    fn update<'a>(
        pool: &'a PgPool,
        id: Uuid,
        data: &'a ClientUpdate,
    ) -> BoxFuture<'a, Result<Option<Self>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Client>(
                r#"
                UPDATE clients
                SET
                    name = COALESCE($1, name),
                    logo_url = COALESCE($2, logo_url),
                    website_url = CASE WHEN $3 THEN $4 ELSE website_url END,
                    display_order = COALESCE($5, display_order),
                    is_active = COALESCE($6, is_active),
                    updated_at = now()
                WHERE id = $7
                RETURNING *
                "#,
            )
            .bind(data.name.as_deref().map(str::trim))
            .bind(data.logo_url.as_deref().map(str::trim))
            .bind(data.website_url.is_some())
            .bind(data.website_url.as_ref().and_then(Option::as_deref))
            .bind(data.display_order)
            .bind(data.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
        })
    }
}
