use futures_util::future::BoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Resource, Slugged};
use crate::common::resolve_slug;
use crate::models::{Industry, IndustryCreate, IndustryUpdate};

impl Resource for Industry {
    const TABLE: &'static str = "industries";
    const LABEL: &'static str = "Industry";

    type Create = IndustryCreate;
    type Update = IndustryUpdate;

    fn insert<'a>(pool: &'a PgPool, data: &'a IndustryCreate) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Industry>(
                r#"
                INSERT INTO industries (name, slug, description, icon, image_url, display_order, is_active)
                VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, TRUE))
                RETURNING *
                "#,
            )
            .bind(data.name.trim())
            .bind(resolve_slug(data.slug.as_deref(), &data.name))
            .bind(data.description.as_deref())
            .bind(data.icon.as_deref())
            .bind(data.image_url.as_deref())
            .bind(data.display_order)
            .bind(data.is_active)
            .fetch_one(pool)
            .await
        })
    }

    fn update<'a>(
        pool: &'a PgPool,
        id: Uuid,
        data: &'a IndustryUpdate,
    ) -> BoxFuture<'a, Result<Option<Self>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Industry>(
                r#"
                UPDATE industries
                SET
                    name = COALESCE($1, name),
                    slug = COALESCE($2, slug),
                    description = CASE WHEN $3 THEN $4 ELSE description END,
                    icon = CASE WHEN $5 THEN $6 ELSE icon END,
                    image_url = CASE WHEN $7 THEN $8 ELSE image_url END,
                    display_order = COALESCE($9, display_order),
                    is_active = COALESCE($10, is_active),
                    updated_at = now()
                WHERE id = $11
                RETURNING *
                "#,
            )
            .bind(data.name.as_deref().map(str::trim))
            .bind(data.slug.as_deref().map(str::trim))
            .bind(data.description.is_some())
            .bind(data.description.as_ref().and_then(Option::as_deref))
            .bind(data.icon.is_some())
            .bind(data.icon.as_ref().and_then(Option::as_deref))
            .bind(data.image_url.is_some())
            .bind(data.image_url.as_ref().and_then(Option::as_deref))
            .bind(data.display_order)
            .bind(data.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
        })
    }
}

impl Slugged for Industry {}
