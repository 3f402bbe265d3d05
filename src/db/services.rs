use futures_util::future::BoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Resource, Slugged};
use crate::common::resolve_slug;
use crate::models::{Service, ServiceCreate, ServiceUpdate};

impl Resource for Service {
    const TABLE: &'static str = "services";
    const LABEL: &'static str = "Service";

    type Create = ServiceCreate;
    type Update = ServiceUpdate;

    fn insert<'a>(pool: &'a PgPool, data: &'a ServiceCreate) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Service>(
                r#"
                INSERT INTO services
                    (title, slug, short_description, description, icon, image_url, features, display_order, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0), COALESCE($9, TRUE))
                RETURNING *
                "#,
            )
            .bind(data.title.trim())
            .bind(resolve_slug(data.slug.as_deref(), &data.title))
            .bind(data.short_description.trim())
            .bind(data.description.as_deref())
            .bind(data.icon.as_deref())
            .bind(data.image_url.as_deref())
            .bind(&data.features)
            .bind(data.display_order)
            .bind(data.is_active)
            .fetch_one(pool)
            .await
        })
    }

    fn update<'a>(
        pool: &'a PgPool,
        id: Uuid,
        data: &'a ServiceUpdate,
    ) -> BoxFuture<'a, Result<Option<Self>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Service>(
                r#"
                UPDATE services
                SET
                    title = COALESCE($1, title),
                    slug = COALESCE($2, slug),
                    short_description = COALESCE($3, short_description),
                    description = CASE WHEN $4 THEN $5 ELSE description END,
                    icon = CASE WHEN $6 THEN $7 ELSE icon END,
                    image_url = CASE WHEN $8 THEN $9 ELSE image_url END,
                    features = COALESCE($10, features),
                    display_order = COALESCE($11, display_order),
                    is_active = COALESCE($12, is_active),
                    updated_at = now()
                WHERE id = $13
                RETURNING *
                "#,
            )
            .bind(data.title.as_deref().map(str::trim))
            .bind(data.slug.as_deref().map(str::trim))
            .bind(data.short_description.as_deref().map(str::trim))
            .bind(data.description.is_some())
            .bind(data.description.as_ref().and_then(Option::as_deref))
            .bind(data.icon.is_some())
            .bind(data.icon.as_ref().and_then(Option::as_deref))
            .bind(data.image_url.is_some())
            .bind(data.image_url.as_ref().and_then(Option::as_deref))
            .bind(data.features.as_ref())
            .bind(data.display_order)
            .bind(data.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
        })
    }
}

impl Slugged for Service {}
