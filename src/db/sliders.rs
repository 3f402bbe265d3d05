use futures_util::future::BoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use super::Resource;
use crate::models::{Slider, SliderCreate, SliderUpdate};

impl Resource for Slider {
    const TABLE: &'static str = "sliders";
    const LABEL: &'static str = "Slider";

    type Create = SliderCreate;
    type Update = SliderUpdate;

    fn insert<'a>(pool: &'a PgPool, data: &'a SliderCreate) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Slider>(
                r#"
                INSERT INTO sliders (title, subtitle, image_url, button_text, button_link, display_order, is_active)
                VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), COALESCE($7, TRUE))
                RETURNING *
                "#,
            )
            .bind(data.title.trim())
            .bind(data.subtitle.as_deref())
            .bind(data.image_url.trim())
            .bind(data.button_text.as_deref())
            .bind(data.button_link.as_deref())
            .bind(data.display_order)
            .bind(data.is_active)
            .fetch_one(pool)
            .await
        })
    }

    fn update<'a>(
        pool: &'a PgPool,
        id: Uuid,
        data: &'a SliderUpdate,
    ) -> BoxFuture<'a, Result<Option<Self>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Slider>(
                r#"
                UPDATE sliders
                SET
                    title = COALESCE($1, title),
                    subtitle = CASE WHEN $2 THEN $3 ELSE subtitle END,
                    image_url = COALESCE($4, image_url),
                    button_text = CASE WHEN $5 THEN $6 ELSE button_text END,
                    button_link = CASE WHEN $7 THEN $8 ELSE button_link END,
                    display_order = COALESCE($9, display_order),
                    is_active = COALESCE($10, is_active),
                    updated_at = now()
                WHERE id = $11
                RETURNING *
                "#,
            )
            .bind(data.title.as_deref().map(str::trim))
            .bind(data.subtitle.is_some())
            .bind(data.subtitle.as_ref().and_then(Option::as_deref))
            .bind(data.image_url.as_deref().map(str::trim))
            .bind(data.button_text.is_some())
            .bind(data.button_text.as_ref().and_then(Option::as_deref))
            .bind(data.button_link.is_some())
            .bind(data.button_link.as_ref().and_then(Option::as_deref))
            .bind(data.display_order)
            .bind(data.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
        })
    }
}
