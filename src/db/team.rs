use futures_util::future::BoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use super::Resource;
use crate::models::{TeamMember, TeamMemberCreate, TeamMemberUpdate};

impl Resource for TeamMember {
    const TABLE: &'static str = "team_members";
    const LABEL: &'static str = "Team member";

    type Create = TeamMemberCreate;
    type Update = TeamMemberUpdate;

    fn insert<'a>(pool: &'a PgPool, data: &'a TeamMemberCreate) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, TeamMember>(
                r#"
                INSERT INTO team_members
                    (name, position, bio, image_url, email, linkedin_url, display_order, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0), COALESCE($8, TRUE))
                RETURNING *
                "#,
            )
            .bind(data.name.trim())
            .bind(data.position.trim())
            .bind(data.bio.as_deref())
            .bind(data.image_url.as_deref())
            .bind(data.email.as_deref().map(str::trim))
            .bind(data.linkedin_url.as_deref())
            .bind(data.display_order)
            .bind(data.is_active)
            .fetch_one(pool)
            .await
        })
    }

    fn update<'a>(
        pool: &'a PgPool,
        id: Uuid,
        data: &'a TeamMemberUpdate,
    ) -> BoxFuture<'a, Result<Option<Self>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, TeamMember>(
                r#"
                UPDATE team_members
                SET
                    name = COALESCE($1, name),
                    position = COALESCE($2, position),
                    bio = CASE WHEN $3 THEN $4 ELSE bio END,
                    image_url = CASE WHEN $5 THEN $6 ELSE image_url END,
                    email = CASE WHEN $7 THEN $8 ELSE email END,
                    linkedin_url = CASE WHEN $9 THEN $10 ELSE linkedin_url END,
                    display_order = COALESCE($11, display_order),
                    is_active = COALESCE($12, is_active),
                    updated_at = now()
                WHERE id = $13
                RETURNING *
                "#,
            )
            .bind(data.name.as_deref().map(str::trim))
            .bind(data.position.as_deref().map(str::trim))
            .bind(data.bio.is_some())
            .bind(data.bio.as_ref().and_then(Option::as_deref))
            .bind(data.image_url.is_some())
            .bind(data.image_url.as_ref().and_then(Option::as_deref))
            .bind(data.email.is_some())
            .bind(data.email.as_ref().and_then(Option::as_deref).map(str::trim))
            .bind(data.linkedin_url.is_some())
            .bind(data.linkedin_url.as_ref().and_then(Option::as_deref))
            .bind(data.display_order)
            .bind(data.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
        })
    }
}
