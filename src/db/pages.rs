use futures_util::future::BoxFuture;
use sqlx::types::Json;
use sqlx::PgPool;

use super::Singleton;
use crate::models::{
    About, AboutUpdate, MissionVision, MissionVisionUpdate, OurValues, OurValuesUpdate,
    WhyChooseUs, WhyChooseUsUpdate,
};

impl Singleton for About {
    const TABLE: &'static str = "about_page";

    type Update = AboutUpdate;

    fn apply<'a>(pool: &'a PgPool, data: &'a AboutUpdate) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, About>(
                r#"
                UPDATE about_page
                SET
                    title = COALESCE($1, title),
                    subtitle = COALESCE($2, subtitle),
                    body = COALESCE($3, body),
                    image_url = CASE WHEN $4 THEN $5 ELSE image_url END,
                    years_experience = COALESCE($6, years_experience),
                    projects_completed = COALESCE($7, projects_completed),
                    happy_clients = COALESCE($8, happy_clients),
                    updated_at = now()
                WHERE slot
                RETURNING *
                "#,
            )
            .bind(data.title.as_deref().map(str::trim))
            .bind(data.subtitle.as_deref())
            .bind(data.body.as_deref())
            .bind(data.image_url.is_some())
            .bind(data.image_url.as_ref().and_then(Option::as_deref))
            .bind(data.years_experience)
            .bind(data.projects_completed)
            .bind(data.happy_clients)
            .fetch_one(pool)
            .await
        })
    }
}

impl Singleton for MissionVision {
    const TABLE: &'static str = "mission_vision";

    type Update = MissionVisionUpdate;

    fn apply<'a>(
        pool: &'a PgPool,
        data: &'a MissionVisionUpdate,
    ) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, MissionVision>(
                r#"
                UPDATE mission_vision
                SET
                    mission_title = COALESCE($1, mission_title),
                    mission_text = COALESCE($2, mission_text),
                    vision_title = COALESCE($3, vision_title),
                    vision_text = COALESCE($4, vision_text),
                    updated_at = now()
                WHERE slot
                RETURNING *
                "#,
            )
            .bind(data.mission_title.as_deref().map(str::trim))
            .bind(data.mission_text.as_deref())
            .bind(data.vision_title.as_deref().map(str::trim))
            .bind(data.vision_text.as_deref())
            .fetch_one(pool)
            .await
        })
    }
}

impl Singleton for WhyChooseUs {
    const TABLE: &'static str = "why_choose_us";

    type Update = WhyChooseUsUpdate;

    fn apply<'a>(
        pool: &'a PgPool,
        data: &'a WhyChooseUsUpdate,
    ) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, WhyChooseUs>(
                r#"
                UPDATE why_choose_us
                SET
                    heading = COALESCE($1, heading),
                    intro = COALESCE($2, intro),
                    points = COALESCE($3, points),
                    updated_at = now()
                WHERE slot
                RETURNING *
                "#,
            )
            .bind(data.heading.as_deref().map(str::trim))
            .bind(data.intro.as_deref())
            .bind(data.points.as_ref().map(Json))
            .fetch_one(pool)
            .await
        })
    }
}

impl Singleton for OurValues {
    const TABLE: &'static str = "our_values";

    type Update = OurValuesUpdate;

    fn apply<'a>(pool: &'a PgPool, data: &'a OurValuesUpdate) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, OurValues>(
                r#"
                UPDATE our_values
                SET
                    heading = COALESCE($1, heading),
                    intro = COALESCE($2, intro),
                    "values" = COALESCE($3, "values"),
                    updated_at = now()
                WHERE slot
                RETURNING *
                "#,
            )
            .bind(data.heading.as_deref().map(str::trim))
            .bind(data.intro.as_deref())
            .bind(data.values.as_ref().map(Json))
            .fetch_one(pool)
            .await
        })
    }
}
