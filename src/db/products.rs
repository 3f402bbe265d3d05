use futures_util::future::BoxFuture;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Resource, Slugged};
use crate::common::resolve_slug;
use crate::models::{
    Product, ProductCategory, ProductCategoryCreate, ProductCategoryUpdate, ProductCreate,
    ProductUpdate,
};

impl Resource for ProductCategory {
    const TABLE: &'static str = "product_categories";
    const LABEL: &'static str = "Product category";

    type Create = ProductCategoryCreate;
    type Update = ProductCategoryUpdate;

    fn insert<'a>(
        pool: &'a PgPool,
        data: &'a ProductCategoryCreate,
    ) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, ProductCategory>(
                r#"
                INSERT INTO product_categories (name, slug, description, image_url, display_order, is_active)
                VALUES ($1, $2, $3, $4, COALESCE($5, 0), COALESCE($6, TRUE))
                RETURNING *
                "#,
            )
            .bind(data.name.trim())
            .bind(resolve_slug(data.slug.as_deref(), &data.name))
            .bind(data.description.as_deref())
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
        data: &'a ProductCategoryUpdate,
    ) -> BoxFuture<'a, Result<Option<Self>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, ProductCategory>(
                r#"
                UPDATE product_categories
                SET
                    name = COALESCE($1, name),
                    slug = COALESCE($2, slug),
                    description = CASE WHEN $3 THEN $4 ELSE description END,
                    image_url = CASE WHEN $5 THEN $6 ELSE image_url END,
                    display_order = COALESCE($7, display_order),
                    is_active = COALESCE($8, is_active),
                    updated_at = now()
                WHERE id = $9
                RETURNING *
                "#,
            )
            .bind(data.name.as_deref().map(str::trim))
            .bind(data.slug.as_deref().map(str::trim))
            .bind(data.description.is_some())
            .bind(data.description.as_ref().and_then(Option::as_deref))
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

impl Slugged for ProductCategory {}

impl Resource for Product {
    const TABLE: &'static str = "products";
    const LABEL: &'static str = "Product";

    type Create = ProductCreate;
    type Update = ProductUpdate;

    fn insert<'a>(pool: &'a PgPool, data: &'a ProductCreate) -> BoxFuture<'a, Result<Self, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Product>(
                r#"
                INSERT INTO products
                    (category_id, name, slug, description, features, image_url, display_order, is_active)
                VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0), COALESCE($8, TRUE))
                RETURNING *
                "#,
            )
            .bind(data.category_id)
            .bind(data.name.trim())
            .bind(resolve_slug(data.slug.as_deref(), &data.name))
            .bind(data.description.as_deref())
            .bind(&data.features)
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
        data: &'a ProductUpdate,
    ) -> BoxFuture<'a, Result<Option<Self>, sqlx::Error>> {
        Box::pin(async move {
            sqlx::query_as::<_, Product>(
                r#"
                UPDATE products
                SET
                    category_id = COALESCE($1, category_id),
                    name = COALESCE($2, name),
                    slug = COALESCE($3, slug),
                    description = CASE WHEN $4 THEN $5 ELSE description END,
                    features = COALESCE($6, features),
                    image_url = CASE WHEN $7 THEN $8 ELSE image_url END,
                    display_order = COALESCE($9, display_order),
                    is_active = COALESCE($10, is_active),
                    updated_at = now()
                WHERE id = $11
                RETURNING *
                "#,
            )
            .bind(data.category_id)
            .bind(data.name.as_deref().map(str::trim))
            .bind(data.slug.as_deref().map(str::trim))
            .bind(data.description.is_some())
            .bind(data.description.as_ref().and_then(Option::as_deref))
            .bind(data.features.as_ref())
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

impl Slugged for Product {}

/// Products filed under one category. The category itself is not checked.
pub async fn list_products_in_category(
    pool: &PgPool,
    category_id: Uuid,
    active_only: bool,
) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        SELECT *
        FROM products
        WHERE category_id = $1 AND (is_active OR NOT $2)
        ORDER BY display_order ASC, created_at ASC
        "#,
    )
    .bind(category_id)
    .bind(active_only)
    .fetch_all(pool)
    .await
}
