use sqlx::PgPool;
use uuid::Uuid;

use crate::common::ResourceError;
use crate::models::{Admin, AdminCreate};

pub async fn create_admin(pool: &PgPool, data: &AdminCreate) -> Result<Admin, ResourceError> {
    sqlx::query_as::<_, Admin>(
        r#"
        INSERT INTO admins (email, password_hash)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(data.email.trim().to_lowercase())
    .bind(&data.password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| ResourceError::from_write("Admin", e))
}

/// Emails are stored lowercased; lookups match case-insensitively.
pub async fn get_admin_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>(r#"SELECT * FROM admins WHERE email = $1"#)
        .bind(email.trim().to_lowercase())
        .fetch_optional(pool)
        .await
}

pub async fn get_admin_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Admin>, sqlx::Error> {
    sqlx::query_as::<_, Admin>(r#"SELECT * FROM admins WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn count_admins(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM admins"#)
        .fetch_one(pool)
        .await
}

pub async fn update_admin_password(pool: &PgPool, id: Uuid, password_hash: &str) -> Result<(), ResourceError> {
    let result = sqlx::query(
        r#"
        UPDATE admins
        SET password_hash = $1, updated_at = now()
        WHERE id = $2
        "#,
    )
    .bind(password_hash)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ResourceError::NotFound("Admin"));
    }
    Ok(())
}
