use sqlx::PgPool;
use uuid::Uuid;

use crate::common::ResourceError;
use crate::models::{ContactMessage, ContactMessageCreate};

pub async fn create_contact_message(
    pool: &PgPool,
    data: &ContactMessageCreate,
) -> Result<ContactMessage, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        r#"
        INSERT INTO contact_messages (name, email, phone, company, message)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(data.name.trim())
    .bind(data.email.trim())
    .bind(data.phone.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .bind(data.company.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .bind(data.message.trim())
    .fetch_one(pool)
    .await
}

/// Newest first.
pub async fn list_contact_messages(
    pool: &PgPool,
    unread_only: bool,
) -> Result<Vec<ContactMessage>, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        r#"
        SELECT *
        FROM contact_messages
        WHERE NOT (is_read AND $1)
        ORDER BY created_at DESC
        "#,
    )
    .bind(unread_only)
    .fetch_all(pool)
    .await
}

pub async fn count_unread_contact_messages(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(r#"SELECT COUNT(*) FROM contact_messages WHERE NOT is_read"#)
        .fetch_one(pool)
        .await
}

pub async fn mark_contact_message_read(pool: &PgPool, id: Uuid) -> Result<ContactMessage, ResourceError> {
    sqlx::query_as::<_, ContactMessage>(
        r#"
        UPDATE contact_messages
        SET is_read = TRUE
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(ResourceError::NotFound("Contact message"))
}

pub async fn delete_contact_message(pool: &PgPool, id: Uuid) -> Result<(), ResourceError> {
    let result = sqlx::query(r#"DELETE FROM contact_messages WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ResourceError::NotFound("Contact message"));
    }
    Ok(())
}
