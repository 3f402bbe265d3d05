use std::time::Duration;

use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use packsite::db;
use packsite::models::{ContactMessageCreate, Validate};

use crate::web::response::{created, done, ok, ApiError};
use crate::web::security::client_key;
use crate::web::session::AdminClaims;
use crate::web::state::AppState;

/// Contact submissions allowed per client within `CONTACT_WINDOW`.
pub const CONTACT_LIMIT: usize = 10;
pub const CONTACT_WINDOW: Duration = Duration::from_secs(3600);

#[derive(Deserialize)]
pub struct MessagesQuery {
    #[serde(default)]
    pub unread: bool,
}

#[post("/api/contact")]
pub async fn submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<ContactMessageCreate>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let limiter_key = client_key(&req, "contact", state.trust_proxy);
    if !state
        .rate_limiter
        .check_rate_limit(&limiter_key, CONTACT_LIMIT, CONTACT_WINDOW)
    {
        return Err(ApiError::TooManyRequests);
    }

    let message = db::create_contact_message(&state.pool, &payload).await?;
    log::info!("Contact message {} received", message.id);

    Ok(created(message))
}

#[get("/api/admin/contact-messages")]
pub async fn list(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    query: web::Query<MessagesQuery>,
) -> Result<HttpResponse, ApiError> {
    let messages = db::list_contact_messages(&state.pool, query.unread).await?;
    Ok(ok(messages))
}

#[put("/api/admin/contact-messages/{id}/read")]
pub async fn mark_read(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let message = db::mark_contact_message_read(&state.pool, path.into_inner()).await?;
    Ok(ok(message))
}

#[delete("/api/admin/contact-messages/{id}")]
pub async fn remove(
    AdminClaims(admin): AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    db::delete_contact_message(&state.pool, id).await?;
    log::info!("Contact message {} deleted by {}", id, admin.email);

    Ok(done("Contact message deleted"))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit)
        .service(list)
        .service(mark_read)
        .service(remove);
}
