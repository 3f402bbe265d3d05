use sqlx::PgPool;
use std::sync::Arc;

use packsite::services::{BlobStore, TokenManager};

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: Arc<TokenManager>,
    pub blobs: Arc<dyn BlobStore>,
    pub rate_limiter: Arc<RateLimiter>,
    pub cookie_secure: bool,
    pub upload_max_bytes: usize,
    /// Take the client address from forwarding headers; only safe behind a reverse proxy.
    pub trust_proxy: bool,
}
