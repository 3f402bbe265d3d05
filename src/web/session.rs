use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use packsite::services::{Claims, TokenManager};

use crate::web::response::ApiError;
use crate::web::state::AppState;

pub const TOKEN_COOKIE: &str = "admin_token";

/// Token from the `admin_token` cookie, falling back to an `Authorization: Bearer` header.
pub fn request_token(req: &HttpRequest) -> Option<String> {
    let cookie_val = req
        .cookie(TOKEN_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty());

    if cookie_val.is_some() {
        return cookie_val;
    }

    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn verify_request(req: &HttpRequest, tokens: &TokenManager) -> Option<Claims> {
    let token = request_token(req)?;

    match tokens.decode(&token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            log::debug!("Rejected admin token: {}", e);
            None
        }
    }
}

/// Extractor for admin-only handlers. Rejects with 401 before the body is read.
pub struct AdminClaims(pub Claims);

impl FromRequest for AdminClaims {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.app_data::<web::Data<AppState>>() {
            Some(state) => verify_request(req, &state.tokens)
                .map(AdminClaims)
                .ok_or(ApiError::Unauthorized),
            None => Err(ApiError::internal("Admin check", "application state missing")),
        };

        ready(result)
    }
}

pub fn session_cookie(token: String, max_age_hours: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(TOKEN_COOKIE, token)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::hours(max_age_hours))
        .finish()
}

pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build(TOKEN_COOKIE, "")
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}
