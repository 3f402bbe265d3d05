use std::time::Duration;

use actix_web::{get, post, put, web, HttpRequest, HttpResponse, Responder};

use packsite::db;
use packsite::models::Admin;
use packsite::services::PasswordManager;
use packsite::types::{AdminPublic, LoginRequest, LoginResponse, PasswordChangeRequest};

use crate::web::forms::{AuthQuery, LoginForm};
use crate::web::helpers::{render, see_other};
use crate::web::response::{done, ok, ApiError};
use crate::web::security::{client_key, PasswordValidator};
use crate::web::session::{removal_cookie, session_cookie, verify_request, AdminClaims};
use crate::web::state::AppState;
use crate::web::templates::AdminLoginTemplate;

/// Login attempts allowed per client within `LOGIN_WINDOW`.
pub const LOGIN_LIMIT: usize = 5;
pub const LOGIN_WINDOW: Duration = Duration::from_secs(300);

/// Checks credentials and mints a token. Shared by the JSON API and the HTML login form.
async fn authenticate(
    state: &AppState,
    req: &HttpRequest,
    email: &str,
    password: &str,
) -> Result<(Admin, String), ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest("Email and password are required".to_string()));
    }

    let limiter_key = client_key(req, "login", state.trust_proxy);
    if !state
        .rate_limiter
        .check_rate_limit(&limiter_key, LOGIN_LIMIT, LOGIN_WINDOW)
    {
        log::warn!("Login rate limit hit for {}", limiter_key);
        return Err(ApiError::TooManyRequests);
    }

    let admin = db::get_admin_by_email(&state.pool, email).await?;

    if !PasswordManager::verify_credentials(password, admin.as_ref().map(|a| a.password_hash.as_str())) {
        log::info!("Failed login for {}", email);
        return Err(ApiError::InvalidCredentials);
    }
    let Some(admin) = admin else {
        return Err(ApiError::InvalidCredentials);
    };

    let token = state
        .tokens
        .issue(admin.id, &admin.email)
        .map_err(|e| ApiError::internal("Token signing", e))?;

    state.rate_limiter.reset(&limiter_key);
    log::info!("Admin {} signed in", admin.email);

    Ok((admin, token))
}

#[post("/api/auth/login")]
pub async fn api_login(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let (admin, token) = authenticate(&state, &req, &payload.email, &payload.password).await?;

    let cookie = session_cookie(token.clone(), state.tokens.ttl().num_hours(), state.cookie_secure);
    let mut resp = ok(LoginResponse {
        admin: AdminPublic::from(&admin),
        token,
    });
    resp.add_cookie(&cookie)
        .map_err(|e| ApiError::internal("Session cookie", e))?;

    Ok(resp)
}

#[post("/api/auth/logout")]
pub async fn api_logout(state: web::Data<AppState>) -> impl Responder {
    let mut resp = done("Logged out");
    if let Err(e) = resp.add_removal_cookie(&removal_cookie(state.cookie_secure)) {
        log::error!("Failed to clear session cookie: {}", e);
    }
    resp
}

/// The admin behind the current token; a token for a deleted admin is rejected.
#[get("/api/auth/verify")]
pub async fn api_verify(
    AdminClaims(claims): AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let admin = db::get_admin_by_id(&state.pool, claims.sub)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    Ok(ok(AdminPublic::from(&admin)))
}

#[put("/api/admin/password")]
pub async fn change_password(
    AdminClaims(claims): AdminClaims,
    state: web::Data<AppState>,
    payload: web::Json<PasswordChangeRequest>,
) -> Result<HttpResponse, ApiError> {
    if payload.current_password.is_empty() || payload.new_password.is_empty() {
        return Err(ApiError::BadRequest(
            "current_password and new_password are required".to_string(),
        ));
    }
    PasswordValidator::validate(&payload.new_password).map_err(ApiError::BadRequest)?;

    let admin = db::get_admin_by_id(&state.pool, claims.sub)
        .await?
        .ok_or(ApiError::Unauthorized)?;

    if !PasswordManager::verify_credentials(&payload.current_password, Some(&admin.password_hash)) {
        return Err(ApiError::BadRequest("Current password is incorrect".to_string()));
    }

    let hash = PasswordManager::hash_password(&payload.new_password)
        .map_err(|e| ApiError::internal("Password hashing", e))?;
    db::update_admin_password(&state.pool, admin.id, &hash).await?;
    log::info!("Admin {} changed their password", admin.email);

    Ok(done("Password updated"))
}

#[get("/admin/login")]
pub async fn login_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<AuthQuery>,
) -> impl Responder {
    if verify_request(&req, &state.tokens).is_some() {
        return see_other("/admin");
    }

    let error = query.error.as_deref().map(|code| {
        match code {
            "missing" => "Email and password are required",
            "invalid" => "Invalid email or password",
            "rate_limit" => "Too many login attempts. Please try again later.",
            _ => "An internal error occurred. Please try again.",
        }
        .to_string()
    });

    render(AdminLoginTemplate { error })
}

#[post("/admin/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let (_, token) = match authenticate(&state, &req, &form.email, &form.password).await {
        Ok(found) => found,
        Err(e) => {
            let code = match e {
                ApiError::BadRequest(_) => "missing",
                ApiError::InvalidCredentials => "invalid",
                ApiError::TooManyRequests => "rate_limit",
                _ => "internal",
            };
            return see_other(&format!("/admin/login?error={code}"));
        }
    };

    HttpResponse::SeeOther()
        .cookie(session_cookie(token, state.tokens.ttl().num_hours(), state.cookie_secure))
        .insert_header(("Location", "/admin"))
        .finish()
}

#[get("/admin/logout")]
pub async fn logout(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::SeeOther()
        .cookie(removal_cookie(state.cookie_secure))
        .insert_header(("Location", "/admin/login"))
        .finish()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_login)
        .service(api_logout)
        .service(api_verify)
        .service(change_password)
        .service(login_form)
        .service(login_submit)
        .service(logout);
}
