mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

use packsite::config::Settings;
use packsite::db::{self, Database};
use packsite::models::AdminCreate;
use packsite::services::{LocalBlobStore, PasswordManager, TokenManager};

use crate::web::middleware::SecurityHeaders;
use crate::web::security::{PasswordValidator, RateLimiter};
use crate::web::AppState;

/// Creates the first admin from `ADMIN_EMAIL`/`ADMIN_PASSWORD` when the table is empty.
async fn bootstrap_admin(pool: &PgPool, settings: &Settings) -> Result<(), String> {
    let Some((email, password)) = &settings.bootstrap_admin else {
        return Ok(());
    };

    if db::count_admins(pool).await.map_err(|e| e.to_string())? > 0 {
        return Ok(());
    }

    PasswordValidator::validate(password)?;
    let password_hash = PasswordManager::hash_password(password).map_err(|e| e.to_string())?;

    let admin = db::create_admin(
        pool,
        &AdminCreate {
            email: email.clone(),
            password_hash,
        },
    )
    .await
    .map_err(|e| e.to_string())?;

    log::info!("Created initial admin {}", admin.email);
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let settings = Settings::from_env().expect("Invalid configuration");

    let db = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database / run migrations");

    if let Err(e) = bootstrap_admin(&db.pool, &settings).await {
        log::error!("Could not create initial admin: {}", e);
    }

    let blobs = LocalBlobStore::new(settings.upload_dir.clone(), settings.upload_base_url.clone());
    std::fs::create_dir_all(blobs.root())?;

    let state = Data::new(AppState {
        pool: db.pool.clone(),
        tokens: Arc::new(TokenManager::new(
            settings.jwt_secret.as_bytes(),
            chrono::Duration::hours(settings.token_ttl_hours),
        )),
        blobs: Arc::new(blobs),
        rate_limiter: Arc::new(RateLimiter::new()),
        cookie_secure: settings.cookie_secure,
        upload_max_bytes: settings.upload_max_bytes,
        trust_proxy: settings.trust_proxy,
    });

    // Only a relative base URL is served from here; an absolute one points at another host.
    let upload_mount = settings
        .upload_base_url
        .starts_with('/')
        .then(|| settings.upload_base_url.clone());
    let upload_dir = settings.upload_dir.clone();

    log::info!("Listening on {}", settings.bind_addr);

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(SecurityHeaders)
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true));

        if let Some(mount) = &upload_mount {
            app = app.service(Files::new(mount, &upload_dir));
        }

        app.default_service(actix_web::web::to(web::handlers::public::not_found))
    })
    .bind(&settings.bind_addr)?
    .run()
    .await
}
