use actix_web::{web, HttpResponse};

use packsite::db::{self, Singleton};
use packsite::models::{About, MissionVision, OurValues, Validate, WhyChooseUs};

use crate::web::response::{ok, ApiError};
use crate::web::session::AdminClaims;
use crate::web::state::AppState;

/// Public read; the first read creates the document with its default copy.
pub async fn public_get<S: Singleton>(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let doc = db::get_or_create::<S>(&state.pool).await?;
    Ok(ok(doc))
}

pub async fn admin_get<S: Singleton>(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let doc = db::get_or_create::<S>(&state.pool).await?;
    Ok(ok(doc))
}

pub async fn admin_update<S: Singleton>(
    AdminClaims(admin): AdminClaims,
    state: web::Data<AppState>,
    payload: web::Json<S::Update>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let doc = db::update_singleton::<S>(&state.pool, &payload).await?;
    log::info!("{} updated by {}", S::TABLE, admin.email);

    Ok(ok(doc))
}

fn document<S: Singleton>(cfg: &mut web::ServiceConfig, segment: &str) {
    cfg.route(&format!("/api/{segment}"), web::get().to(public_get::<S>))
        .service(
            web::resource(format!("/api/admin/{segment}"))
                .route(web::get().to(admin_get::<S>))
                .route(web::put().to(admin_update::<S>)),
        );
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    document::<About>(cfg, "about");
    document::<MissionVision>(cfg, "mission-vision");
    document::<WhyChooseUs>(cfg, "why-choose-us");
    document::<OurValues>(cfg, "our-values");
}
