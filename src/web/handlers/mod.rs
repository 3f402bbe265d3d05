pub mod admin;
pub mod auth;
pub mod contact;
pub mod public;
pub mod resources;
pub mod singletons;
pub mod upload;

use actix_web::{error, web};

use crate::web::response::ApiError;

/// Configure all routes. The 404 page is installed separately as the default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {}", err);
        error::Error::from(ApiError::BadRequest(format!("Invalid request body: {err}")))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        error::Error::from(ApiError::BadRequest(format!("Invalid query string: {err}")))
    }))
    .app_data(
        web::PathConfig::default().error_handler(|_err, _req| error::Error::from(ApiError::NotFound("Record"))),
    );

    auth::configure(cfg);
    singletons::configure(cfg);
    contact::configure(cfg);
    upload::configure(cfg);
    resources::configure(cfg);
    admin::configure(cfg);
    public::configure(cfg);
}
