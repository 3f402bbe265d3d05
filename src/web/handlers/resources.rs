use actix_web::{web, HttpResponse};
use uuid::Uuid;

use packsite::db::{self, Resource};
use packsite::models::{
    Client, Industry, Product, ProductCategory, Service, Slider, TeamMember, Validate,
};
use packsite::types::ProductsQuery;

use crate::web::response::{created, done, ok, ApiError};
use crate::web::session::AdminClaims;
use crate::web::state::AppState;

pub async fn public_list<R: Resource>(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let items = db::find_all::<R>(&state.pool, true).await?;
    Ok(ok(items))
}

pub async fn public_get<R: Resource>(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let item = db::find_by_id::<R>(&state.pool, path.into_inner(), true)
        .await?
        .ok_or(ApiError::NotFound(R::LABEL))?;
    Ok(ok(item))
}

/// Active products, optionally narrowed to one category.
pub async fn public_products(
    state: web::Data<AppState>,
    query: web::Query<ProductsQuery>,
) -> Result<HttpResponse, ApiError> {
    let products = match query.category {
        Some(category_id) => db::list_products_in_category(&state.pool, category_id, true).await?,
        None => db::find_all::<Product>(&state.pool, true).await?,
    };
    Ok(ok(products))
}

pub async fn admin_list<R: Resource>(
    _admin: AdminClaims,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let items = db::find_all::<R>(&state.pool, false).await?;
    Ok(ok(items))
}

pub async fn admin_get<R: Resource>(
    _admin: AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let item = db::find_by_id::<R>(&state.pool, path.into_inner(), false)
        .await?
        .ok_or(ApiError::NotFound(R::LABEL))?;
    Ok(ok(item))
}

pub async fn admin_create<R: Resource>(
    AdminClaims(admin): AdminClaims,
    state: web::Data<AppState>,
    payload: web::Json<R::Create>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let item = db::create::<R>(&state.pool, &payload).await?;
    log::info!("{} created by {}", R::LABEL, admin.email);

    Ok(created(item))
}

pub async fn admin_update<R: Resource>(
    AdminClaims(admin): AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<R::Update>,
) -> Result<HttpResponse, ApiError> {
    payload.validate()?;

    let id = path.into_inner();
    let item = db::update::<R>(&state.pool, id, &payload).await?;
    log::info!("{} {} updated by {}", R::LABEL, id, admin.email);

    Ok(ok(item))
}

pub async fn admin_delete<R: Resource>(
    AdminClaims(admin): AdminClaims,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    db::delete::<R>(&state.pool, id).await?;
    log::info!("{} {} deleted by {}", R::LABEL, id, admin.email);

    Ok(done(&format!("{} deleted", R::LABEL)))
}

/// Registers the admin CRUD routes and the public single-record route for `R`.
fn collection<R: Resource>(cfg: &mut web::ServiceConfig, segment: &str) {
    cfg.service(
        web::resource(format!("/api/admin/{segment}"))
            .route(web::get().to(admin_list::<R>))
            .route(web::post().to(admin_create::<R>)),
    )
    .service(
        web::resource(format!("/api/admin/{segment}/{{id}}"))
            .route(web::get().to(admin_get::<R>))
            .route(web::put().to(admin_update::<R>))
            .route(web::delete().to(admin_delete::<R>)),
    )
    .service(web::resource(format!("/api/{segment}/{{id}}")).route(web::get().to(public_get::<R>)));
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    collection::<Slider>(cfg, "sliders");
    collection::<Client>(cfg, "clients");
    collection::<TeamMember>(cfg, "team");
    collection::<ProductCategory>(cfg, "product-categories");
    collection::<Product>(cfg, "products");
    collection::<Service>(cfg, "services");
    collection::<Industry>(cfg, "industries");

    cfg.route("/api/sliders", web::get().to(public_list::<Slider>))
        .route("/api/clients", web::get().to(public_list::<Client>))
        .route("/api/team", web::get().to(public_list::<TeamMember>))
        .route("/api/product-categories", web::get().to(public_list::<ProductCategory>))
        .route("/api/products", web::get().to(public_products))
        .route("/api/services", web::get().to(public_list::<Service>))
        .route("/api/industries", web::get().to(public_list::<Industry>));
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    use super::*;
    use crate::web::handlers::test_support::{admin_token, test_state};

    #[actix_web::test]
    async fn admin_routes_reject_missing_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::web::handlers::configure),
        )
        .await;

        for (method, uri) in [
            ("GET", "/api/admin/sliders"),
            ("POST", "/api/admin/clients"),
            ("PUT", "/api/admin/services/6c1d4b2a-6e5e-4c1a-9f0e-0d1c2b3a4f5e"),
            ("DELETE", "/api/admin/products/6c1d4b2a-6e5e-4c1a-9f0e-0d1c2b3a4f5e"),
        ] {
            let req = test::TestRequest::default()
                .method(method.parse().unwrap())
                .uri(uri)
                .set_json(json!({ "name": "ignored" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "success": false, "message": "Unauthorized" }));
        }
    }

    #[actix_web::test]
    async fn admin_routes_reject_bad_token() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(crate::web::handlers::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/sliders")
            .cookie(crate::web::session::session_cookie("forged.token.value".into(), 1, false))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_rejects_missing_required_fields() {
        let state = test_state();
        let token = admin_token(&state);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::web::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/sliders")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "title": "Export crates" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "image_url is required" }));
    }

    #[actix_web::test]
    async fn create_rejects_malformed_json() {
        let state = test_state();
        let token = admin_token(&state);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::web::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/industries")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(false));
    }

    #[actix_web::test]
    async fn update_rejects_blank_fields_and_bad_ids() {
        let state = test_state();
        let token = admin_token(&state);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::web::handlers::configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/admin/team/6c1d4b2a-6e5e-4c1a-9f0e-0d1c2b3a4f5e")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "name": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/admin/team/not-a-uuid")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn create_rejects_name_without_slug_characters() {
        let state = test_state();
        let token = admin_token(&state);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(crate::web::handlers::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/industries")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(json!({ "name": "***" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            json!("slug could not be derived from name; supply one")
        );
    }
}
