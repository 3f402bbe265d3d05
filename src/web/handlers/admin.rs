use actix_web::{get, web, HttpRequest, Responder};
use sqlx::PgPool;

use packsite::db::{self, Resource};
use packsite::models::{
    Client, Industry, Product, ProductCategory, Service, Slider, TeamMember,
};

use crate::web::helpers::{render_loaded, require_admin_page};
use crate::web::state::AppState;
use crate::web::templates::{AdminDashboardTemplate, ResourceCount};

const RECENT_MESSAGES: usize = 10;

async fn tally<R: Resource>(pool: &PgPool, endpoint: &'static str) -> Result<ResourceCount, sqlx::Error> {
    Ok(ResourceCount {
        label: R::LABEL,
        endpoint,
        count: db::count::<R>(pool).await?,
    })
}

async fn load_dashboard(pool: &PgPool, email: String) -> Result<Option<AdminDashboardTemplate>, sqlx::Error> {
    let counts = vec![
        tally::<Slider>(pool, "/api/admin/sliders").await?,
        tally::<Service>(pool, "/api/admin/services").await?,
        tally::<Industry>(pool, "/api/admin/industries").await?,
        tally::<ProductCategory>(pool, "/api/admin/product-categories").await?,
        tally::<Product>(pool, "/api/admin/products").await?,
        tally::<Client>(pool, "/api/admin/clients").await?,
        tally::<TeamMember>(pool, "/api/admin/team").await?,
    ];

    let unread = db::count_unread_contact_messages(pool).await?;
    let mut messages = db::list_contact_messages(pool, true).await?;
    messages.truncate(RECENT_MESSAGES);

    Ok(Some(AdminDashboardTemplate {
        email,
        counts,
        unread,
        messages,
    }))
}

#[get("/admin")]
pub async fn dashboard(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let claims = match require_admin_page(&req, &state) {
        Ok(claims) => claims,
        Err(redirect) => return redirect,
    };

    render_loaded(load_dashboard(&state.pool, claims.email).await)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard);
}

#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};

    use super::*;
    use crate::web::handlers::test_support::test_state;

    #[actix_web::test]
    async fn dashboard_redirects_without_session() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/admin/login");
    }
}
