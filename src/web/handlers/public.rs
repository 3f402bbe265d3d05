use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use sqlx::PgPool;

use packsite::db;
use packsite::models::{
    About, Client, ContactMessageCreate, Industry, MissionVision, OurValues, Product,
    ProductCategory, Service, Slider, TeamMember, Validate, WhyChooseUs,
};

use crate::web::forms::{CategoryQuery, ContactForm, ContactQuery};
use crate::web::handlers::contact::{CONTACT_LIMIT, CONTACT_WINDOW};
use crate::web::helpers::{excerpt, not_found_page, render, render_loaded, render_status, see_other};
use crate::web::response::ApiError;
use crate::web::security::client_key;
use crate::web::state::AppState;
use crate::web::templates::{
    AboutTemplate, ContactTemplate, HomeTemplate, IndustriesTemplate, IndustryDetailTemplate,
    ProductDetailTemplate, ProductsTemplate, ServiceDetailTemplate, ServicesTemplate,
};

const HOME_SERVICES: usize = 6;
const HOME_INDUSTRIES: usize = 8;
const RELATED: usize = 3;

async fn load_home(pool: &PgPool) -> Result<Option<HomeTemplate>, sqlx::Error> {
    let sliders = db::find_all::<Slider>(pool, true).await?;
    let mut services = db::find_all::<Service>(pool, true).await?;
    services.truncate(HOME_SERVICES);
    let mut industries = db::find_all::<Industry>(pool, true).await?;
    industries.truncate(HOME_INDUSTRIES);
    let clients = db::find_all::<Client>(pool, true).await?;
    let about = db::get_or_create::<About>(pool).await?;
    let why = db::get_or_create::<WhyChooseUs>(pool).await?;

    Ok(Some(HomeTemplate {
        about_excerpt: excerpt(&about.body, 320),
        sliders,
        services,
        industries,
        clients,
        about,
        why_heading: why.heading,
        why_intro: why.intro,
        why_points: why.points.0,
    }))
}

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    render_loaded(load_home(&state.pool).await)
}

#[get("/services")]
pub async fn services_page(state: web::Data<AppState>) -> impl Responder {
    let loaded = db::find_all::<Service>(&state.pool, true)
        .await
        .map(|services| Some(ServicesTemplate { services }));

    render_loaded(loaded)
}

async fn load_service(pool: &PgPool, slug: &str) -> Result<Option<ServiceDetailTemplate>, sqlx::Error> {
    let Some(service) = db::find_by_slug::<Service>(pool, slug).await? else {
        return Ok(None);
    };

    let others = db::find_all::<Service>(pool, true)
        .await?
        .into_iter()
        .filter(|other| other.id != service.id)
        .take(RELATED)
        .collect();

    Ok(Some(ServiceDetailTemplate { service, others }))
}

#[get("/services/{slug}")]
pub async fn service_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    render_loaded(load_service(&state.pool, &path).await)
}

#[get("/industries")]
pub async fn industries_page(state: web::Data<AppState>) -> impl Responder {
    let loaded = db::find_all::<Industry>(&state.pool, true)
        .await
        .map(|industries| Some(IndustriesTemplate { industries }));

    render_loaded(loaded)
}

async fn load_industry(pool: &PgPool, slug: &str) -> Result<Option<IndustryDetailTemplate>, sqlx::Error> {
    let Some(industry) = db::find_by_slug::<Industry>(pool, slug).await? else {
        return Ok(None);
    };

    let mut services = db::find_all::<Service>(pool, true).await?;
    services.truncate(HOME_SERVICES);

    Ok(Some(IndustryDetailTemplate { industry, services }))
}

#[get("/industries/{slug}")]
pub async fn industry_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    render_loaded(load_industry(&state.pool, &path).await)
}

/// Catalogue, optionally narrowed by category slug. An unknown slug is a 404.
async fn load_products(pool: &PgPool, category: Option<&str>) -> Result<Option<ProductsTemplate>, sqlx::Error> {
    let categories = db::find_all::<ProductCategory>(pool, true).await?;

    let (products, selected) = match category.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => {
            let Some(found) = categories.iter().find(|c| c.slug == slug) else {
                return Ok(None);
            };
            (
                db::list_products_in_category(pool, found.id, true).await?,
                found.slug.clone(),
            )
        }
        None => (db::find_all::<Product>(pool, true).await?, String::new()),
    };

    Ok(Some(ProductsTemplate {
        categories,
        products,
        selected,
    }))
}

#[get("/products")]
pub async fn products_page(state: web::Data<AppState>, query: web::Query<CategoryQuery>) -> impl Responder {
    render_loaded(load_products(&state.pool, query.category.as_deref()).await)
}

async fn load_product(pool: &PgPool, slug: &str) -> Result<Option<ProductDetailTemplate>, sqlx::Error> {
    let Some(product) = db::find_by_slug::<Product>(pool, slug).await? else {
        return Ok(None);
    };
    let category = db::find_by_id::<ProductCategory>(pool, product.category_id, true).await?;

    Ok(Some(ProductDetailTemplate { product, category }))
}

#[get("/products/{slug}")]
pub async fn product_detail(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    render_loaded(load_product(&state.pool, &path).await)
}

async fn load_about(pool: &PgPool) -> Result<Option<AboutTemplate>, sqlx::Error> {
    let about = db::get_or_create::<About>(pool).await?;
    let mission = db::get_or_create::<MissionVision>(pool).await?;
    let values = db::get_or_create::<OurValues>(pool).await?;
    let team = db::find_all::<TeamMember>(pool, true).await?;

    Ok(Some(AboutTemplate {
        about,
        mission,
        values_heading: values.heading,
        values_intro: values.intro,
        values: values.values.0,
        team,
    }))
}

#[get("/about")]
pub async fn about_page(state: web::Data<AppState>) -> impl Responder {
    render_loaded(load_about(&state.pool).await)
}

#[get("/contact")]
pub async fn contact_form(query: web::Query<ContactQuery>) -> impl Responder {
    render(ContactTemplate {
        sent: query.sent == Some(1),
        error: None,
        form: ContactMessageCreate::default(),
    })
}

#[post("/contact")]
pub async fn contact_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ContactForm>,
) -> impl Responder {
    let message = ContactMessageCreate::from(form.into_inner());

    let rejected = |status: StatusCode, error: String, form: ContactMessageCreate| {
        render_status(
            status,
            ContactTemplate {
                sent: false,
                error: Some(error),
                form,
            },
        )
    };

    if let Err(e) = message.validate() {
        return rejected(StatusCode::BAD_REQUEST, e.0, message);
    }

    let limiter_key = client_key(&req, "contact", state.trust_proxy);
    if !state
        .rate_limiter
        .check_rate_limit(&limiter_key, CONTACT_LIMIT, CONTACT_WINDOW)
    {
        return rejected(
            StatusCode::TOO_MANY_REQUESTS,
            ApiError::TooManyRequests.to_string(),
            message,
        );
    }

    match db::create_contact_message(&state.pool, &message).await {
        Ok(stored) => {
            log::info!("Contact message {} received", stored.id);
            see_other("/contact?sent=1")
        }
        Err(e) => {
            log::error!("Failed to store contact message: {}", e);
            rejected(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Your message could not be sent. Please try again.".to_string(),
                message,
            )
        }
    }
}

/// Fallback for unmatched routes: JSON under `/api`, the 404 page elsewhere.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    if req.path().starts_with("/api/") {
        return actix_web::ResponseError::error_response(&ApiError::NotFound("Route"));
    }
    not_found_page()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(services_page)
        .service(service_detail)
        .service(industries_page)
        .service(industry_detail)
        .service(products_page)
        .service(product_detail)
        .service(about_page)
        .service(contact_form)
        .service(contact_submit);
}
