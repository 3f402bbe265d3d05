use askama::Template;

use packsite::models::{
    About, Client, ContactMessage, ContactMessageCreate, Highlight, Industry, MissionVision,
    Product, ProductCategory, Service, Slider, TeamMember,
};

#[derive(Template)]
#[template(path = "public/home.html")]
pub struct HomeTemplate {
    pub sliders: Vec<Slider>,
    pub services: Vec<Service>,
    pub industries: Vec<Industry>,
    pub clients: Vec<Client>,
    pub about: About,
    pub about_excerpt: String,
    pub why_heading: String,
    pub why_intro: String,
    pub why_points: Vec<Highlight>,
}

#[derive(Template)]
#[template(path = "public/services.html")]
pub struct ServicesTemplate {
    pub services: Vec<Service>,
}

#[derive(Template)]
#[template(path = "public/service.html")]
pub struct ServiceDetailTemplate {
    pub service: Service,
    pub others: Vec<Service>,
}

#[derive(Template)]
#[template(path = "public/industries.html")]
pub struct IndustriesTemplate {
    pub industries: Vec<Industry>,
}

#[derive(Template)]
#[template(path = "public/industry.html")]
pub struct IndustryDetailTemplate {
    pub industry: Industry,
    pub services: Vec<Service>,
}

#[derive(Template)]
#[template(path = "public/products.html")]
pub struct ProductsTemplate {
    pub categories: Vec<ProductCategory>,
    pub products: Vec<Product>,
    pub selected: String,
}

#[derive(Template)]
#[template(path = "public/product.html")]
pub struct ProductDetailTemplate {
    pub product: Product,
    pub category: Option<ProductCategory>,
}

#[derive(Template)]
#[template(path = "public/about.html")]
pub struct AboutTemplate {
    pub about: About,
    pub mission: MissionVision,
    pub values_heading: String,
    pub values_intro: String,
    pub values: Vec<Highlight>,
    pub team: Vec<TeamMember>,
}

#[derive(Template)]
#[template(path = "public/contact.html")]
pub struct ContactTemplate {
    pub sent: bool,
    pub error: Option<String>,
    pub form: ContactMessageCreate,
}

#[derive(Template)]
#[template(path = "public/not_found.html")]
pub struct NotFoundTemplate;

#[derive(Template)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
}

pub struct ResourceCount {
    pub label: &'static str,
    pub endpoint: &'static str,
    pub count: i64,
}

#[derive(Template)]
#[template(path = "admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub email: String,
    pub counts: Vec<ResourceCount>,
    pub unread: i64,
    pub messages: Vec<ContactMessage>,
}
