#![allow(dead_code)]

use uuid::Uuid;

use packsite::models::*;

pub fn slider(title: &str, display_order: i32, is_active: bool) -> SliderCreate {
    SliderCreate {
        title: title.to_string(),
        subtitle: Some("Protective packaging for heavy freight".to_string()),
        image_url: format!("/uploads/{}.jpg", title.to_lowercase().replace(' ', "-")),
        button_text: Some("Get a quote".to_string()),
        button_link: Some("/contact".to_string()),
        display_order: Some(display_order),
        is_active: Some(is_active),
    }
}

pub fn client(name: &str) -> ClientCreate {
    ClientCreate {
        name: name.to_string(),
        logo_url: "/uploads/logo.png".to_string(),
        website_url: Some("https://example.com".to_string()),
        display_order: None,
        is_active: None,
    }
}

pub fn team_member(name: &str, position: &str) -> TeamMemberCreate {
    TeamMemberCreate {
        name: name.to_string(),
        position: position.to_string(),
        bio: None,
        image_url: None,
        email: None,
        linkedin_url: None,
        display_order: None,
        is_active: None,
    }
}

pub fn service(title: &str) -> ServiceCreate {
    ServiceCreate {
        title: title.to_string(),
        slug: None,
        short_description: format!("{title} for export shipments"),
        description: None,
        icon: None,
        image_url: None,
        features: vec!["ISPM-15 compliant".to_string(), "On-site packing".to_string()],
        display_order: None,
        is_active: None,
    }
}

pub fn industry(name: &str, is_active: bool) -> IndustryCreate {
    IndustryCreate {
        name: name.to_string(),
        slug: None,
        description: Some(format!("Packaging for the {name} sector")),
        icon: None,
        image_url: None,
        display_order: None,
        is_active: Some(is_active),
    }
}

pub fn category(name: &str) -> ProductCategoryCreate {
    ProductCategoryCreate {
        name: name.to_string(),
        slug: None,
        description: None,
        image_url: None,
        display_order: None,
        is_active: None,
    }
}

pub fn product(category_id: Uuid, name: &str, is_active: bool) -> ProductCreate {
    ProductCreate {
        category_id: Some(category_id),
        name: name.to_string(),
        slug: None,
        description: None,
        features: vec![],
        image_url: None,
        display_order: None,
        is_active: Some(is_active),
    }
}

pub fn contact_message(name: &str) -> ContactMessageCreate {
    ContactMessageCreate {
        name: name.to_string(),
        email: format!("{}@buyer.example", name.to_lowercase()),
        phone: Some("  ".to_string()),
        company: Some("Buyer Ltd".to_string()),
        message: "Please quote 200 heat-treated pallets.".to_string(),
    }
}

pub fn highlight(title: &str) -> Highlight {
    Highlight {
        title: title.to_string(),
        description: format!("{title} on every order"),
        icon: None,
    }
}
