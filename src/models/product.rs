use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{
    derived_slug, non_negative, not_blank, nullable, required, slug, Validate, ValidationError,
};

/// A catalogue entry. `category_id` points at a [`super::ProductCategory`] but is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCreate {
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub category_id: Option<Uuid>,
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

fn features(items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError("features must not contain blank entries".to_string()));
    }
    Ok(())
}

impl Validate for ProductCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        if self.category_id.is_none() {
            return Err(ValidationError("category_id is required".to_string()));
        }
        derived_slug(self.slug.as_deref(), "name", &self.name)?;
        features(&self.features)?;
        non_negative("display_order", self.display_order)
    }
}

impl Validate for ProductUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", self.name.as_deref())?;
        not_blank("slug", self.slug.as_deref())?;
        slug(self.slug.as_deref())?;
        if let Some(items) = &self.features {
            features(items)?;
        }
        non_negative("display_order", self.display_order)
    }
}
