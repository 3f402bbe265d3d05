use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{
    derived_slug, non_negative, not_blank, nullable, required, slug, Validate, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Industry {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryCreate {
    #[serde(default)]
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndustryUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl Validate for IndustryCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        derived_slug(self.slug.as_deref(), "name", &self.name)?;
        non_negative("display_order", self.display_order)
    }
}

impl Validate for IndustryUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", self.name.as_deref())?;
        not_blank("slug", self.slug.as_deref())?;
        slug(self.slug.as_deref())?;
        non_negative("display_order", self.display_order)
    }
}
