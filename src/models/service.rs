use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{
    derived_slug, max_len, non_negative, not_blank, nullable, required, slug, Validate,
    ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub features: Vec<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceCreate {
    #[serde(default)]
    pub title: String,
    pub slug: Option<String>,
    #[serde(default)]
    pub short_description: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceUpdate {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub icon: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl Validate for ServiceCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("title", &self.title)?;
        required("short_description", &self.short_description)?;
        max_len("short_description", Some(&self.short_description), 500)?;
        derived_slug(self.slug.as_deref(), "title", &self.title)?;
        non_negative("display_order", self.display_order)
    }
}

impl Validate for ServiceUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("title", self.title.as_deref())?;
        not_blank("short_description", self.short_description.as_deref())?;
        max_len("short_description", self.short_description.as_deref(), 500)?;
        not_blank("slug", self.slug.as_deref())?;
        slug(self.slug.as_deref())?;
        non_negative("display_order", self.display_order)
    }
}
