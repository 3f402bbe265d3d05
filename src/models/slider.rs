use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{max_len, non_negative, not_blank, nullable, required, Validate, ValidationError};

/// A hero banner on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Slider {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SliderCreate {
    #[serde(default)]
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub image_url: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SliderUpdate {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub subtitle: Option<Option<String>>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub button_text: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub button_link: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl Validate for SliderCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("title", &self.title)?;
        required("image_url", &self.image_url)?;
        max_len("title", Some(&self.title), 200)?;
        non_negative("display_order", self.display_order)
    }
}

impl Validate for SliderUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("title", self.title.as_deref())?;
        not_blank("image_url", self.image_url.as_deref())?;
        max_len("title", self.title.as_deref(), 200)?;
        non_negative("display_order", self.display_order)
    }
}
