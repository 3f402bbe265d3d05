use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{non_negative, not_blank, nullable, required, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub logo_url: String,
    pub website_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
    pub website_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub website_url: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl Validate for ClientCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("logo_url", &self.logo_url)?;
        non_negative("display_order", self.display_order)
    }
}

impl Validate for ClientUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", self.name.as_deref())?;
        not_blank("logo_url", self.logo_url.as_deref())?;
        non_negative("display_order", self.display_order)
    }
}
