use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{
    email, max_len, non_negative, not_blank, nullable, patched, required, Validate,
    ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMemberCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMemberUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub linkedin_url: Option<Option<String>>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl Validate for TeamMemberCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("position", &self.position)?;
        email("email", self.email.as_deref())?;
        max_len("bio", self.bio.as_deref(), 4000)?;
        non_negative("display_order", self.display_order)
    }
}

impl Validate for TeamMemberUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("name", self.name.as_deref())?;
        not_blank("position", self.position.as_deref())?;
        email("email", patched(&self.email))?;
        max_len("bio", patched(&self.bio), 4000)?;
        non_negative("display_order", self.display_order)
    }
}
