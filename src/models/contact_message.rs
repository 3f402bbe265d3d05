use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{email, max_len, required, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessageCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl Validate for ContactMessageCreate {
    fn validate(&self) -> Result<(), ValidationError> {
        required("name", &self.name)?;
        required("email", &self.email)?;
        email("email", Some(&self.email))?;
        required("message", &self.message)?;
        max_len("name", Some(&self.name), 200)?;
        max_len("phone", self.phone.as_deref(), 40)?;
        max_len("company", self.company.as_deref(), 200)?;
        max_len("message", Some(&self.message), 5000)
    }
}
