use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{max_len, non_negative, not_blank, nullable, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct About {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    pub image_url: Option<String>,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub happy_clients: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AboutUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub years_experience: Option<i32>,
    pub projects_completed: Option<i32>,
    pub happy_clients: Option<i32>,
}

impl Validate for AboutUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("title", self.title.as_deref())?;
        max_len("title", self.title.as_deref(), 200)?;
        max_len("body", self.body.as_deref(), 20_000)?;
        non_negative("years_experience", self.years_experience)?;
        non_negative("projects_completed", self.projects_completed)?;
        non_negative("happy_clients", self.happy_clients)
    }
}
