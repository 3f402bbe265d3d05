use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use super::{not_blank, validate_highlights, Highlight, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OurValues {
    pub id: Uuid,
    pub heading: String,
    pub intro: String,
    pub values: Json<Vec<Highlight>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OurValuesUpdate {
    pub heading: Option<String>,
    pub intro: Option<String>,
    pub values: Option<Vec<Highlight>>,
}

impl Validate for OurValuesUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("heading", self.heading.as_deref())?;
        validate_highlights("values", self.values.as_deref())
    }
}
