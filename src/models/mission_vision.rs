use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{not_blank, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MissionVision {
    pub id: Uuid,
    pub mission_title: String,
    pub mission_text: String,
    pub vision_title: String,
    pub vision_text: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionVisionUpdate {
    pub mission_title: Option<String>,
    pub mission_text: Option<String>,
    pub vision_title: Option<String>,
    pub vision_text: Option<String>,
}

impl Validate for MissionVisionUpdate {
    fn validate(&self) -> Result<(), ValidationError> {
        not_blank("mission_title", self.mission_title.as_deref())?;
        not_blank("mission_text", self.mission_text.as_deref())?;
        not_blank("vision_title", self.vision_title.as_deref())?;
        not_blank("vision_text", self.vision_text.as_deref())
    }
}
