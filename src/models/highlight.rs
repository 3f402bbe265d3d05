use serde::{Deserialize, Serialize};

use super::{max_len, required, ValidationError};

/// One titled point on a list-style singleton page (values, reasons to choose us).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
}

pub(crate) fn validate_highlights(field: &str, items: Option<&[Highlight]>) -> Result<(), ValidationError> {
    for (i, item) in items.unwrap_or_default().iter().enumerate() {
        required(&format!("{field}[{i}].title"), &item.title)?;
        max_len(&format!("{field}[{i}].description"), Some(&item.description), 2000)?;
    }
    Ok(())
}
