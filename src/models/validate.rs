use thiserror::Error;

/// A payload rejected before it reaches the database. The message names the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub(crate) fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(format!("{field} is required")));
    }
    Ok(())
}

/// For partial updates: absent is fine, present-but-blank is not.
pub(crate) fn not_blank(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) => required(field, v),
        None => Ok(()),
    }
}

pub(crate) fn max_len(field: &str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ValidationError(format!(
            "{field} must be at most {max} characters"
        ))),
        _ => Ok(()),
    }
}

pub(crate) fn slug(value: Option<&str>) -> Result<(), ValidationError> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) if !crate::common::is_valid_slug(s) => Err(ValidationError(
            "slug may only contain lowercase letters, digits, '-' and '_'".to_string(),
        )),
        _ => Ok(()),
    }
}

/// On create a blank slug is derived from `source`; that derivation must leave something behind.
pub(crate) fn derived_slug(
    explicit: Option<&str>,
    source_field: &str,
    source: &str,
) -> Result<(), ValidationError> {
    slug(explicit)?;
    if crate::common::resolve_slug(explicit, source).is_empty() {
        return Err(ValidationError(format!(
            "slug could not be derived from {source_field}; supply one"
        )));
    }
    Ok(())
}

pub(crate) fn non_negative(field: &str, value: Option<i32>) -> Result<(), ValidationError> {
    match value {
        Some(v) if v < 0 => Err(ValidationError(format!("{field} must not be negative"))),
        _ => Ok(()),
    }
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();

    if email.is_empty() || email.len() > 254 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

pub(crate) fn email(field: &str, value: Option<&str>) -> Result<(), ValidationError> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(v) if !is_valid_email(v) => {
            Err(ValidationError(format!("{field} must be a valid email address")))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_slug_needs_usable_source() {
        assert!(derived_slug(None, "name", "Stretch Film").is_ok());
        assert!(derived_slug(Some("stretch-film"), "name", "***").is_ok());

        let err = derived_slug(None, "name", "***").unwrap_err();
        assert_eq!(err.0, "slug could not be derived from name; supply one");
        assert!(derived_slug(Some("  "), "title", "¿¿").is_err());
    }

    #[test]
    fn derived_slug_still_checks_explicit_format() {
        assert!(derived_slug(Some("Bad Slug"), "name", "Good Name").is_err());
    }
}
