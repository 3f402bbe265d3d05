use serde::{Deserialize, Deserializer};

/// Deserializes a nullable patch field: a missing key stays `None` (via `#[serde(default)]`),
/// an explicit `null` becomes `Some(None)` and clears the column.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// The value a nullable patch field sets, if any.
pub(crate) fn patched(value: &Option<Option<String>>) -> Option<&str> {
    value.as_ref().and_then(Option::as_deref)
}

#[cfg(test)]
mod tests {
    use crate::models::SliderUpdate;

    #[test]
    fn null_clears_and_absent_keeps() {
        let patch: SliderUpdate =
            serde_json::from_str(r#"{ "button_link": null, "subtitle": "Now shipping" }"#).unwrap();

        assert_eq!(patch.button_link, Some(None));
        assert_eq!(patch.subtitle, Some(Some("Now shipping".to_string())));
        assert_eq!(patch.button_text, None);
        assert_eq!(patch.title, None);
    }
}
