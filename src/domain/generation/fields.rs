//! Lenient field decoding for model-produced records.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accepts an identifier written either as a JSON string or a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

/// Treats `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Record {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        checked: bool,
    }

    #[test]
    fn accepts_string_ids() {
        let r: Record = serde_json::from_str(r#"{"id": "1-2"}"#).unwrap();
        assert_eq!(r.id, "1-2");
    }

    #[test]
    fn accepts_numeric_ids() {
        let r: Record = serde_json::from_str(r#"{"id": 12}"#).unwrap();
        assert_eq!(r.id, "12");
    }

    #[test]
    fn null_and_missing_flags_default_to_false() {
        let r: Record = serde_json::from_str(r#"{"id": 1, "checked": null}"#).unwrap();
        assert!(!r.checked);
        let r: Record = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(!r.checked);
    }
}
