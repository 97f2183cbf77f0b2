//! Deserializers shared by HTML form and JSON request bodies.
use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawKey {
    Number(i64),
    Text(String),
}

/// Accepts a JSON number, a numeric string, a blank string or nothing.
/// Blank strings come from empty `<input>` fields and count as absent.
pub fn optional_key<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawKey>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawKey::Number(value)) => Ok(Some(value)),
        Some(RawKey::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse::<i64>().map(Some).map_err(de::Error::custom)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "optional_key")]
        id: Option<i64>,
    }

    #[test]
    fn form_blank_is_absent() {
        let probe: Probe = serde_urlencoded::from_str("id=").unwrap();
        assert_eq!(probe.id, None);
    }

    #[test]
    fn form_digits_parse() {
        let probe: Probe = serde_urlencoded::from_str("id=12").unwrap();
        assert_eq!(probe.id, Some(12));
    }

    #[test]
    fn form_garbage_is_rejected() {
        assert!(serde_urlencoded::from_str::<Probe>("id=abc").is_err());
    }

    #[test]
    fn json_number_and_null() {
        let probe: Probe = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(probe.id, Some(7));
        let probe: Probe = serde_json::from_str(r#"{"id": null}"#).unwrap();
        assert_eq!(probe.id, None);
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.id, None);
    }
}
