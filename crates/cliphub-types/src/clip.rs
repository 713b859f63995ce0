use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque clip identifier assigned by the hub.
///
/// The backend serializes ids as JSON numbers today, but the client never
/// inspects them: an id is only compared for equality and spliced into URLs.
/// Accepting either a number or a string keeps the client decoupled from the
/// backend's storage choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipId(String);

impl ClipId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClipId {
    fn from(value: &str) -> Self {
        ClipId(value.to_string())
    }
}

impl From<String> for ClipId {
    fn from(value: String) -> Self {
        ClipId(value)
    }
}

impl Serialize for ClipId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ClipId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = ClipId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a clip id (string or integer)")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ClipId, E> {
                Ok(ClipId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ClipId, E> {
                Ok(ClipId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ClipId, E> {
                Ok(ClipId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A stored text snippet, as returned by the hub.
///
/// Timestamps are kept as the raw strings the backend sent; parsing only
/// happens at display time so an unrecognized format degrades to showing the
/// raw value instead of dropping the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    pub id: ClipId,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Clip {
    /// Timestamp to show for this clip: creation time, falling back to the
    /// last update when the backend left `created_at` empty.
    pub fn display_timestamp(&self) -> &str {
        if self.created_at.is_empty() {
            &self.updated_at
        } else {
            &self.created_at
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_id_accepts_numbers_and_strings() {
        let from_number: ClipId = serde_json::from_str("42").unwrap();
        assert_eq!(from_number.as_str(), "42");

        let from_string: ClipId = serde_json::from_str("\"abc-7\"").unwrap();
        assert_eq!(from_string.as_str(), "abc-7");
    }

    #[test]
    fn clip_deserializes_backend_shape() {
        let json = r#"{
            "id": 3,
            "content": "hello",
            "created_at": "2024-01-01 10:00:00",
            "updated_at": "2024-01-02 11:30:00"
        }"#;
        let clip: Clip = serde_json::from_str(json).unwrap();
        assert_eq!(clip.id, ClipId::from("3"));
        assert_eq!(clip.content, "hello");
        assert_eq!(clip.display_timestamp(), "2024-01-01 10:00:00");
    }

    #[test]
    fn display_timestamp_falls_back_to_updated_at() {
        let clip = Clip {
            id: ClipId::from("1"),
            content: String::new(),
            created_at: String::new(),
            updated_at: "2024-03-01 08:00:00".to_string(),
        };
        assert_eq!(clip.display_timestamp(), "2024-03-01 08:00:00");
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let clip: Clip = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(clip.content.is_empty());
        assert!(clip.created_at.is_empty());
        assert!(clip.updated_at.is_empty());
    }
}
