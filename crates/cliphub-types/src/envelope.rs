use serde::Deserialize;

/// Uniform wire wrapper around every hub response.
///
/// Every endpoint answers `{"status": "success", "data": ...}` or
/// `{"status": "error", "message": ...}`. Modeling the two arms as a tagged
/// enum makes the unwrap explicit instead of probing for a `status` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub enum Envelope<T> {
    Success {
        #[serde(default)]
        data: Option<T>,
    },
    Error {
        #[serde(default)]
        message: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Clip;

    #[test]
    fn success_with_list_data() {
        let json = r#"{"status": "success", "data": [{"id": 1, "content": "a"}]}"#;
        let envelope: Envelope<Vec<Clip>> = serde_json::from_str(json).unwrap();
        match envelope {
            Envelope::Success { data } => {
                let clips = data.unwrap();
                assert_eq!(clips.len(), 1);
                assert_eq!(clips[0].content, "a");
            }
            Envelope::Error { .. } => panic!("expected success arm"),
        }
    }

    #[test]
    fn success_without_data_is_none() {
        let envelope: Envelope<Clip> = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(matches!(envelope, Envelope::Success { data: None }));
    }

    #[test]
    fn error_carries_message() {
        let envelope: Envelope<Clip> =
            serde_json::from_str(r#"{"status": "error", "message": "Clip not found."}"#).unwrap();
        match envelope {
            Envelope::Error { message } => {
                assert_eq!(message.as_deref(), Some("Clip not found."));
            }
            Envelope::Success { .. } => panic!("expected error arm"),
        }
    }

    #[test]
    fn error_without_message_is_none() {
        let envelope: Envelope<Clip> = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(matches!(envelope, Envelope::Error { message: None }));
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        let parsed: Result<Envelope<Clip>, _> = serde_json::from_str(r#"{"status": "weird"}"#);
        assert!(parsed.is_err());
    }
}
