use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// The uniform `{success, message?, data?}` wrapper every endpoint
/// responds with. `message` and `data` are omitted entirely when
/// absent, never serialized as `null`.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = ()> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Cow<'static, str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl Envelope {
    #[must_use]
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T> Envelope<T> {
    #[must_use]
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    #[must_use]
    pub fn with_message(message: impl Into<Cow<'static, str>>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_fields_are_omitted() {
        let body = serde_json::to_value(Envelope::message("listo")).unwrap();
        assert_eq!(body, json!({"success": true, "message": "listo"}));

        let body = serde_json::to_value(Envelope::data(vec![1, 2, 3])).unwrap();
        assert_eq!(body, json!({"success": true, "data": [1, 2, 3]}));
    }

    #[test]
    fn failure_flags_success_false() {
        let body = serde_json::to_value(Envelope::failure("no")).unwrap();
        assert_eq!(body, json!({"success": false, "message": "no"}));
    }

    #[test]
    fn with_message_carries_both() {
        let body = serde_json::to_value(Envelope::with_message("ok", json!({"id": 7}))).unwrap();
        assert_eq!(
            body,
            json!({"success": true, "message": "ok", "data": {"id": 7}})
        );
    }
}
