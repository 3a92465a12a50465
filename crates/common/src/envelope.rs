use serde::{Deserialize, Serialize};

/// Uniform response wrapper returned by every item-API operation.
///
/// The wire shape is `{ "isSuccess": bool, "result": ..., "errorMessages": [...] }`
/// on every route, success or failure. Invariant: a failed envelope always
/// carries at least one error message, and `result` is meaningless on failure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub is_success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default)]
    pub error_messages: Vec<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying a payload.
    pub fn ok(result: T) -> Self {
        Self {
            is_success: true,
            result: Some(result),
            error_messages: Vec::new(),
        }
    }

    /// Successful envelope without a payload (e.g. delete).
    pub fn ok_empty() -> Self {
        Self {
            is_success: true,
            result: None,
            error_messages: Vec::new(),
        }
    }

    /// Failed envelope with a single message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::fail_all(vec![message.into()])
    }

    /// Failed envelope with one message per failing rule. An empty list is
    /// replaced with a generic message so the failure invariant holds.
    pub fn fail_all(messages: Vec<String>) -> Self {
        let error_messages = if messages.is_empty() {
            vec!["operation failed".to_string()]
        } else {
            messages
        };
        Self {
            is_success: false,
            result: None,
            error_messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_has_no_errors() {
        let env = Envelope::ok(42);
        assert!(env.is_success);
        assert_eq!(env.result, Some(42));
        assert!(env.error_messages.is_empty());
    }

    #[test]
    fn failure_always_has_a_message() {
        let env: Envelope<()> = Envelope::fail_all(vec![]);
        assert!(!env.is_success);
        assert_eq!(env.error_messages.len(), 1);
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let env = Envelope::ok("x");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["isSuccess"], true);
        assert_eq!(json["result"], "x");
        assert_eq!(json["errorMessages"], serde_json::json!([]));
    }

    #[test]
    fn deserializes_without_result_field() {
        let env: Envelope<String> =
            serde_json::from_str(r#"{"isSuccess":false,"errorMessages":["not found"]}"#).unwrap();
        assert!(!env.is_success);
        assert_eq!(env.result, None);
        assert_eq!(env.error_messages, vec!["not found".to_string()]);
    }
}
