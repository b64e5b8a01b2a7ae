use serde::{Deserialize, Serialize};

/// Inbound chat envelope. A missing `message` field is treated as empty text.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Outbound chat envelope. `response` is always present; on failure it holds
/// a description prefixed with `"Error: "`.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_deserializes_to_none() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.message.is_none());
    }

    #[test]
    fn present_message_is_kept() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hello"}"#).unwrap();
        assert_eq!(req.message.as_deref(), Some("hello"));
    }

    #[test]
    fn response_serializes_with_single_field() {
        let body = serde_json::to_value(ChatResponse {
            response: "hi".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"response": "hi"}));
    }
}
