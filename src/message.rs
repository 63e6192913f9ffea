// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    /// Pull `message` out of an already decoded body.
    ///
    /// Returns `None` when the body is not an object, or the field is absent,
    /// `null`, not a string, or empty.
    pub fn from_value(body: &Value) -> Option<Self> {
        body.get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(|m| Self {
                message: m.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub references: Vec<Reference>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_extraction() {
        let req = ChatRequest::from_value(&json!({"message": "hi"})).unwrap();
        assert_eq!(req.message, "hi");

        // whitespace is not empty
        assert!(ChatRequest::from_value(&json!({"message": "  "})).is_some());

        assert!(ChatRequest::from_value(&json!({"message": ""})).is_none());
        assert!(ChatRequest::from_value(&json!({"message": null})).is_none());
        assert!(ChatRequest::from_value(&json!({"message": 42})).is_none());
        assert!(ChatRequest::from_value(&json!({"other": "x"})).is_none());
        assert!(ChatRequest::from_value(&json!(["message"])).is_none());
        assert!(ChatRequest::from_value(&json!("message")).is_none());
    }
}
