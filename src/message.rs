/// Wire types exchanged with the content script
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::PROCESS_ACTION;
use crate::error::PopupError;

/// The one request the popup ever sends
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentRequest {
    pub action: String,
}

impl ContentRequest {
    pub fn process_email() -> ContentRequest {
        ContentRequest {
            action: PROCESS_ACTION.to_string(),
        }
    }
}

/// Reply from the content script. Read leniently: any JSON value is accepted
/// and judged by JavaScript truthiness, the way the content script's own
/// `response?.success` / `response?.error || ...` checks would.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "Value")]
pub struct ContentResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Value> for ContentResponse {
    fn from(reply: Value) -> ContentResponse {
        let success = reply.get("success").is_some_and(is_truthy);
        let error = reply
            .get("error")
            .filter(|error| is_truthy(error))
            .map(js_string);

        ContentResponse { success, error }
    }
}

impl ContentResponse {
    pub fn ok() -> ContentResponse {
        ContentResponse {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: &str) -> ContentResponse {
        ContentResponse {
            success: false,
            error: Some(error.to_string()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String(value) as JavaScript would render it
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// Interpret what came back from sendMessage. No response at all counts as failure.
pub fn interpret_response(response: Option<&ContentResponse>) -> Result<(), PopupError> {
    match response {
        Some(response) if response.success => Ok(()),
        Some(response) => Err(PopupError::content_script(response.error.as_deref())),
        None => Err(PopupError::content_script(None)),
    }
}
