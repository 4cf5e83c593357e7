//! Error taxonomy for every backend call made by the dashboard.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is taken from the body when the backend sent one.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The response arrived but its body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Rejected on the client before any request was issued.
    #[error("{0}")]
    Validation(String),

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl ApiError {
    /// Build an `Http` error from a status code and the raw response body.
    ///
    /// The backend reports errors as `{"detail": ..}`, `{"error": ..}` or
    /// `{"message": ..}`; anything else falls back to a generic status message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| extract_message(&value))
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        ApiError::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::NotAuthenticated) || self.status() == Some(401)
    }
}

fn extract_message(value: &Value) -> Option<String> {
    for key in ["detail", "error", "message"] {
        match value.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Array(items)) => {
                let joined: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect();
                if !joined.is_empty() {
                    return Some(joined.join(", "));
                }
            }
            _ => {}
        }
    }
    // Field-level validation errors: {"name": ["This field is required."]}
    let object = value.as_object()?;
    object.iter().find_map(|(field, errors)| {
        errors
            .as_array()
            .and_then(|list| list.first())
            .and_then(Value::as_str)
            .map(|msg| format!("{}: {}", field, msg))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_detail() {
        let err = ApiError::from_response(403, r#"{"detail":"You do not have permission."}"#);
        assert_eq!(err.to_string(), "You do not have permission.");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_message_from_error_key() {
        let err = ApiError::from_response(400, r#"{"error":"Sub department not found"}"#);
        assert_eq!(err.to_string(), "Sub department not found");
    }

    #[test]
    fn test_field_errors() {
        let err = ApiError::from_response(400, r#"{"name":["This field is required."]}"#);
        assert_eq!(err.to_string(), "name: This field is required.");
    }

    #[test]
    fn test_fallback_message() {
        let err = ApiError::from_response(500, "<html>Server Error</html>");
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(ApiError::NotAuthenticated.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}
