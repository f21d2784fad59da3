//! Error response DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::ToSchema;

use crate::error::ValidationFieldError;

/// Standard error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "code": "NOT_FOUND",
    "message": "category with name 'midnight' was not found",
    "requestId": "3f1c9a0e-5b7d-4d8e-9a43-1f2e3d4c5b6a"
}))]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            request_id: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds request ID to the error response for correlation.
    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    pub fn not_found_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "NOT_FOUND",
            &format!("{} with {} '{}' was not found", entity, field, value),
        )
    }

    pub fn duplicate_error(entity: &str, field: &str, value: &str) -> Self {
        Self::new(
            "DUPLICATE_ENTRY",
            &format!("{} with {} '{}' already exists", entity, field, value),
        )
        .with_details(json!({ "field": field }))
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        Self::new("VALIDATION_ERROR", &format!("{} {}", field, reason))
            .with_details(json!([{ "field": field, "message": reason }]))
    }

    pub fn validation_errors(errors: &[ValidationFieldError]) -> Self {
        let message = match errors {
            [single] => format!("{}: {}", single.field, single.message),
            _ => format!("{} fields failed validation", errors.len()),
        };
        Self::new("VALIDATION_ERROR", &message).with_details(json!(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_are_omitted() {
        let json = serde_json::to_value(ErrorResponse::new("UNAUTHORIZED", "nope")).unwrap();
        assert_eq!(json, json!({ "code": "UNAUTHORIZED", "message": "nope" }));
    }

    #[test]
    fn test_request_id_is_camel_case() {
        let json = serde_json::to_value(
            ErrorResponse::new("NOT_FOUND", "missing").with_request_id("abc"),
        )
        .unwrap();
        assert_eq!(json["requestId"], "abc");
    }

    #[test]
    fn test_validation_errors_details() {
        let errors = vec![
            ValidationFieldError {
                field: "email".to_string(),
                message: "Invalid email format".to_string(),
            },
            ValidationFieldError {
                field: "password".to_string(),
                message: "too short".to_string(),
            },
        ];
        let body = ErrorResponse::validation_errors(&errors);
        assert_eq!(body.message, "2 fields failed validation");
        assert_eq!(body.details.unwrap()[1]["field"], "password");
    }
}
