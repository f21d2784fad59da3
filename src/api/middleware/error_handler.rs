//! Error handler for converting AppError to HTTP responses.
//!
//! `AppError` renders itself as an [`ErrorResponse`] and leaves a copy in the
//! response extensions. [`global_error_handler`] then stamps the request id
//! onto it, and rewrites error responses produced outside our handlers
//! (unknown routes, wrong methods, extractor rejections) into the same shape.

use axum::{
    Json,
    body::to_bytes,
    extract::Request,
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::api::middleware::RequestId;
use crate::error::AppError;

/// Largest plain-text error body worth reading back.
const MAX_ERROR_BODY: usize = 16 * 1024;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);
        if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = error_body(&self);
        let mut response = (status, Json(body.clone())).into_response();
        response.extensions_mut().insert(body);
        response
    }
}

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Duplicate { .. } => StatusCode::CONFLICT,
        AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Builds the client-facing body. Storage and internal failures carry a
/// generic message only.
fn error_body(error: &AppError) -> ErrorResponse {
    match error {
        AppError::NotFound {
            entity,
            field,
            value,
        } => ErrorResponse::not_found_error(entity, field, value),
        AppError::Duplicate {
            entity,
            field,
            value,
        } => ErrorResponse::duplicate_error(entity, field, value),
        AppError::Validation { field, reason } => ErrorResponse::validation_error(field, reason),
        AppError::ValidationErrors { errors } => ErrorResponse::validation_errors(errors),
        AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
        AppError::Unauthorized { message } => ErrorResponse::new("UNAUTHORIZED", message),
        AppError::Forbidden { message } => ErrorResponse::new("FORBIDDEN", message),
        AppError::Database { .. } => {
            ErrorResponse::new("DATABASE_ERROR", "A database error occurred")
        }
        AppError::Configuration { .. } => {
            ErrorResponse::new("CONFIGURATION_ERROR", "The server is misconfigured")
        }
        AppError::ConnectionPool { .. } => {
            ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable")
        }
        AppError::Internal { .. } => {
            ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
        }
    }
}

fn status_code_name(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "BAD_REQUEST",
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
        StatusCode::FORBIDDEN => "FORBIDDEN",
        StatusCode::NOT_FOUND => "NOT_FOUND",
        StatusCode::METHOD_NOT_ALLOWED => "METHOD_NOT_ALLOWED",
        StatusCode::REQUEST_TIMEOUT => "REQUEST_TIMEOUT",
        StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_CONTENT",
        StatusCode::SERVICE_UNAVAILABLE => "SERVICE_UNAVAILABLE",
        s if s.is_server_error() => "INTERNAL_SERVER_ERROR",
        _ => "UNKNOWN_ERROR",
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}

/// Gives every 4xx/5xx response the standard JSON error body with the
/// request id attached.
pub async fn global_error_handler(request: Request, next: Next) -> Response {
    let request_id = request.extensions().get::<RequestId>().map(|r| r.0.clone());
    let mut response = next.run(request).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let body = match response.extensions_mut().remove::<ErrorResponse>() {
        Some(body) => body,
        // JSON produced by something else (e.g. a nested service) is left alone
        None if is_json(&response) => return response,
        None => {
            let (_, body) = response.into_parts();
            let text = to_bytes(body, MAX_ERROR_BODY)
                .await
                .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
                .unwrap_or_default();
            let message = if text.is_empty() {
                status.canonical_reason().unwrap_or("Request failed").to_string()
            } else {
                text
            };
            ErrorResponse::new(status_code_name(status), &message)
        }
    };

    let body = match request_id {
        Some(id) => body.with_request_id(&id),
        None => body,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;
    use axum::{Router, body::Body, middleware, routing::get};
    use tower::ServiceExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::not_found("azkar", "id", 1), StatusCode::NOT_FOUND),
            (
                AppError::Duplicate {
                    entity: "user".into(),
                    field: "email".into(),
                    value: "a@b.c".into(),
                },
                StatusCode::CONFLICT,
            ),
            (AppError::validation("count", "bad"), StatusCode::BAD_REQUEST),
            (
                AppError::ValidationErrors { errors: vec![] },
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::BadRequest {
                    message: "x".into(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (AppError::unauthorized("x"), StatusCode::UNAUTHORIZED),
            (
                AppError::Forbidden {
                    message: "x".into(),
                },
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::Database {
                    operation: "x".into(),
                    source: anyhow::anyhow!("x"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Configuration {
                    key: "x".into(),
                    source: anyhow::anyhow!("x"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::ConnectionPool {
                    source: anyhow::anyhow!("x"),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Internal {
                    source: anyhow::anyhow!("x"),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error_to_status_code(&error), expected, "{:?}", error);
        }
    }

    #[tokio::test]
    async fn test_database_details_are_not_echoed() {
        let response = AppError::Database {
            operation: "insert into users".into(),
            source: anyhow::anyhow!("password authentication failed for user postgres"),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["code"], "DATABASE_ERROR");
        let text = json.to_string();
        assert!(!text.contains("postgres"));
        assert!(!text.contains("insert"));
    }

    #[tokio::test]
    async fn test_validation_errors_list_fields() {
        let response = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "completed".into(),
                message: "must not be negative".into(),
            }],
        }
        .into_response();
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["details"][0]["field"], "completed");
    }

    #[tokio::test]
    async fn test_global_handler_adds_request_id_and_wraps_plain_errors() {
        let app = Router::new()
            .route(
                "/missing",
                get(|| async { AppError::not_found("category", "name", "midnight") }),
            )
            .route(
                "/plain",
                get(|| async { (StatusCode::BAD_REQUEST, "bad things") }),
            )
            .layer(middleware::from_fn(global_error_handler))
            .layer(middleware::from_fn(crate::api::middleware::request_id_middleware));

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/missing")
                    .header("x-request-id", "req-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["requestId"], "req-1");

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/plain").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["message"], "bad things");

        let response = app
            .oneshot(Request::builder().uri("/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
        assert!(json["requestId"].is_string());
    }
}
