use crate::error::{AppError, AppResult};
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body extractor that runs `validator` rules before the handler sees it.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string extractor with the same validation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    #[serde(rename_all = "camelCase")]
    struct ProgressBody {
        #[validate(range(min = 1, message = "azkarId must be positive"))]
        azkar_id: i32,
        #[validate(range(min = 0, message = "completed must not be negative"))]
        completed: i32,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct DaysQuery {
        #[validate(range(min = 1, max = 365))]
        days: Option<i64>,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body() {
        let request = json_request(r#"{"azkarId": 3, "completed": 33}"#);
        let ValidatedJson(body) = ValidatedJson::<ProgressBody>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(body.azkar_id, 3);
        assert_eq!(body.completed, 33);
    }

    #[tokio::test]
    async fn test_negative_completed_is_rejected() {
        let request = json_request(r#"{"azkarId": 3, "completed": -1}"#);
        match ValidatedJson::<ProgressBody>::from_request(request, &()).await {
            Err(AppError::ValidationErrors { errors }) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "completed");
                assert!(errors[0].message.contains("negative"));
            }
            other => panic!("Expected ValidationErrors, got {:?}", other.map(|v| v.0)),
        }
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = json_request(r#"{"azkarId": "three""#);
        match ValidatedJson::<ProgressBody>::from_request(request, &()).await {
            Err(AppError::BadRequest { message }) => assert!(!message.is_empty()),
            other => panic!("Expected BadRequest, got {:?}", other.map(|v| v.0)),
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .body(Body::from(r#"{"azkarId": 3, "completed": 1}"#))
            .unwrap();
        assert!(matches!(
            ValidatedJson::<ProgressBody>::from_request(request, &()).await,
            Err(AppError::BadRequest { .. })
        ));
    }

    #[tokio::test]
    async fn test_query_range_is_enforced() {
        let request = Request::builder()
            .uri("/counts?days=999")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        assert!(matches!(
            ValidatedQuery::<DaysQuery>::from_request_parts(&mut parts, &()).await,
            Err(AppError::ValidationErrors { .. })
        ));

        let request = Request::builder().uri("/counts").body(Body::empty()).unwrap();
        let (mut parts, _) = request.into_parts();
        let ValidatedQuery(query) = ValidatedQuery::<DaysQuery>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(query.days, None);
    }
}
