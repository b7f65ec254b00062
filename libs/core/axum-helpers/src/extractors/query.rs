//! Query-string extractor with structured rejections.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Like [`axum::extract::Query`], but a missing or malformed parameter is
/// rejected with a 400 [`ErrorResponse`](crate::errors::ErrorResponse)
/// (`INVALID_QUERY`) instead of axum's plain-text body.
///
/// ```ignore
/// async fn list(ApiQuery(params): ApiQuery<ListParams>) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(ApiQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        use_queue: bool,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            get(|ApiQuery(p): ApiQuery<Params>| async move { p.use_queue.to_string() }),
        )
    }

    async fn call(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_query() {
        let (status, body) = call("/?useQueue=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"true");
    }

    #[tokio::test]
    async fn test_missing_parameter_is_structured_400() {
        let (status, body) = call("/").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "INVALID_QUERY");
        assert_eq!(json["code"], 1001);
        assert!(json["message"].as_str().unwrap().contains("useQueue"));
    }

    #[tokio::test]
    async fn test_malformed_parameter_is_structured_400() {
        let (status, body) = call("/?useQueue=maybe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "INVALID_QUERY");
    }
}
