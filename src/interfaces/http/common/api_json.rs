//! JSON body extractor for Axum
//!
//! `ApiJson<T>` works like `axum::Json<T>`, but a body that cannot be
//! parsed is answered with `400 {"message": ...}` instead of axum's
//! plain-text rejection, so every client error shares one shape.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;

use super::MessageResponse;

/// An extractor that deserializes a JSON request body.
///
/// # Usage
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct Body {
///     username: Option<String>,
/// }
///
/// async fn handler(ApiJson(body): ApiJson<Body>) {
///     // `body` parsed successfully
/// }
/// ```
pub struct ApiJson<T>(pub T);

/// Error type for `ApiJson` extraction failures.
pub struct ApiJsonRejection(JsonRejection);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let body = MessageResponse::new(format!("Invalid JSON: {}", self.0.body_text()));
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiJsonRejection)?;

        Ok(ApiJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestBody {
        #[allow(dead_code)]
        name: Option<String>,
    }

    async fn handler(ApiJson(_body): ApiJson<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(req: Request<Body>) -> axum::http::Response<Body> {
        use tower::Service;
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    async fn message(resp: axum::http::Response<Body>) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: MessageResponse = serde_json::from_slice(&bytes).unwrap();
        body.message
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "Alice"}"#))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_optional_fields_are_accepted() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_400_with_message() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(message(resp).await.starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn missing_content_type_returns_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .body(Body::from(r#"{"name": "Alice"}"#))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
