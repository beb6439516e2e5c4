//! API router

use axum::http::{header, HeaderValue, Method};
use axum::{middleware, routing::post, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::SharedAccountService;
use crate::config::CorsConfig;

use super::modules::auth::{self, AuthHandlerState};
use super::modules::request_id::request_id_middleware;

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if cors.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// Create the API router with all routes
pub fn create_api_router(account_service: SharedAccountService, cors: &CorsConfig) -> Router {
    let auth_state = AuthHandlerState { account_service };

    Router::new()
        .route("/api/login", post(auth::login))
        .route("/api/register", post(auth::register))
        .with_state(auth_state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors_layer(cors))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::Service;

    use super::*;
    use crate::application::AccountService;
    use crate::domain::UserRepositoryInterface;
    use crate::infrastructure::crypto::password::MIN_COST;
    use crate::infrastructure::storage::InMemoryUserRepository;
    use crate::interfaces::http::modules::request_id::REQUEST_ID_HEADER;

    fn app(cors: CorsConfig) -> Router {
        let repo: Arc<dyn UserRepositoryInterface> = Arc::new(InMemoryUserRepository::new());
        create_api_router(Arc::new(AccountService::new(repo, MIN_COST)), &cors)
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let mut svc = app(CorsConfig::default()).into_service();
        let resp = svc
            .call(
                Request::builder()
                    .method("POST")
                    .uri("/api/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_on_login_is_rejected() {
        let mut svc = app(CorsConfig::default()).into_service();
        let resp = svc
            .call(
                Request::builder()
                    .uri("/api/login")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn responses_carry_request_id() {
        let mut svc = app(CorsConfig::default()).into_service();
        let resp = svc
            .call(
                Request::builder()
                    .method("POST")
                    .uri("/api/login")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn cors_preflight_honours_allowed_origins() {
        let cors = CorsConfig {
            allowed_origins: vec!["http://studio.local".into()],
        };
        let mut svc = app(cors).into_service();

        let preflight = |origin: &str| {
            Request::builder()
                .method("OPTIONS")
                .uri("/api/register")
                .header("origin", origin)
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap()
        };

        let resp = svc.call(preflight("http://studio.local")).await.unwrap();
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            "http://studio.local"
        );

        let resp = svc.call(preflight("http://evil.example")).await.unwrap();
        assert!(resp.headers().get("access-control-allow-origin").is_none());
    }
}
