//! Authentication API handlers
//!
//! Delegates to `AccountService` from the application/identity layer.

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{LoginRequest, RegisterRequest, UserRecord};
use crate::application::SharedAccountService;
use crate::interfaces::http::common::{error_response, ApiError, ApiJson};

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub account_service: SharedAccountService,
}

/// `POST /api/login`
pub async fn login(
    State(state): State<AuthHandlerState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<UserRecord>, ApiError> {
    let user = state
        .account_service
        .login(request.into())
        .await
        .map_err(error_response)?;

    Ok(Json(UserRecord::from(user)))
}

/// `POST /api/register`
pub async fn register(
    State(state): State<AuthHandlerState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserRecord>), ApiError> {
    let user = state
        .account_service
        .register(request.into())
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(UserRecord::from(user))))
}
