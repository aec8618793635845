//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
use crate::application::IdentityService;
use crate::interfaces::http::common::{
    error_response, ApiResponse, HandlerError, HandlerResult, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub identity: Arc<IdentityService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> HandlerResult<LoginResponse> {
    let result = state
        .identity
        .login(&request.username, &request.password)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(result.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserInfo>),
        (status = 409, description = "User already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserInfo>>), HandlerError> {
    let user = state
        .identity
        .register(&request.username, &request.email, &request.password)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(user.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserInfo>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn get_current_user(
    State(state): State<AuthHandlerState>,
    user: AuthenticatedUser,
) -> HandlerResult<UserInfo> {
    let user = state
        .identity
        .current(&user.caller())
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(user.into())))
}
