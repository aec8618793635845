//! Listing API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{ListingDto, ListingRequest, UpdateListingRequest};
use crate::application::ListingService;
use crate::domain::{Action, ListingDraft};
use crate::interfaces::http::common::{
    error_response, ApiResponse, HandlerError, HandlerResult, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct ListingHandlerState {
    pub service: Arc<ListingService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/listings/",
    responses(
        (status = 200, description = "All listings", body = ApiResponse<Vec<ListingDto>>)
    )
)]
pub async fn list_listings(State(state): State<ListingHandlerState>) -> HandlerResult<Vec<ListingDto>> {
    let listings = state.service.list().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        listings.into_iter().map(ListingDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/listings/{id}/",
    params(("id" = String, Path, description = "Listing ID")),
    responses(
        (status = 200, description = "Listing details", body = ApiResponse<ListingDto>),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn retrieve_listing(
    State(state): State<ListingHandlerState>,
    Path(id): Path<String>,
) -> HandlerResult<ListingDto> {
    let listing = state.service.retrieve(&id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(listing.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/listings/",
    request_body = ListingRequest,
    responses(
        (status = 201, description = "Listing created", body = ApiResponse<ListingDto>),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_listing(
    State(state): State<ListingHandlerState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<ListingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ListingDto>>), HandlerError> {
    let listing = state
        .service
        .create(&user.caller(), request.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(listing.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/listings/{id}/",
    params(("id" = String, Path, description = "Listing ID")),
    request_body = ListingRequest,
    responses(
        (status = 200, description = "Listing updated", body = ApiResponse<ListingDto>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the host"),
        (status = 404, description = "Listing not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_listing(
    State(state): State<ListingHandlerState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<ListingRequest>,
) -> HandlerResult<ListingDto> {
    let changes = ListingDraft::from(request).into();
    let listing = state
        .service
        .update(&user.caller(), &id, changes, Action::Update)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(listing.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/listings/{id}/",
    params(("id" = String, Path, description = "Listing ID")),
    request_body = UpdateListingRequest,
    responses(
        (status = 200, description = "Listing updated", body = ApiResponse<ListingDto>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the host"),
        (status = 404, description = "Listing not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn partial_update_listing(
    State(state): State<ListingHandlerState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateListingRequest>,
) -> HandlerResult<ListingDto> {
    let listing = state
        .service
        .update(&user.caller(), &id, request.into(), Action::PartialUpdate)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(listing.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/listings/{id}/",
    params(("id" = String, Path, description = "Listing ID")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the host"),
        (status = 404, description = "Listing not found")
    )
)]
pub async fn delete_listing(
    State(state): State<ListingHandlerState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    state
        .service
        .destroy(&user.caller(), &id)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
