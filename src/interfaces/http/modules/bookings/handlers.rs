//! Booking API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{BookingDto, BookingRequest, PatchBookingRequest, UpdateBookingRequest};
use crate::application::BookingService;
use crate::domain::{Action, BookingChanges};
use crate::interfaces::http::common::{
    error_response, ApiResponse, HandlerError, HandlerResult, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct BookingHandlerState {
    pub service: Arc<BookingService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/",
    responses(
        (status = 200, description = "All bookings", body = ApiResponse<Vec<BookingDto>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<BookingHandlerState>,
    _user: AuthenticatedUser,
) -> HandlerResult<Vec<BookingDto>> {
    let bookings = state.service.list().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        bookings.into_iter().map(BookingDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}/",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingDto>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn retrieve_booking(
    State(state): State<BookingHandlerState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> HandlerResult<BookingDto> {
    let booking = state.service.retrieve(&id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingDto>),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Validation error or unknown listing")
    )
)]
pub async fn create_booking(
    State(state): State<BookingHandlerState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<BookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingDto>>), HandlerError> {
    let booking = state
        .service
        .create(&user.caller(), request.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(booking.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}/",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = ApiResponse<BookingDto>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the guest"),
        (status = 404, description = "Booking not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_booking(
    State(state): State<BookingHandlerState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateBookingRequest>,
) -> HandlerResult<BookingDto> {
    let changes = BookingChanges::try_from(request).map_err(error_response)?;
    let booking = state
        .service
        .update(&user.caller(), &id, changes, Action::Update)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/bookings/{id}/",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = PatchBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = ApiResponse<BookingDto>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the guest"),
        (status = 404, description = "Booking not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn partial_update_booking(
    State(state): State<BookingHandlerState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<PatchBookingRequest>,
) -> HandlerResult<BookingDto> {
    let changes = BookingChanges::try_from(request).map_err(error_response)?;
    let booking = state
        .service
        .update(&user.caller(), &id, changes, Action::PartialUpdate)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/bookings/{id}/",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the guest"),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn delete_booking(
    State(state): State<BookingHandlerState>,
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
