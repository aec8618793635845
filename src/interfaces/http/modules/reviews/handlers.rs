//! Review API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{PatchReviewRequest, ReviewDto, ReviewRequest, UpdateReviewRequest};
use crate::application::ReviewService;
use crate::domain::Action;
use crate::interfaces::http::common::{
    error_response, ApiResponse, HandlerError, HandlerResult, ValidatedJson,
};
use crate::interfaces::http::middleware::AuthenticatedUser;

#[derive(Clone)]
pub struct ReviewHandlerState {
    pub service: Arc<ReviewService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/",
    responses(
        (status = 200, description = "All reviews", body = ApiResponse<Vec<ReviewDto>>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_reviews(
    State(state): State<ReviewHandlerState>,
    _user: AuthenticatedUser,
) -> HandlerResult<Vec<ReviewDto>> {
    let reviews = state.service.list().await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(
        reviews.into_iter().map(ReviewDto::from).collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}/",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review details", body = ApiResponse<ReviewDto>),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn retrieve_review(
    State(state): State<ReviewHandlerState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> HandlerResult<ReviewDto> {
    let review = state.service.retrieve(&id).await.map_err(error_response)?;
    Ok(Json(ApiResponse::success(review.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/reviews/",
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewDto>),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Listing already reviewed by the caller"),
        (status = 422, description = "Rating out of range or unknown listing")
    )
)]
pub async fn create_review(
    State(state): State<ReviewHandlerState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<ReviewRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReviewDto>>), HandlerError> {
    let review = state
        .service
        .create(&user.caller(), request.into())
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(review.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}/",
    params(("id" = String, Path, description = "Review ID")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewDto>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Review not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_review(
    State(state): State<ReviewHandlerState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> HandlerResult<ReviewDto> {
    let review = state
        .service
        .update(&user.caller(), &id, request.into(), Action::Update)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(review.into())))
}

#[utoipa::path(
    patch,
    path = "/api/v1/reviews/{id}/",
    params(("id" = String, Path, description = "Review ID")),
    request_body = PatchReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = ApiResponse<ReviewDto>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Review not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn partial_update_review(
    State(state): State<ReviewHandlerState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<PatchReviewRequest>,
) -> HandlerResult<ReviewDto> {
    let review = state
        .service
        .update(&user.caller(), &id, request.into(), Action::PartialUpdate)
        .await
        .map_err(error_response)?;
    Ok(Json(ApiResponse::success(review.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}/",
    params(("id" = String, Path, description = "Review ID")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not the author"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn delete_review(
    State(state): State<ReviewHandlerState>,
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
