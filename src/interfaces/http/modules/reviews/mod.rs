//! Reviews: authenticated access, author-only writes

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

use crate::interfaces::http::docs::{HttpMethod, OperationMeta};

const TAG: &str = "Reviews";

pub const OPERATIONS: &[OperationMeta] = &[
    OperationMeta::authenticated(
        HttpMethod::Get,
        "/api/v1/reviews/",
        TAG,
        "List all reviews",
        "Retrieve all reviews left by users across listings.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Get,
        "/api/v1/reviews/{id}/",
        TAG,
        "Retrieve a specific review",
        "Get details of a specific review, including rating and comment.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Post,
        "/api/v1/reviews/",
        TAG,
        "Submit a review",
        "Authenticated users can leave one review per listing. Ratings must be 1-5.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Put,
        "/api/v1/reviews/{id}/",
        TAG,
        "Update a review",
        "Replace the rating and comment of a review. Only the author can update their own reviews.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Patch,
        "/api/v1/reviews/{id}/",
        TAG,
        "Partially update a review",
        "Change the rating or the comment of a review. Only the author can update their own reviews.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Delete,
        "/api/v1/reviews/{id}/",
        TAG,
        "Delete a review",
        "Remove a review. Only the author can delete their own reviews.",
    ),
];
