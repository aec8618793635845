//! Listings: public reads, host-only writes

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

use crate::interfaces::http::docs::{HttpMethod, OperationMeta};

const TAG: &str = "Listings";

pub const OPERATIONS: &[OperationMeta] = &[
    OperationMeta::public(
        HttpMethod::Get,
        "/api/v1/listings/",
        TAG,
        "List all listings",
        "Retrieve all available property listings, each with its host and nested bookings and reviews.",
    ),
    OperationMeta::public(
        HttpMethod::Get,
        "/api/v1/listings/{id}/",
        TAG,
        "Retrieve a specific listing",
        "Get detailed information about a single listing, including its host, bookings and reviews.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Post,
        "/api/v1/listings/",
        TAG,
        "Create a new listing",
        "Authenticated users can create a new property listing. The host is set to the caller.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Put,
        "/api/v1/listings/{id}/",
        TAG,
        "Update a listing",
        "Replace every editable field of a listing. Only the host can update their own listings.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Patch,
        "/api/v1/listings/{id}/",
        TAG,
        "Partially update a listing",
        "Modify selected fields of a listing. Only the host can update their own listings.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Delete,
        "/api/v1/listings/{id}/",
        TAG,
        "Delete a listing",
        "Remove a listing together with its bookings and reviews. Only the host can delete their own listings.",
    ),
];
