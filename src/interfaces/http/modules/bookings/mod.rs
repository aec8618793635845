//! Bookings: authenticated access, guest-only writes

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

use crate::interfaces::http::docs::{HttpMethod, OperationMeta};

const TAG: &str = "Bookings";

pub const OPERATIONS: &[OperationMeta] = &[
    OperationMeta::authenticated(
        HttpMethod::Get,
        "/api/v1/bookings/",
        TAG,
        "List all bookings",
        "Retrieve all bookings with their guest and listing details.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Get,
        "/api/v1/bookings/{id}/",
        TAG,
        "Retrieve a specific booking",
        "Get details of a specific booking, including listing and guest info.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Post,
        "/api/v1/bookings/",
        TAG,
        "Create a new booking",
        "Authenticated users can book a listing by providing dates and listing ID. The guest is set to the caller.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Put,
        "/api/v1/bookings/{id}/",
        TAG,
        "Update a booking",
        "Replace the listing and dates of a booking. Only the guest can update their own bookings.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Patch,
        "/api/v1/bookings/{id}/",
        TAG,
        "Partially update a booking",
        "Change selected fields of a booking, such as its dates, or cancel it. Only the guest can update their own bookings, and a guest cannot confirm a booking.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Delete,
        "/api/v1/bookings/{id}/",
        TAG,
        "Cancel and delete a booking",
        "Remove a booking. Only the guest can delete their own bookings.",
    ),
];
