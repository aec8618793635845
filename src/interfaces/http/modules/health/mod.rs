//! Liveness endpoint

pub mod handlers;

pub use handlers::*;

use crate::interfaces::http::docs::{HttpMethod, OperationMeta};

pub const OPERATIONS: &[OperationMeta] = &[OperationMeta::public(
    HttpMethod::Get,
    "/health",
    "Health",
    "Service health",
    "Ping the database and report status, version and uptime. Answers 503 when the database is unreachable.",
)];
