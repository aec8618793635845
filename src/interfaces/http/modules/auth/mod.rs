//! Authentication module: register, login, current user

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

use crate::interfaces::http::docs::{HttpMethod, OperationMeta};

const TAG: &str = "Authentication";

pub const OPERATIONS: &[OperationMeta] = &[
    OperationMeta::public(
        HttpMethod::Post,
        "/api/v1/auth/register",
        TAG,
        "Register a new user",
        "Create an account. Usernames and emails must be unique.",
    ),
    OperationMeta::public(
        HttpMethod::Post,
        "/api/v1/auth/login",
        TAG,
        "Obtain an access token",
        "Exchange a username (or email) and password for a JWT bearer token.",
    ),
    OperationMeta::authenticated(
        HttpMethod::Get,
        "/api/v1/auth/me",
        TAG,
        "Current user",
        "Return the account behind the bearer token.",
    ),
];
