//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{middleware, routing::get, routing::post, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, IdentityService, ListingService, ReviewService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::docs::{OperationMetadataAddon, BEARER_SCHEME};
use crate::interfaces::http::dto::{ListingSummaryDto, UserSummaryDto};
use crate::interfaces::http::middleware::{auth_middleware, optional_auth_middleware, AuthState};

use super::modules::request_id::request_id_middleware;
use super::modules::{auth, bookings, health, listings, metrics, reviews};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("JWT from POST /api/v1/auth/login"))
                    .build(),
            ),
        );
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::get_current_user,
        // Listings
        listings::list_listings,
        listings::retrieve_listing,
        listings::create_listing,
        listings::update_listing,
        listings::partial_update_listing,
        listings::delete_listing,
        // Bookings
        bookings::list_bookings,
        bookings::retrieve_booking,
        bookings::create_booking,
        bookings::update_booking,
        bookings::partial_update_booking,
        bookings::delete_booking,
        // Reviews
        reviews::list_reviews,
        reviews::retrieve_review,
        reviews::create_review,
        reviews::update_review,
        reviews::partial_update_review,
        reviews::delete_review,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            UserSummaryDto,
            ListingSummaryDto,
            health::HealthResponse,
            health::ComponentHealth,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::RegisterRequest,
            auth::UserInfo,
            // Listings
            listings::ListingRequest,
            listings::UpdateListingRequest,
            listings::ListingDto,
            listings::ListingBookingDto,
            listings::ListingReviewDto,
            // Bookings
            bookings::BookingRequest,
            bookings::UpdateBookingRequest,
            bookings::PatchBookingRequest,
            bookings::BookingDto,
            // Reviews
            reviews::ReviewRequest,
            reviews::UpdateReviewRequest,
            reviews::PatchReviewRequest,
            reviews::ReviewDto,
        )
    ),
    modifiers(&SecurityAddon, &OperationMetadataAddon),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Authentication", description = "Registration, login (JWT) and the current user"),
        (name = "Listings", description = "Property listings. Anyone can read; only the host can change them."),
        (name = "Bookings", description = "Stays booked by guests"),
        (name = "Reviews", description = "Ratings and comments on listings, one per user and listing"),
    ),
    info(
        title = "Travel Listings API",
        version = "1.0.0",
        description = "REST API for property listings, bookings and reviews",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    metrics_handle: PrometheusHandle,
) -> Router {
    let auth_state = AuthState {
        jwt_config: jwt_config.clone(),
        repos: repos.clone(),
    };

    // Auth routes (public + protected /me)
    let auth_handler_state = auth::AuthHandlerState {
        identity: Arc::new(IdentityService::new(repos.clone(), jwt_config)),
    };
    let auth_routes = Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .with_state(auth_handler_state.clone());
    let auth_protected_routes = Router::new()
        .route("/api/v1/auth/me", get(auth::get_current_user))
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_handler_state);

    // Listing routes (anonymous reads)
    let listing_routes = Router::new()
        .route(
            "/api/v1/listings/",
            get(listings::list_listings).post(listings::create_listing),
        )
        .route(
            "/api/v1/listings/{id}/",
            get(listings::retrieve_listing)
                .put(listings::update_listing)
                .patch(listings::partial_update_listing)
                .delete(listings::delete_listing),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            optional_auth_middleware,
        ))
        .with_state(listings::ListingHandlerState {
            service: Arc::new(ListingService::new(repos.clone())),
        });

    // Booking routes (protected)
    let booking_routes = Router::new()
        .route(
            "/api/v1/bookings/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/api/v1/bookings/{id}/",
            get(bookings::retrieve_booking)
                .put(bookings::update_booking)
                .patch(bookings::partial_update_booking)
                .delete(bookings::delete_booking),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(bookings::BookingHandlerState {
            service: Arc::new(BookingService::new(repos.clone())),
        });

    // Review routes (protected)
    let review_routes = Router::new()
        .route(
            "/api/v1/reviews/",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/api/v1/reviews/{id}/",
            get(reviews::retrieve_review)
                .put(reviews::update_review)
                .patch(reviews::partial_update_review)
                .delete(reviews::delete_review),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(reviews::ReviewHandlerState {
            service: Arc::new(ReviewService::new(repos)),
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(metrics::MetricsState {
            handle: metrics_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .merge(metrics_routes)
        .merge(auth_routes)
        .merge(auth_protected_routes)
        .merge(listing_routes)
        .merge(booking_routes)
        .merge(review_routes)
        // Middleware
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
