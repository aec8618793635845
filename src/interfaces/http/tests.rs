//! Router-level tests against an in-memory database

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::create_api_router;
use crate::domain::{RepositoryProvider, User};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::database::test_connection;
use crate::infrastructure::SeaOrmRepositoryProvider;

struct TestApp {
    router: Router,
    repos: Arc<dyn RepositoryProvider>,
    jwt: JwtConfig,
}

/// A user with a ready-made bearer token
struct TestUser {
    id: String,
    token: String,
}

impl TestApp {
    async fn new() -> Self {
        let db = test_connection().await;
        let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let jwt = JwtConfig::new("router-test-secret", 1);
        let handle = PrometheusBuilder::new().build_recorder().handle();
        let router = create_api_router(repos.clone(), db, jwt.clone(), handle);
        Self { router, repos, jwt }
    }

    async fn user(&self, username: &str) -> TestUser {
        let user = User::new(username, format!("{username}@example.com"), "x");
        self.repos.users().create(user.clone()).await.unwrap();
        let token = create_token(&user.id, &user.username, &self.jwt).unwrap();
        TestUser { id: user.id, token }
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        user: Option<&TestUser>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", user.token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    async fn create_listing(&self, host: &TestUser, title: &str, price: i32) -> String {
        let (status, body) = self
            .send(
                Method::POST,
                "/api/v1/listings/",
                Some(host),
                Some(json!({
                    "title": title,
                    "description": "Quiet spot",
                    "location": "Lake Tahoe",
                    "price_per_night": price
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

fn listing_item(id: &str) -> String {
    format!("/api/v1/listings/{id}/")
}

// ── Listings ────────────────────────────────────────────────────

#[tokio::test]
async fn anonymous_reads_succeed_and_writes_are_unauthorized() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let id = app.create_listing(&host, "Cabin", 100).await;

    let (status, body) = app.send(Method::GET, "/api/v1/listings/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = app.send(Method::GET, &listing_item(&id), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["host"]["username"], "host");

    let payload = json!({"title": "X", "location": "Y", "price_per_night": 1});
    let (status, _) = app
        .send(Method::POST, "/api/v1/listings/", None, Some(payload.clone()))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app
        .send(Method::PUT, &listing_item(&id), None, Some(payload))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app
        .send(Method::PATCH, &listing_item(&id), None, Some(json!({"price_per_night": 1})))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.send(Method::DELETE, &listing_item(&id), None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, body) = app.send(Method::GET, &listing_item(&id), None, None).await;
    assert_eq!(body["data"]["price_per_night"], 100);
}

#[tokio::test]
async fn invalid_token_is_rejected_even_on_public_reads() {
    let app = TestApp::new().await;
    let forged = TestUser {
        id: "nobody".to_string(),
        token: "not-a-jwt".to_string(),
    };
    let (status, body) = app
        .send(Method::GET, "/api/v1/listings/", Some(&forged), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn token_for_unknown_user_is_unauthorized() {
    let app = TestApp::new().await;
    let ghost = TestUser {
        id: "ghost-id".to_string(),
        token: create_token("ghost-id", "ghost", &app.jwt).unwrap(),
    };

    let payload = json!({"title": "Cabin", "location": "Woods", "price_per_night": 100});
    let (status, body) = app
        .send(Method::POST, "/api/v1/listings/", Some(&ghost), Some(payload))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid authentication token");

    let (status, _) = app.send(Method::GET, "/api/v1/listings/", Some(&ghost), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.send(Method::GET, "/api/v1/bookings/", Some(&ghost), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let (status, _) = app.send(Method::GET, "/api/v1/auth/me", Some(&ghost), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn client_supplied_host_is_ignored() {
    let app = TestApp::new().await;
    let a = app.user("alice").await;
    let b = app.user("bob").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/listings/",
            Some(&a),
            Some(json!({
                "title": "Loft",
                "location": "Berlin",
                "price_per_night": 80,
                "host": b.id,
                "host_id": b.id
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["host"]["id"], a.id.as_str());

    let id = body["data"]["id"].as_str().unwrap();
    let (_, body) = app.send(Method::GET, &listing_item(id), None, None).await;
    assert_eq!(body["data"]["host"]["id"], a.id.as_str());
}

#[tokio::test]
async fn only_host_may_update_or_delete_listing() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let other = app.user("other").await;
    let id = app.create_listing(&host, "Cabin", 100).await;

    let full = json!({"title": "Stolen", "location": "Nowhere", "price_per_night": 1});
    let (status, body) = app
        .send(Method::PUT, &listing_item(&id), Some(&other), Some(full))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Only the host can update this listing");

    let (status, _) = app
        .send(Method::PATCH, &listing_item(&id), Some(&other), Some(json!({"price_per_night": 1})))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.send(Method::DELETE, &listing_item(&id), Some(&other), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let full = json!({"title": "Cabin deluxe", "location": "Lake Tahoe", "price_per_night": 150});
    let (status, body) = app
        .send(Method::PUT, &listing_item(&id), Some(&host), Some(full))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Cabin deluxe");
    assert_eq!(body["data"]["description"], "");

    let (status, body) = app
        .send(Method::PATCH, &listing_item(&id), Some(&host), Some(json!({"price_per_night": 175})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["price_per_night"], 175);
    assert_eq!(body["data"]["title"], "Cabin deluxe");

    let (status, _) = app.send(Method::DELETE, &listing_item(&id), Some(&host), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.send(Method::GET, &listing_item(&id), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_listing_is_not_found_before_ownership() {
    let app = TestApp::new().await;
    let user = app.user("user").await;

    let (status, _) = app.send(Method::GET, &listing_item("missing"), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.send(Method::DELETE, &listing_item("missing"), Some(&user), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_reads_are_identical() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let id = app.create_listing(&host, "Cabin", 100).await;

    let (_, first) = app.send(Method::GET, &listing_item(&id), None, None).await;
    let (_, second) = app.send(Method::GET, &listing_item(&id), None, None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn listing_payload_is_validated() {
    let app = TestApp::new().await;
    let host = app.user("host").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/listings/",
            Some(&host),
            Some(json!({"title": "", "location": "X", "price_per_night": -5})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("price_per_night"), "{error}");
    assert!(error.contains("title"), "{error}");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/listings/")
        .header(header::AUTHORIZATION, format!("Bearer {}", host.token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ── Bookings & reviews ─────────────────────────────────────────

#[tokio::test]
async fn bookings_and_reviews_require_authentication() {
    let app = TestApp::new().await;
    for uri in [
        "/api/v1/bookings/",
        "/api/v1/bookings/any/",
        "/api/v1/reviews/",
        "/api/v1/reviews/any/",
    ] {
        let (status, _) = app.send(Method::GET, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn booking_dates_and_listing_are_validated() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let guest = app.user("guest").await;
    let listing = app.create_listing(&host, "Cabin", 100).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/bookings/",
            Some(&guest),
            Some(json!({"listing": listing, "check_in": "2025-07-04", "check_out": "2025-07-04"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "check_out: must be after check_in");

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/bookings/",
            Some(&guest),
            Some(json!({"listing": "missing", "check_in": "2025-07-01", "check_out": "2025-07-04"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/bookings/",
            Some(&guest),
            Some(json!({"listing": listing, "check_in": "July 1st", "check_out": "2025-07-04"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn only_guest_may_change_booking() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let guest = app.user("guest").await;
    let listing = app.create_listing(&host, "Cabin", 100).await;

    let (_, body) = app
        .send(
            Method::POST,
            "/api/v1/bookings/",
            Some(&guest),
            Some(json!({"listing": listing, "check_in": "2025-07-01", "check_out": "2025-07-04"})),
        )
        .await;
    let uri = format!("/api/v1/bookings/{}/", body["data"]["id"].as_str().unwrap());

    let (status, _) = app
        .send(Method::PATCH, &uri, Some(&host), Some(json!({"status": "canceled"})))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(Method::PATCH, &uri, Some(&guest), Some(json!({"status": "confirmed"})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "status: guests can only set pending or canceled");

    let (status, body) = app
        .send(Method::PATCH, &uri, Some(&guest), Some(json!({"status": "canceled"})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "canceled");

    let (status, _) = app
        .send(Method::PATCH, &uri, Some(&guest), Some(json!({"status": "archived"})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&host), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.send(Method::DELETE, &uri, Some(&guest), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.send(Method::GET, &uri, Some(&guest), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_put_replaces_dates_and_listing() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let guest = app.user("guest").await;
    let cabin = app.create_listing(&host, "Cabin", 100).await;
    let loft = app.create_listing(&host, "Loft", 80).await;

    let (_, body) = app
        .send(
            Method::POST,
            "/api/v1/bookings/",
            Some(&guest),
            Some(json!({"listing": cabin, "check_in": "2025-07-01", "check_out": "2025-07-04"})),
        )
        .await;
    let uri = format!("/api/v1/bookings/{}/", body["data"]["id"].as_str().unwrap());

    let moved = json!({"listing": loft, "check_in": "2025-08-01", "check_out": "2025-08-03"});
    let (status, _) = app
        .send(Method::PUT, &uri, Some(&host), Some(moved.clone()))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app.send(Method::PUT, &uri, Some(&guest), Some(moved)).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["listing"]["id"], loft.as_str());
    assert_eq!(body["data"]["listing"]["title"], "Loft");
    assert_eq!(body["data"]["check_in"], "2025-08-01");
    assert_eq!(body["data"]["status"], "pending");

    let (status, body) = app
        .send(
            Method::PUT,
            &uri,
            Some(&guest),
            Some(json!({"listing": "missing", "check_in": "2025-08-01", "check_out": "2025-08-03"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("listing: "));

    let (status, _) = app
        .send(Method::PUT, &uri, Some(&guest), Some(json!({"listing": loft})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, body) = app.send(Method::GET, &uri, Some(&guest), None).await;
    assert_eq!(body["data"]["listing"]["id"], loft.as_str());
}

#[tokio::test]
async fn only_author_may_change_review() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let author = app.user("author").await;
    let listing = app.create_listing(&host, "Cabin", 100).await;

    let (_, body) = app
        .send(
            Method::POST,
            "/api/v1/reviews/",
            Some(&author),
            Some(json!({"listing": listing, "rating": 3, "comment": "Fine"})),
        )
        .await;
    let uri = format!("/api/v1/reviews/{}/", body["data"]["id"].as_str().unwrap());

    let full = json!({"rating": 1, "comment": "Terrible"});
    let (status, body) = app.send(Method::PUT, &uri, Some(&host), Some(full)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Only the author can update this review");
    let (status, _) = app
        .send(Method::PATCH, &uri, Some(&host), Some(json!({"rating": 1})))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.send(Method::DELETE, &uri, Some(&host), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .send(Method::PUT, &uri, Some(&author), Some(json!({"rating": 4, "comment": "Better"})))
        .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["data"]["rating"], 4);
    assert_eq!(body["data"]["comment"], "Better");

    let (status, body) = app
        .send(Method::PATCH, &uri, Some(&author), Some(json!({"rating": 5})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rating"], 5);
    assert_eq!(body["data"]["comment"], "Better");

    let (status, _) = app
        .send(Method::PATCH, &uri, Some(&author), Some(json!({"rating": 9})))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app.send(Method::DELETE, &uri, Some(&author), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.send(Method::GET, &uri, Some(&author), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_reads_nest_bookings_and_reviews() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let guest = app.user("guest").await;
    let cabin = app.create_listing(&host, "Cabin", 100).await;
    let loft = app.create_listing(&host, "Loft", 80).await;

    app.send(
        Method::POST,
        "/api/v1/bookings/",
        Some(&guest),
        Some(json!({"listing": cabin, "check_in": "2025-07-01", "check_out": "2025-07-04"})),
    )
    .await;
    app.send(
        Method::POST,
        "/api/v1/reviews/",
        Some(&guest),
        Some(json!({"listing": cabin, "rating": 5, "comment": "Great"})),
    )
    .await;

    let (status, body) = app.send(Method::GET, &listing_item(&cabin), None, None).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = body["data"]["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["guest"]["username"], "guest");
    assert_eq!(bookings[0]["check_in"], "2025-07-01");
    assert_eq!(bookings[0]["status"], "pending");
    let reviews = body["data"]["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["user"]["username"], "guest");
    assert_eq!(reviews[0]["rating"], 5);

    let (_, body) = app.send(Method::GET, "/api/v1/listings/", None, None).await;
    let listings = body["data"].as_array().unwrap();
    let loft_body = listings.iter().find(|l| l["id"] == loft.as_str()).unwrap();
    assert!(loft_body["bookings"].as_array().unwrap().is_empty());
    assert!(loft_body["reviews"].as_array().unwrap().is_empty());
    let cabin_body = listings.iter().find(|l| l["id"] == cabin.as_str()).unwrap();
    assert_eq!(cabin_body["reviews"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn second_review_on_same_listing_conflicts() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let guest = app.user("guest").await;
    let listing = app.create_listing(&host, "Cabin", 100).await;

    let review = json!({"listing": listing, "rating": 4, "comment": "Good"});
    let (status, _) = app
        .send(Method::POST, "/api/v1/reviews/", Some(&guest), Some(review.clone()))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = app
        .send(Method::POST, "/api/v1/reviews/", Some(&guest), Some(review))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn review_ratings_are_bounded() {
    let app = TestApp::new().await;
    let host = app.user("host").await;
    let listing = app.create_listing(&host, "Cabin", 100).await;

    for rating in [0, 6, -1] {
        let reviewer = app.user(&format!("reviewer{}", rating + 10)).await;
        let (status, _) = app
            .send(
                Method::POST,
                "/api/v1/reviews/",
                Some(&reviewer),
                Some(json!({"listing": listing, "rating": rating})),
            )
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "rating {rating}");
    }
    for rating in 1..=5 {
        let reviewer = app.user(&format!("ok{rating}")).await;
        let (status, _) = app
            .send(
                Method::POST,
                "/api/v1/reviews/",
                Some(&reviewer),
                Some(json!({"listing": listing, "rating": rating})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "rating {rating}");
    }
}

#[tokio::test]
async fn host_books_and_reviews_scenario() {
    let app = TestApp::new().await;
    let h = app.user("h").await;
    let g = app.user("g").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/listings/",
            Some(&h),
            Some(json!({"title": "Cabin", "location": "Woods", "price_per_night": 100})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["host"]["id"], h.id.as_str());
    let listing = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/bookings/",
            Some(&g),
            Some(json!({
                "listing": listing,
                "check_in": "2025-07-01",
                "check_out": "2025-07-04",
                "guest": h.id
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["guest"]["id"], g.id.as_str());
    assert_eq!(body["data"]["listing"]["id"], listing.as_str());
    assert_eq!(body["data"]["listing"]["host"]["username"], "h");
    assert_eq!(body["data"]["status"], "pending");

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/reviews/",
            Some(&g),
            Some(json!({"listing": listing, "rating": 6, "comment": "x"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/reviews/",
            Some(&g),
            Some(json!({"listing": listing, "rating": 5, "comment": "Great"})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["user"]["id"], g.id.as_str());
    assert_eq!(body["data"]["rating"], 5);

    let (status, body) = app.send(Method::GET, "/api/v1/reviews/", Some(&h), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["listing"]["title"], "Cabin");

    // Deleting the listing removes its bookings and reviews
    let (status, _) = app
        .send(Method::DELETE, &listing_item(&listing), Some(&h), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = app.send(Method::GET, "/api/v1/bookings/", Some(&g), None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    let (_, body) = app.send(Method::GET, "/api/v1/reviews/", Some(&g), None).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

// ── Auth, docs, health ─────────────────────────────────────────

#[tokio::test]
async fn register_login_and_me() {
    let app = TestApp::new().await;
    let credentials = json!({"username": "carol", "email": "carol@example.com", "password": "password123"});

    let (status, body) = app
        .send(Method::POST, "/api/v1/auth/register", None, Some(credentials.clone()))
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["data"]["username"], "carol");
    assert!(body["data"].get("password_hash").is_none());

    let (status, _) = app
        .send(Method::POST, "/api/v1/auth/register", None, Some(credentials))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({"username": "carol", "password": "wrong-password"})),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = app
        .send(
            Method::POST,
            "/api/v1/auth/login",
            None,
            Some(json!({"username": "carol@example.com", "password": "password123"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["token_type"], "Bearer");
    let carol = TestUser {
        id: body["data"]["user"]["id"].as_str().unwrap().to_string(),
        token: body["data"]["token"].as_str().unwrap().to_string(),
    };

    let (status, body) = app.send(Method::GET, "/api/v1/auth/me", Some(&carol), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], carol.id.as_str());

    let (status, _) = app.send(Method::GET, "/api/v1/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn openapi_document_carries_operation_metadata() {
    let app = TestApp::new().await;
    let (status, doc) = app.send(Method::GET, "/api-doc/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);

    for meta in super::docs::all_operations() {
        let method = format!("{:?}", meta.method).to_lowercase();
        let operation = &doc["paths"][meta.path][&method];
        assert_eq!(operation["summary"], meta.summary, "{method} {}", meta.path);
        assert_eq!(operation["description"], meta.description);
        assert_eq!(operation["tags"][0], meta.tag);
        let secured = operation.get("security").is_some();
        assert_eq!(
            secured,
            meta.auth == super::docs::AuthRequirement::Authenticated,
            "{method} {}",
            meta.path
        );
    }
    assert!(doc["components"]["securitySchemes"]["bearer_auth"].is_object());
}

#[tokio::test]
async fn health_and_metrics_are_public() {
    let app = TestApp::new().await;

    let (status, body) = app.send(Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}
