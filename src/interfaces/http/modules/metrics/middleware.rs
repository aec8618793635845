//! HTTP request metrics
//!
//! - `http_requests_total`: counter labelled `method`, `route`, `status`
//! - `http_request_duration_seconds`: histogram labelled `method`, `route`
//!
//! `route` is the matched route template (`/api/v1/listings/{id}/`), so
//! per-object URLs do not create new series. Unmatched requests share the
//! `unmatched` label.

use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};

pub const REQUESTS_TOTAL: &str = "http_requests_total";
pub const REQUEST_DURATION: &str = "http_request_duration_seconds";

/// Register metric descriptions with the installed recorder.
pub fn describe_http_metrics() {
    describe_counter!(REQUESTS_TOTAL, "Total HTTP requests handled");
    describe_histogram!(REQUEST_DURATION, Unit::Seconds, "HTTP request latency");
}

pub async fn http_metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().as_str().to_owned();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| "unmatched".to_owned(), |p| p.as_str().to_owned());

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed().as_secs_f64();

    let status = response.status().as_u16().to_string();
    counter!(REQUESTS_TOTAL, "method" => method.clone(), "route" => route.clone(), "status" => status)
        .increment(1);
    histogram!(REQUEST_DURATION, "method" => method, "route" => route).record(elapsed);

    response
}
