//! Router-level contract tests for the HTTP boundary.
//!
//! Each test drives the real router in-process via `tower::ServiceExt::oneshot`
//! and asserts on status codes, headers, and JSON bodies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use site_core::domains::contact::{ContactSubmission, LogSink, SubmissionSink};
use site_core::server::build_app;
use site_core::{Config, Environment};

const ALLOWED_ORIGIN: &str = "http://localhost:3000";

fn test_config() -> Config {
    Config {
        port: 0,
        allowed_origins: vec![ALLOWED_ORIGIN.to_string()],
        environment: Environment::Development,
    }
}

fn app() -> Router {
    build_app(&test_config(), Arc::new(LogSink))
}

/// Sink that refuses every delivery, for exercising the 500 path.
struct FailingSink;

#[async_trait::async_trait]
impl SubmissionSink for FailingSink {
    async fn deliver(&self, _submission: &ContactSubmission) -> anyhow::Result<()> {
        anyhow::bail!("mail relay unreachable")
    }
}

fn app_with_failing_sink(environment: Environment) -> Router {
    let config = Config {
        environment,
        ..test_config()
    };
    build_app(&config, Arc::new(FailingSink))
}

async fn get(app: Router, path: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn post_json(app: Router, path: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// --- /api/health ---

#[tokio::test]
async fn health_is_always_healthy_with_nonnegative_uptime() {
    let response = get(app(), "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

// --- /api/offices ---

#[tokio::test]
async fn offices_returns_eight_records_in_fixed_order() {
    let response = get(app(), "/api/offices").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let offices = body.as_array().unwrap();
    assert_eq!(offices.len(), 8);

    let ids: Vec<&str> = offices.iter().map(|o| o["id"].as_str().unwrap()).collect();
    assert_eq!(
        ids,
        vec![
            "los-angeles",
            "new-york",
            "nashville",
            "london",
            "chicago",
            "washington-dc",
            "miami",
            "sydney",
        ]
    );

    let unique: std::collections::HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());

    // Multi-line address and international phone formatting kept verbatim.
    assert_eq!(
        offices[3]["address"].as_str().unwrap(),
        "100 New Oxford St\nLondon WC1A 1HB"
    );
    assert_eq!(offices[6]["phone"].as_str().unwrap(), "+1 (305) 447-6382");
}

#[tokio::test]
async fn offices_responses_are_byte_identical_across_requests() {
    let app = app();
    let first = body_bytes(get(app.clone(), "/api/offices").await).await;
    let second = body_bytes(get(app, "/api/offices").await).await;
    assert_eq!(first, second);
}

// --- /api/contact ---

#[tokio::test]
async fn contact_accepts_a_valid_submission() {
    let response = post_json(
        app(),
        "/api/contact",
        json!({ "name": "Jo", "email": "jo@example.com", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for your message. We will get back to you soon."
    );
}

#[tokio::test]
async fn contact_rejects_missing_fields_with_full_required_list() {
    let response = post_json(
        app(),
        "/api/contact",
        json!({ "name": "Jo", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required fields");
    assert_eq!(body["required"], json!(["name", "email", "message"]));
}

#[tokio::test]
async fn required_list_is_invariant_to_which_fields_were_missing() {
    let bodies = [
        json!({}),
        json!({ "email": "jo@example.com" }),
        json!({ "name": "Jo", "email": "jo@example.com" }),
        json!({ "name": "", "email": "", "message": "" }),
    ];

    for payload in bodies {
        let response = post_json(app(), "/api/contact", payload.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {payload}");
        let body = body_json(response).await;
        assert_eq!(body["required"], json!(["name", "email", "message"]));
    }
}

#[tokio::test]
async fn contact_rejects_invalid_email_format() {
    for email in ["not-an-email", "missing-dot@domain", "@nodomain.com"] {
        let response = post_json(
            app(),
            "/api/contact",
            json!({ "name": "Jo", "email": email, "message": "Hi" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid email format", "email {email:?}");
    }
}

#[tokio::test]
async fn contact_accepts_form_encoded_bodies() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Jo&email=jo%40example.com&subject=Hello&message=Hi",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn contact_rejects_malformed_json_as_bad_request() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn contact_rejects_unsupported_content_types() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("name=Jo"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn contact_caps_the_request_body_at_ten_megabytes() {
    let oversized = format!(
        "{{\"name\":\"Jo\",\"email\":\"jo@example.com\",\"message\":\"{}\"}}",
        "x".repeat(10 * 1024 * 1024)
    );
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(oversized))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn failed_delivery_returns_500_with_detail_in_development() {
    let response = post_json(
        app_with_failing_sink(Environment::Development),
        "/api/contact",
        json!({ "name": "Jo", "email": "jo@example.com", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["message"], "mail relay unreachable");
}

#[tokio::test]
async fn failed_delivery_hides_detail_in_production() {
    let response = post_json(
        app_with_failing_sink(Environment::Production),
        "/api/contact",
        json!({ "name": "Jo", "email": "jo@example.com", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["message"], "Something went wrong");
}

#[tokio::test]
async fn rejected_submissions_never_reach_the_sink() {
    // Validation failures are caller mistakes, not server faults, even when
    // delivery itself would fail.
    let response = post_json(
        app_with_failing_sink(Environment::Development),
        "/api/contact",
        json!({ "name": "Jo", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// --- pages and fallback ---

#[tokio::test]
async fn root_and_contact_serve_the_page_document() {
    for path in ["/", "/contact"] {
        let response = get(app(), path).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body.contains("contact-form"));
    }
}

#[tokio::test]
async fn unmatched_routes_get_the_page_document_with_404() {
    let response = get(app(), "/definitely/not/a/route").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("contact-form"));
}

// --- static assets ---

#[tokio::test]
async fn static_assets_carry_long_lived_cache_validators() {
    let response = get(app(), "/styles/main.css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=31536000"
    );
    assert!(response.headers().contains_key(header::ETAG));
}

#[tokio::test]
async fn matching_if_none_match_returns_304() {
    let first = get(app(), "/styles/main.css").await;
    let etag = first
        .headers()
        .get(header::ETAG)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let response = app()
        .oneshot(
            Request::builder()
                .uri("/styles/main.css")
                .header(header::IF_NONE_MATCH, &etag)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    assert!(body_bytes(response).await.is_empty());
}

// --- cross-cutting policies ---

#[tokio::test]
async fn security_headers_are_applied_to_every_response() {
    for path in ["/api/health", "/styles/main.css", "/no-such-page"] {
        let response = get(app(), path).await;
        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff",
            "path {path}"
        );
        let csp = response
            .headers()
            .get(header::CONTENT_SECURITY_POLICY)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(csp.contains("default-src 'self'"));
        assert!(csp.contains("object-src 'none'"));
        assert!(csp.contains("upgrade-insecure-requests"));
    }
}

#[tokio::test]
async fn cors_allows_listed_origins_with_credentials() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, ALLOWED_ORIGIN)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        ALLOWED_ORIGIN
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[tokio::test]
async fn cors_withholds_headers_from_unlisted_origins() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "https://evil.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
