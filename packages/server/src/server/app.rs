//! Application setup and router configuration.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{Config, Environment};
use crate::domains::contact::SubmissionSink;
use crate::domains::offices::OfficeDirectory;
use crate::server::error::ServerFault;
use crate::server::middleware::security_headers;
use crate::server::routes::{health_handler, list_offices_handler, submit_contact_handler};
use crate::server::static_files::{serve_asset, serve_contact_page};

/// Maximum accepted request body (JSON and form submissions).
const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Shared application state
///
/// Everything here is read-only after startup: the office directory never
/// changes and the sink is stateless, so requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    pub environment: Environment,
    pub started_at: Instant,
    pub offices: Arc<OfficeDirectory>,
    pub submission_sink: Arc<dyn SubmissionSink>,
}

/// Build the Axum application router
///
/// Explicit routes first, then the static-asset fallback that ends in the
/// 404 page document, then the cross-cutting layers (applied in reverse
/// order - last added runs first).
pub fn build_app(config: &Config, submission_sink: Arc<dyn SubmissionSink>) -> Router {
    let state = AppState {
        environment: config.environment,
        started_at: Instant::now(),
        offices: Arc::new(OfficeDirectory::new()),
        submission_sink,
    };

    // CORS restricted to the configured allow-list, with credentials.
    let origins = parse_allowed_origins(&config.allowed_origins);
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    let environment = config.environment;

    Router::new()
        .route("/", get(serve_contact_page))
        .route("/contact", get(serve_contact_page))
        .route("/api/health", get(health_handler))
        .route("/api/contact", post(submit_contact_handler))
        .route("/api/offices", get(list_offices_handler))
        .fallback(serve_asset)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(
            move |payload: Box<dyn std::any::Any + Send + 'static>| {
                ServerFault::from_panic(environment, payload).into_response()
            },
        ))
        .layer(middleware::from_fn(security_headers))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Parse the configured allow-list into header values, warning about any
/// entry that is not a valid origin so a typo is visible instead of
/// silently disabling CORS for that caller.
fn parse_allowed_origins(configured: &[String]) -> Vec<HeaderValue> {
    let mut origins = Vec::with_capacity(configured.len());
    for origin in configured {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Dropping malformed entry from ALLOWED_ORIGINS");
            }
        }
    }
    origins
}
