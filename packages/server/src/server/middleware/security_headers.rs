use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

// Allowed third-party origins match what the contact page actually loads:
// the agency CDN for styles/images and Google Tag Manager / Analytics for
// the optional collector.
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
     style-src 'self' 'unsafe-inline' https://www.wmeagency.com https://dsqvyt2qb7cgs.cloudfront.net; \
     script-src 'self' 'unsafe-inline' https://www.googletagmanager.com https://www.wmeagency.com; \
     img-src 'self' data: https: https://dsqvyt2qb7cgs.cloudfront.net; \
     font-src 'self' https: data:; \
     connect-src 'self' https://www.google-analytics.com https://www.googletagmanager.com; \
     frame-src 'self' https://www.googletagmanager.com; \
     object-src 'none'; \
     upgrade-insecure-requests";

/// Apply the fixed security response headers to every response.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    );
    response
}
