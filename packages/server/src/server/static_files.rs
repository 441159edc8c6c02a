use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDateTime, Utc};
use rust_embed::RustEmbed;
use sha2::{Digest, Sha256};

/// Page documents embedded at compile time.
#[derive(RustEmbed)]
#[folder = "views"]
pub struct PageAssets;

/// Public assets (stylesheets, images, and the wasm-pack output).
/// Run `wasm-pack build packages/web-client --target web
/// --out-dir ../server/public/scripts --out-name web_client`
/// before building the server.
#[derive(RustEmbed)]
#[folder = "public"]
pub struct PublicAssets;

const CONTACT_PAGE: &str = "contact.html";
// Assets are content-addressed via ETag, so a year-long cache is safe.
const CACHE_CONTROL_VALUE: &str = "public, max-age=31536000";
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Serve the contact page document (the whole site is this one page).
pub async fn serve_contact_page() -> Response {
    contact_page(StatusCode::OK)
}

/// Fallback handler: serve a public asset with cache validators, or the
/// contact page document with a 404 for anything unmatched.
pub async fn serve_asset(uri: Uri, request_headers: HeaderMap) -> Response {
    let path = uri.path().trim_start_matches('/');

    let Some(content) = PublicAssets::get(path) else {
        return contact_page(StatusCode::NOT_FOUND);
    };

    let etag = asset_etag(&content.data);
    let last_modified = content.metadata.last_modified().map(http_date);

    if not_modified(&request_headers, &etag, last_modified.as_deref()) {
        let mut response = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(response.headers_mut(), &etag, last_modified.as_deref());
        return response;
    }

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let mut response =
        ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response();
    put_cache_headers(response.headers_mut(), &etag, last_modified.as_deref());
    response
}

fn contact_page(status: StatusCode) -> Response {
    match PageAssets::get(CONTACT_PAGE) {
        Some(content) => (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            content.data,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

/// Strong ETag from the asset content.
fn asset_etag(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("\"{:x}\"", hasher.finalize())
}

fn put_cache_headers(headers: &mut HeaderMap, etag: &str, last_modified: Option<&str>) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_VALUE),
    );
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert(header::ETAG, value);
    }
    if let Some(last_modified) = last_modified {
        if let Ok(value) = HeaderValue::from_str(last_modified) {
            headers.insert(header::LAST_MODIFIED, value);
        }
    }
}

/// Answer conditional requests: `If-None-Match` wins over
/// `If-Modified-Since`, per the usual precedence.
fn not_modified(headers: &HeaderMap, etag: &str, last_modified: Option<&str>) -> bool {
    if let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
    {
        return value
            .split(',')
            .any(|candidate| candidate.trim() == etag || candidate.trim() == "*");
    }

    if let (Some(value), Some(last_modified)) = (
        headers
            .get(header::IF_MODIFIED_SINCE)
            .and_then(|value| value.to_str().ok()),
        last_modified,
    ) {
        if let (Ok(since), Ok(modified)) = (parse_http_date(value), parse_http_date(last_modified))
        {
            return modified <= since;
        }
    }

    false
}

fn http_date(seconds_since_epoch: u64) -> String {
    DateTime::<Utc>::from_timestamp(seconds_since_epoch as i64, 0)
        .unwrap_or_default()
        .format(HTTP_DATE_FORMAT)
        .to_string()
}

fn parse_http_date(value: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, HTTP_DATE_FORMAT)
}
