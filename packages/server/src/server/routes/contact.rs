use axum::{
    async_trait,
    extract::{Form, FromRequest, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domains::contact::{
    validate, ContactSubmission, RejectReason, ValidationResult, ACK_MESSAGE,
};
use crate::server::app::AppState;
use crate::server::error::ServerFault;

/// Contact payload drawn from either a JSON or a form-encoded body.
pub struct SubmissionBody(pub ContactSubmission);

#[async_trait]
impl<S> FromRequest<S> for SubmissionBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("application/json") {
            match Json::<ContactSubmission>::from_request(req, state).await {
                Ok(Json(submission)) => Ok(Self(submission)),
                Err(rejection) => Err(body_rejection(rejection.status())),
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            match Form::<ContactSubmission>::from_request(req, state).await {
                Ok(Form(submission)) => Ok(Self(submission)),
                Err(rejection) => Err(body_rejection(rejection.status())),
            }
        } else {
            Err((
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(json!({ "error": "Unsupported content type" })),
            )
                .into_response())
        }
    }
}

fn body_rejection(status: StatusCode) -> Response {
    // An over-limit body keeps its 413; everything else is a caller mistake.
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        (status, Json(json!({ "error": "Request body too large" }))).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid request body" })),
        )
            .into_response()
    }
}

/// Validate a submission and hand accepted ones to the delivery sink.
///
/// The 400 body always lists the full canonical `required` set regardless of
/// which subset was absent; the structured reason stays internal.
pub async fn submit_contact_handler(
    State(state): State<AppState>,
    SubmissionBody(submission): SubmissionBody,
) -> Result<Response, ServerFault> {
    match validate(&submission) {
        ValidationResult::Rejected(RejectReason::MissingFields(missing)) => {
            tracing::debug!(?missing, "Contact submission rejected: missing fields");
            Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Missing required fields",
                    "required": ["name", "email", "message"],
                })),
            )
                .into_response())
        }
        ValidationResult::Rejected(RejectReason::InvalidEmailFormat) => {
            tracing::debug!("Contact submission rejected: invalid email format");
            Ok((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid email format" })),
            )
                .into_response())
        }
        ValidationResult::Accepted => {
            state
                .submission_sink
                .deliver(&submission)
                .await
                .map_err(|error| ServerFault::new(state.environment, error))?;
            Ok(Json(json!({ "success": true, "message": ACK_MESSAGE })).into_response())
        }
    }
}
