use axum::{extract::State, Json};

use crate::domains::offices::OfficeRecord;
use crate::server::app::AppState;

/// The fixed office directory as a JSON array, always 200.
pub async fn list_offices_handler(State(state): State<AppState>) -> Json<Vec<OfficeRecord>> {
    Json(state.offices.list().to_vec())
}
