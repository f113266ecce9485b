use axum::{extract::State, http::StatusCode, Json};
use bytes::Bytes;
use tracing::instrument;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::result::PromptResult;
use crate::state::AppState;

/// POST /api/v1/enhance-resume
///
/// The body is taken as raw bytes so malformed JSON surfaces as a validation
/// error through `AppError`, like every other failure.
#[instrument(
    name = "enhance_resume",
    skip_all,
    fields(request_id = %Uuid::new_v4(), kind = tracing::field::Empty)
)]
pub async fn handle_enhance(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PromptResult>, AppError> {
    let result = state.gateway.handle_json(&body).await?;
    Ok(Json(result))
}

/// OPTIONS /api/v1/enhance-resume
///
/// Browser preflights are answered by the CORS layer; this covers bare
/// OPTIONS requests.
pub async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}
