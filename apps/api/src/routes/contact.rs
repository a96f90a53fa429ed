use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};

use crate::errors::AppError;
use crate::models::contact::{ContactMessage, ContactSubmission};
use crate::routes::require_admin;
use crate::state::AppState;

/// POST /api/v1/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<(StatusCode, Json<ContactMessage>), AppError> {
    let missing = submission.missing_fields();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }
    let message = state
        .resolver
        .submit_contact_form(submission)
        .await
        .map_err(AppError::ContactNotSent)?;
    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/contact/messages (admin)
pub async fn handle_contact_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<ContactMessage>>, AppError> {
    require_admin(&headers, &state.config)?;
    Ok(Json(state.resolver.contact_messages().await))
}
