//! Form session handlers - the view layer's read/write surface

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, FieldChangeRequest, FormResponse, Json};

/// POST /api/v1/forms
pub async fn create_form(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<FormResponse>), ApiError> {
    let (id, controller) = state.forms.create()?;
    let response = FormResponse::new(id, controller.state()?);

    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/forms/{form_id}
pub async fn get_form(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
) -> Result<Json<FormResponse>, ApiError> {
    let controller = state.forms.get(&form_id)?;
    Ok(Json(FormResponse::new(form_id, controller.state()?)))
}

/// PATCH /api/v1/forms/{form_id}
pub async fn change_field(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
    Json(request): Json<FieldChangeRequest>,
) -> Result<Json<FormResponse>, ApiError> {
    debug!(form_id = %form_id, field = %request.field, "Changing form field");

    let controller = state.forms.get(&form_id)?;
    controller.on_named_field_change(&request.field, request.value)?;

    Ok(Json(FormResponse::new(form_id, controller.state()?)))
}

/// POST /api/v1/forms/{form_id}/submit
pub async fn submit_form(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
) -> Result<Json<FormResponse>, ApiError> {
    let controller = state.forms.get(&form_id)?;
    controller.submit().await?;

    Ok(Json(FormResponse::new(form_id, controller.state()?)))
}

/// DELETE /api/v1/forms/{form_id}
pub async fn delete_form(
    State(state): State<AppState>,
    Path(form_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.forms.remove(&form_id)?;
    Ok(StatusCode::NO_CONTENT)
}
