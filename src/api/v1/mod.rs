//! v1 endpoints for the project pages

pub mod forms;
pub mod models;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/models", get(models::list_models))
        .route("/forms", post(forms::create_form))
        .route(
            "/forms/{form_id}",
            get(forms::get_form)
                .patch(forms::change_field)
                .delete(forms::delete_form),
        )
        .route("/forms/{form_id}/submit", post(forms::submit_form))
}
