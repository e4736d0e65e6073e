use crate::api::types::{Json, ModelsResponse};
use crate::domain::{prediction::known_models, DEFAULT_MODEL_NAME};

/// GET /api/v1/models
pub async fn list_models() -> Json<ModelsResponse> {
    Json(ModelsResponse {
        default: DEFAULT_MODEL_NAME,
        data: known_models().to_vec(),
    })
}
