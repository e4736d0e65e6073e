use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{FormState, FormStatus, ModelInfo};

/// A form session as the view sees it
#[derive(Debug, Clone, Serialize)]
pub struct FormResponse {
    pub id: Uuid,
    pub status: FormStatus,
    pub state: FormState,
}

impl FormResponse {
    pub fn new(id: Uuid, state: FormState) -> Self {
        Self {
            id,
            status: state.status(),
            state,
        }
    }
}

/// Body of `PATCH /api/v1/forms/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct FieldChangeRequest {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelsResponse {
    pub default: &'static str,
    pub data: Vec<ModelInfo>,
}
