//! Application state shared by the handlers

use std::sync::Arc;

use crate::domain::PredictionClient;
use crate::infrastructure::services::FormRegistry;

#[derive(Clone, Debug)]
pub struct AppState {
    pub forms: Arc<FormRegistry>,
}

impl AppState {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        Self {
            forms: Arc::new(FormRegistry::new(client)),
        }
    }
}
