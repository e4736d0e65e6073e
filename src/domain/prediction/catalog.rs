//! Known prediction models and their descriptions

use serde::Serialize;

pub const DEFAULT_MODEL_NAME: &str = "mock";

/// A model offered by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub name: &'static str,
    pub description: &'static str,
}

const MODELS: &[ModelInfo] = &[
    ModelInfo {
        name: "mock",
        description: "This model is just a mock model. It is not a real model and always returns the same thing.",
    },
    ModelInfo {
        name: "small",
        description: "This model is based on Logistic Regression and TFIDFVectorizer.",
    },
];

pub fn known_models() -> &'static [ModelInfo] {
    MODELS
}

pub fn describe(name: &str) -> Option<&'static str> {
    MODELS.iter().find(|m| m.name == name).map(|m| m.description)
}

pub fn is_known(name: &str) -> bool {
    describe(name).is_some()
}
