//! Prediction domain - requests, results and the client seam

pub mod catalog;
pub mod client;
pub mod entity;

pub use catalog::{describe, is_known, known_models, ModelInfo, DEFAULT_MODEL_NAME};
pub use client::PredictionClient;
#[cfg(test)]
pub use client::MockPredictionClient;
pub use entity::{PredictResponse, PredictionRequest, PredictionResult};
