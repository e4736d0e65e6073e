//! Domain layer - Core types of the style prediction client

pub mod error;
pub mod form;
pub mod prediction;

pub use error::DomainError;
pub use form::{FormField, FormState, FormStatus};
pub use prediction::{
    ModelInfo, PredictResponse, PredictionClient, PredictionRequest, PredictionResult,
    DEFAULT_MODEL_NAME,
};
