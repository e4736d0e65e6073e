use async_trait::async_trait;

use super::entity::{PredictionRequest, PredictionResult};
use crate::domain::DomainError;

/// Anything that can turn a text/model pair into author probabilities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionClient: Send + Sync + std::fmt::Debug {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, DomainError>;
}
