//! Style Predictor
//!
//! Client and form controller for the writing-style prediction API:
//! - `StyleClient` posts text and a model name to `/api/v1/Predictions/predict`
//! - `ProjectFormController` keeps per-view input and the last prediction
//! - An optional HTTP surface exposes form sessions to a view layer

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use crate::config::StyleConfig;
use crate::domain::{DomainError, PredictionClient};
use crate::infrastructure::style::{ClientConfig, HttpClient, StyleClient};

/// Build the prediction client once at startup, for injection into
/// whichever controller needs it.
pub fn create_prediction_client(
    config: &StyleConfig,
) -> Result<Arc<dyn PredictionClient>, DomainError> {
    let http = match config.timeout_secs {
        0 => HttpClient::new(),
        secs => HttpClient::with_timeout(Duration::from_secs(secs))?,
    };

    let client_config = ClientConfig::new(config.host.clone(), &config.port);
    Ok(Arc::new(StyleClient::new(http, client_config)))
}
