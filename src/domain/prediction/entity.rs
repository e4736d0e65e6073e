use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::catalog::DEFAULT_MODEL_NAME;

/// One user-submitted query for the style predictor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub text: String,
    pub model_name: String,
}

impl PredictionRequest {
    pub fn new(text: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model_name: model_name.into(),
        }
    }

    /// Request against the default (`mock`) model
    pub fn with_default_model(text: impl Into<String>) -> Self {
        Self::new(text, DEFAULT_MODEL_NAME)
    }
}

/// Author name to probability, as returned by the prediction service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionResult(HashMap<String, f64>);

impl PredictionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, author: &str) -> Option<f64> {
        self.0.get(author).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(author, p)| (author.as_str(), *p))
    }

    /// Entries ordered by descending probability, ties broken by author name
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl From<HashMap<String, f64>> for PredictionResult {
    fn from(map: HashMap<String, f64>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for PredictionResult {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Wire schema of a successful `/Predictions/predict` response
#[derive(Debug, Clone, Deserialize)]
pub struct PredictResponse {
    pub prediction: PredictionResult,
}
