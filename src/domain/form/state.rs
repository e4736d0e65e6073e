use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::prediction::{PredictionRequest, PredictionResult, DEFAULT_MODEL_NAME};
use crate::domain::DomainError;

/// Editable input fields of a project form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "modelName", alias = "model_name")]
    ModelName,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::ModelName => "modelName",
        }
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "modelName" | "model_name" => Ok(Self::ModelName),
            other => Err(DomainError::validation(format!(
                "Unknown form field '{}'",
                other
            ))),
        }
    }
}

/// What the view should show around the results table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Idle,
    Loading,
    Failed,
}

/// View-local state of one project page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub text: String,
    pub model_name: String,
    pub predictions: PredictionResult,
    /// Submissions sent but not yet resolved
    pub pending: u32,
    pub last_error: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            predictions: PredictionResult::new(),
            pending: 0,
            last_error: None,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite exactly one input field. Any string is accepted.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        match field {
            FormField::Text => self.text = value.into(),
            FormField::ModelName => self.model_name = value.into(),
        }
    }

    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest::new(self.text.clone(), self.model_name.clone())
    }

    pub fn status(&self) -> FormStatus {
        if self.pending > 0 {
            FormStatus::Loading
        } else if self.last_error.is_some() {
            FormStatus::Failed
        } else {
            FormStatus::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = FormState::new();
        assert_eq!(state.text, "");
        assert_eq!(state.model_name, "mock");
        assert!(state.predictions.is_empty());
        assert_eq!(state.status(), FormStatus::Idle);
    }

    #[test]
    fn test_field_updates_are_independent() {
        let mut a = FormState::new();
        a.set_field(FormField::Text, "abc");
        a.set_field(FormField::ModelName, "small");

        let mut b = FormState::new();
        b.set_field(FormField::ModelName, "small");
        b.set_field(FormField::Text, "abc");

        assert_eq!(a, b);
        assert_eq!(a.text, "abc");
        assert_eq!(a.model_name, "small");
        assert!(a.predictions.is_empty());
    }

    #[test]
    fn test_empty_values_are_accepted() {
        let mut state = FormState::new();
        state.set_field(FormField::ModelName, "");
        assert_eq!(state.model_name, "");
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("text".parse::<FormField>().unwrap(), FormField::Text);
        assert_eq!("modelName".parse::<FormField>().unwrap(), FormField::ModelName);
        assert_eq!("model_name".parse::<FormField>().unwrap(), FormField::ModelName);
        assert!("predictions".parse::<FormField>().is_err());
    }

    #[test]
    fn test_status_prefers_loading_over_failed() {
        let mut state = FormState::new();
        state.last_error = Some("boom".to_string());
        assert_eq!(state.status(), FormStatus::Failed);

        state.pending = 1;
        assert_eq!(state.status(), FormStatus::Loading);
    }

    #[test]
    fn test_serializes_for_view() {
        let state = FormState::new();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["modelName"], "mock");
        assert_eq!(json["predictions"], serde_json::json!({}));
        assert_eq!(json["lastError"], serde_json::Value::Null);
    }
}
