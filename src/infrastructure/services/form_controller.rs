//! Controller mediating between view input events and the prediction client

use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, info, warn};

use crate::domain::{DomainError, FormField, FormState, PredictionClient, PredictionResult};

/// Holds the state of one mounted project page
#[derive(Debug)]
pub struct ProjectFormController {
    client: Arc<dyn PredictionClient>,
    state: RwLock<FormState>,
}

/// Decrements the in-flight counter even if the submission future is dropped
struct InFlight<'a>(&'a RwLock<FormState>);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.0.write().unwrap_or_else(PoisonError::into_inner);
        state.pending = state.pending.saturating_sub(1);
    }
}

impl ProjectFormController {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        Self {
            client,
            state: RwLock::new(FormState::default()),
        }
    }

    /// Snapshot of the current state for rendering
    pub fn state(&self) -> Result<FormState, DomainError> {
        self.state
            .read()
            .map(|s| s.clone())
            .map_err(|_| DomainError::internal("Failed to acquire lock"))
    }

    pub fn on_field_change(
        &self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        debug!(field = field.as_str(), "Form field changed");
        state.set_field(field, value);
        Ok(())
    }

    /// Same as [`Self::on_field_change`], with the field given by its view name
    pub fn on_named_field_change(
        &self,
        field_name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        let field = field_name.parse::<FormField>()?;
        self.on_field_change(field, value)
    }

    /// Send the current input to the prediction service.
    ///
    /// A success replaces `predictions` wholesale and clears `last_error`. A
    /// failure records `last_error` and leaves `predictions` as they were.
    /// Overlapping submissions are not serialized: whichever resolves last
    /// wins.
    pub async fn submit(&self) -> Result<PredictionResult, DomainError> {
        let request = {
            let mut state = self
                .state
                .write()
                .map_err(|_| DomainError::internal("Failed to acquire lock"))?;
            state.pending += 1;
            state.to_request()
        };
        let _in_flight = InFlight(&self.state);

        debug!(model_name = %request.model_name, "Submitting prediction request");
        let outcome = self.client.predict(&request).await;

        // The response is already in hand; a poisoned lock must not discard it.
        let mut state = self.state.write().unwrap_or_else(|poisoned| {
            warn!("Form state lock poisoned, recovering to record the response");
            poisoned.into_inner()
        });

        match &outcome {
            Ok(predictions) => {
                state.predictions = predictions.clone();
                state.last_error = None;
            }
            Err(e) => {
                info!(error = %e, "Prediction failed, keeping previous results");
                state.last_error = Some(e.to_string());
            }
        }

        outcome
    }
}
