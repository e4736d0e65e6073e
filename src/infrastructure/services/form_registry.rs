//! In-memory registry of mounted project forms

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;
use uuid::Uuid;

use super::form_controller::ProjectFormController;
use crate::domain::{DomainError, PredictionClient};

/// One controller per mounted view, all sharing the injected client
#[derive(Debug)]
pub struct FormRegistry {
    client: Arc<dyn PredictionClient>,
    forms: RwLock<HashMap<Uuid, Arc<ProjectFormController>>>,
}

impl FormRegistry {
    pub fn new(client: Arc<dyn PredictionClient>) -> Self {
        Self {
            client,
            forms: RwLock::new(HashMap::new()),
        }
    }

    /// Mount a new form with default state
    pub fn create(&self) -> Result<(Uuid, Arc<ProjectFormController>), DomainError> {
        let id = Uuid::new_v4();
        let controller = Arc::new(ProjectFormController::new(self.client.clone()));

        self.forms
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?
            .insert(id, controller.clone());

        debug!(form_id = %id, "Form created");
        Ok((id, controller))
    }

    pub fn get(&self, id: &Uuid) -> Result<Arc<ProjectFormController>, DomainError> {
        self.forms
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("Form '{}' not found", id)))
    }

    /// Unmount a form. A submission still in flight completes against the
    /// detached controller and is then dropped with it.
    pub fn remove(&self, id: &Uuid) -> Result<(), DomainError> {
        let removed = self
            .forms
            .write()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?
            .remove(id);

        if removed.is_none() {
            return Err(DomainError::not_found(format!("Form '{}' not found", id)));
        }

        debug!(form_id = %id, "Form removed");
        Ok(())
    }

    pub fn len(&self) -> Result<usize, DomainError> {
        self.forms
            .read()
            .map(|f| f.len())
            .map_err(|_| DomainError::internal("Failed to acquire lock"))
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len()? == 0)
    }
}
