//! In-process reference backend.
//!
//! Applies the same acceptance rules as the service: schema validation,
//! unique model names, id assignment, and upsert by id.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use mindleap_core::{GraphModel, GraphModelId, SchemaError};

use crate::backend::{BackendError, GraphModelBackend};

/// Graph model catalog held in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    models: Mutex<Vec<GraphModel>>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.catalog().len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog().is_empty()
    }

    fn catalog(&self) -> MutexGuard<'_, Vec<GraphModel>> {
        self.models.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl GraphModelBackend for InMemoryBackend {
    async fn list(&self) -> Result<Vec<GraphModel>, BackendError> {
        Ok(self.catalog().clone())
    }

    async fn get_by_name(&self, name: &str) -> Result<GraphModel, BackendError> {
        self.catalog()
            .iter()
            .find(|m| m.name == name)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(format!("name {name}")))
    }

    async fn get_by_id(&self, id: &GraphModelId) -> Result<GraphModel, BackendError> {
        self.catalog()
            .iter()
            .find(|m| m.id.as_ref() == Some(id))
            .cloned()
            .ok_or_else(|| BackendError::NotFound(format!("id {id}")))
    }

    async fn store(&self, model: &GraphModel) -> Result<GraphModel, BackendError> {
        model.validate()?;

        let mut stored = model.clone();
        let id = *stored.id.get_or_insert_with(GraphModelId::new);

        let mut models = self.catalog();
        if models
            .iter()
            .any(|m| m.name == stored.name && m.id != Some(id))
        {
            return Err(SchemaError::DuplicateModelName {
                name: stored.name.clone(),
            }
            .into());
        }

        match models.iter_mut().find(|m| m.id == Some(id)) {
            Some(existing) => {
                *existing = stored.clone();
                tracing::debug!(%id, name = %stored.name, "Graph model replaced");
            }
            None => {
                models.push(stored.clone());
                tracing::debug!(%id, name = %stored.name, "Graph model added");
            }
        }

        Ok(stored)
    }

    async fn delete(&self, id: &GraphModelId) -> Result<(), BackendError> {
        let mut models = self.catalog();
        let before = models.len();
        models.retain(|m| m.id.as_ref() != Some(id));

        if models.len() == before {
            return Err(BackendError::NotFound(format!("id {id}")));
        }
        Ok(())
    }
}
