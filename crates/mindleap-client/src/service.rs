//! Service facade over a graph model backend.
//!
//! Every call returns either the requested value or a response object with
//! `status == ERROR` and an `error_message`. Backend failures never escape as
//! Rust errors from this layer.

use std::sync::Arc;

use mindleap_core::config::ServiceConfig;
use mindleap_core::{
    GenericResponse, GraphModel, GraphModelId, GraphModelResponse, GraphModelsResponse,
};

use crate::backend::{BackendError, GraphModelBackend};
use crate::http::HttpBackend;
use crate::memory::InMemoryBackend;

/// Client-side entry point for graph model operations.
///
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct GraphModelService {
    backend: Arc<dyn GraphModelBackend>,
}

impl GraphModelService {
    pub fn new(backend: impl GraphModelBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Use a backend that the caller keeps a handle to.
    pub fn with_shared_backend(backend: Arc<dyn GraphModelBackend>) -> Self {
        Self { backend }
    }

    /// Build a service talking to the REST API described by `config`.
    pub fn connect(config: &ServiceConfig) -> Result<Self, BackendError> {
        Ok(Self::new(HttpBackend::new(config)?))
    }

    /// Build a service over a fresh in-memory catalog.
    pub fn in_memory() -> Self {
        Self::new(InMemoryBackend::new())
    }

    /// Fetch all stored graph models.
    #[tracing::instrument(skip(self))]
    pub async fn get_graph_models(&self) -> Result<Vec<GraphModel>, GraphModelsResponse> {
        self.backend.list().await.map_err(|e| {
            tracing::warn!(error = %e, "Listing graph models failed");
            GraphModelsResponse::error(e.to_string())
        })
    }

    /// Look up a graph model by its unique name.
    #[tracing::instrument(skip(self))]
    pub async fn get_graph_model_by_name(
        &self,
        name: &str,
    ) -> Result<GraphModel, GraphModelResponse> {
        self.backend.get_by_name(name).await.map_err(|e| {
            tracing::warn!(error = %e, "Graph model lookup by name failed");
            GraphModelResponse::error(e.to_string())
        })
    }

    /// Look up a graph model by id.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn get_graph_model_by_id(
        &self,
        id: &GraphModelId,
    ) -> Result<GraphModel, GraphModelResponse> {
        self.backend.get_by_id(id).await.map_err(|e| {
            tracing::warn!(error = %e, "Graph model lookup by id failed");
            GraphModelResponse::error(e.to_string())
        })
    }

    /// Create or replace a graph model.
    ///
    /// On success the response carries the model as stored, including the
    /// id assigned by the backend when the draft had none.
    #[tracing::instrument(skip(self, model), fields(name = %model.name))]
    pub async fn store_graph_model(&self, model: &GraphModel) -> GraphModelResponse {
        match self.backend.store(model).await {
            Ok(stored) => {
                if let Some(id) = &stored.id {
                    tracing::info!(%id, "Graph model stored");
                }
                GraphModelResponse::success(stored)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Graph model rejected");
                GraphModelResponse::error(e.to_string())
            }
        }
    }

    /// Delete a graph model by id. Unknown ids yield an error response.
    #[tracing::instrument(skip(self), fields(id = %id))]
    pub async fn delete_graph_model(&self, id: &GraphModelId) -> GenericResponse {
        match self.backend.delete(id).await {
            Ok(()) => {
                tracing::info!("Graph model deleted");
                GenericResponse::success()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Graph model delete failed");
                GenericResponse::error(e.to_string())
            }
        }
    }

    /// Delete every stored graph model.
    ///
    /// Keeps going after a failed delete; the first failure is returned.
    /// A listed model without an id cannot be deleted and counts as a failure.
    #[tracing::instrument(skip(self))]
    pub async fn delete_all_graph_models(&self) -> GenericResponse {
        let models = match self.get_graph_models().await {
            Ok(models) => models,
            Err(response) => return response.into(),
        };

        let mut first_failure = None;
        let mut deleted = 0usize;
        for model in &models {
            let response = match &model.id {
                Some(id) => self.delete_graph_model(id).await,
                None => {
                    tracing::warn!(name = %model.name, "Listed graph model has no id");
                    GenericResponse::error(format!(
                        "Graph model {} has no id and cannot be deleted",
                        model.name
                    ))
                }
            };
            if response.is_success() {
                deleted += 1;
            } else if first_failure.is_none() {
                first_failure = Some(response);
            }
        }

        tracing::info!(deleted, total = models.len(), "Graph model catalog purged");
        first_failure.unwrap_or_else(GenericResponse::success)
    }
}
