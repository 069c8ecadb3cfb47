//! The transport seam between the service facade and a graph model backend.

use async_trait::async_trait;

use mindleap_core::{GraphModel, GraphModelId, SchemaError};

/// Errors from backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Invalid client configuration: {0}")]
    Config(String),

    #[error("Graph model service unreachable: {0}")]
    Transport(String),

    #[error("Graph model service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Graph model not found: {0}")]
    NotFound(String),

    #[error("Graph model rejected: {0}")]
    Rejected(String),

    #[error("Failed to decode service response: {0}")]
    Decode(String),

    #[error("Invalid graph model: {0}")]
    Schema(#[from] SchemaError),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// A store of graph models reachable by the service.
///
/// Implementations own their connection state; every call is a single
/// request/response exchange.
#[async_trait]
pub trait GraphModelBackend: Send + Sync {
    /// All stored graph models, in backend order.
    async fn list(&self) -> Result<Vec<GraphModel>, BackendError>;

    async fn get_by_name(&self, name: &str) -> Result<GraphModel, BackendError>;

    async fn get_by_id(&self, id: &GraphModelId) -> Result<GraphModel, BackendError>;

    /// Upsert a graph model, returning it as stored (with its id assigned).
    async fn store(&self, model: &GraphModel) -> Result<GraphModel, BackendError>;

    async fn delete(&self, id: &GraphModelId) -> Result<(), BackendError>;
}
