//! Response objects returned by the graph model service.
//!
//! Every response carries a [`ResponseStatus`]; failed calls also carry an
//! `error_message`. A response is either a success with its payload or an
//! error with a message, never both.

use serde::{Deserialize, Serialize};

use crate::model::GraphModel;

/// Outcome of a service call.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Response without a payload (delete and other commands).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenericResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl GenericResponse {
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            error_message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error_message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Response carrying a single graph model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphModelResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_model: Option<GraphModel>,
}

impl GraphModelResponse {
    pub fn success(graph_model: GraphModel) -> Self {
        Self {
            status: ResponseStatus::Success,
            error_message: None,
            graph_model: Some(graph_model),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error_message: Some(message.into()),
            graph_model: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Response carrying the full list of graph models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphModelsResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default)]
    pub graph_models: Vec<GraphModel>,
}

impl GraphModelsResponse {
    pub fn success(graph_models: Vec<GraphModel>) -> Self {
        Self {
            status: ResponseStatus::Success,
            error_message: None,
            graph_models,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error_message: Some(message.into()),
            graph_models: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<GraphModelResponse> for GenericResponse {
    fn from(response: GraphModelResponse) -> Self {
        Self {
            status: response.status,
            error_message: response.error_message,
        }
    }
}

impl From<GraphModelsResponse> for GenericResponse {
    fn from(response: GraphModelsResponse) -> Self {
        Self {
            status: response.status,
            error_message: response.error_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_screaming_snake() {
        let json = serde_json::to_string(&ResponseStatus::Success).unwrap();
        assert_eq!(json, "\"SUCCESS\"");

        let json = serde_json::to_string(&ResponseStatus::Error).unwrap();
        assert_eq!(json, "\"ERROR\"");
    }

    #[test]
    fn success_omits_error_message() {
        let json = serde_json::to_string(&GenericResponse::success()).unwrap();
        assert_eq!(json, r#"{"status":"SUCCESS"}"#);
    }

    #[test]
    fn error_response_parses_without_payload() {
        let json = r#"{"status":"ERROR","error_message":"Graph model not found"}"#;
        let response: GraphModelResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert!(response.graph_model.is_none());
        assert_eq!(
            response.error_message.as_deref(),
            Some("Graph model not found")
        );
    }

    #[test]
    fn graph_models_response_defaults_to_empty_list() {
        let response: GraphModelsResponse =
            serde_json::from_str(r#"{"status":"SUCCESS"}"#).unwrap();
        assert!(response.is_success());
        assert!(response.graph_models.is_empty());
    }

    #[test]
    fn converts_to_generic_response() {
        let generic: GenericResponse = GraphModelResponse::error("boom").into();
        assert_eq!(generic, GenericResponse::error("boom"));
    }
}
