//! REST backend for the graph model service.
//!
//! Routes, relative to the configured base URL:
//!
//! | call          | request                          | reply                  |
//! |---------------|----------------------------------|------------------------|
//! | `list`        | `GET /graph-models`              | `[GraphModel]`         |
//! | `get_by_id`   | `GET /graph-models/{id}`         | `GraphModel`           |
//! | `get_by_name` | `GET /graph-models/name/{name}`  | `GraphModel`           |
//! | `store`       | `POST /graph-models`             | `GraphModelResponse`   |
//! | `delete`      | `DELETE /graph-models/{id}`      | `GenericResponse`      |

use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use mindleap_core::config::ServiceConfig;
use mindleap_core::{GenericResponse, GraphModel, GraphModelId, GraphModelResponse};

use crate::backend::{BackendError, GraphModelBackend};

const GRAPH_MODELS: &str = "graph-models";

/// HTTP client for the graph model REST API.
///
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct HttpBackend {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Build a client for the configured service. No request is sent.
    pub fn new(config: &ServiceConfig) -> Result<Self, BackendError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            BackendError::Config(format!("invalid base URL {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::Config(format!(
                "base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        tracing::info!(base_url = %base_url, "Graph model service client ready");
        Ok(Self { base_url, client })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, BackendError> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_service(what).await?;
        decode(response, what).await
    }
}

#[async_trait]
impl GraphModelBackend for HttpBackend {
    #[tracing::instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<GraphModel>, BackendError> {
        self.fetch(self.endpoint(&[GRAPH_MODELS]), "graph models").await
    }

    #[tracing::instrument(skip(self), err)]
    async fn get_by_name(&self, name: &str) -> Result<GraphModel, BackendError> {
        let url = self.endpoint(&[GRAPH_MODELS, "name", name]);
        self.fetch(url, &format!("name {name}")).await
    }

    #[tracing::instrument(skip(self), fields(id = %id), err)]
    async fn get_by_id(&self, id: &GraphModelId) -> Result<GraphModel, BackendError> {
        let id = id.to_string();
        let url = self.endpoint(&[GRAPH_MODELS, &id]);
        self.fetch(url, &format!("id {id}")).await
    }

    #[tracing::instrument(skip(self, model), fields(name = %model.name), err)]
    async fn store(&self, model: &GraphModel) -> Result<GraphModel, BackendError> {
        let response = self
            .client
            .post(self.endpoint(&[GRAPH_MODELS]))
            .json(model)
            .send()
            .await?;
        let response = response.error_for_service(&model.name).await?;
        let reply: GraphModelResponse = decode(response, "store").await?;

        if !reply.is_success() {
            return Err(BackendError::Rejected(
                reply.error_message.unwrap_or_else(|| "no reason given".to_string()),
            ));
        }
        Ok(reply.graph_model.unwrap_or_else(|| model.clone()))
    }

    #[tracing::instrument(skip(self), fields(id = %id), err)]
    async fn delete(&self, id: &GraphModelId) -> Result<(), BackendError> {
        let id = id.to_string();
        let response = self
            .client
            .delete(self.endpoint(&[GRAPH_MODELS, &id]))
            .send()
            .await?;
        let response = response.error_for_service(&format!("id {id}")).await?;
        let reply: GenericResponse = decode(response, "delete").await?;

        if !reply.is_success() {
            return Err(BackendError::Rejected(
                reply.error_message.unwrap_or_else(|| "no reason given".to_string()),
            ));
        }
        Ok(())
    }
}

#[async_trait]
trait ResponseExt {
    /// Map a non-success HTTP status to a [`BackendError`].
    async fn error_for_service(self, what: &str) -> Result<Response, BackendError>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn error_for_service(self, what: &str) -> Result<Response, BackendError> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        if status == StatusCode::NOT_FOUND {
            let message = service_error_message(&body).unwrap_or_else(|| what.to_string());
            return Err(BackendError::NotFound(message));
        }
        Err(BackendError::Http {
            status: status.as_u16(),
            message: service_error_message(&body).unwrap_or(body),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, BackendError> {
    response.json::<T>().await.map_err(|e| {
        BackendError::Decode(format!("unable to parse response for {what}: {e}"))
    })
}

/// The service's own `error_message`, when the body is a `GenericResponse`.
fn service_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<GenericResponse>(body)
        .ok()
        .and_then(|reply| reply.error_message)
}
