//! mindleap-core: Graph model schema types for the Mindleap graph model service.
//!
//! This crate provides the types shared by the service client and the CLI:
//! - Graph, entity, relation, and property models with fluent builders
//! - Response objects returned by the service
//! - Schema validation
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod model;
pub mod response;
pub mod validate;

pub use error::{MindleapError, SchemaError};
pub use model::{
    EntityModel, GraphModel, GraphModelId, IconType, PropertyModel, PropertyValueType,
    RelationModel, TypeModel,
};
pub use response::{GenericResponse, GraphModelResponse, GraphModelsResponse, ResponseStatus};
