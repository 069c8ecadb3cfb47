use thiserror::Error;

/// Top-level error type for the Mindleap client workspace.
#[derive(Error, Debug)]
pub enum MindleapError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for MindleapError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// A graph model that breaks one of the schema rules.
///
/// `owner` fields name the entity or relation type the violation was found in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Graph model name must not be empty")]
    EmptyModelName,

    #[error("{kind} type name must not be empty")]
    EmptyTypeName { kind: &'static str },

    #[error("Property type name must not be empty in {owner}")]
    EmptyPropertyName { owner: String },

    #[error("Duplicate entity type: {type_name}")]
    DuplicateEntityType { type_name: String },

    #[error("Duplicate relation type: {type_name}")]
    DuplicateRelationType { type_name: String },

    #[error("Duplicate property type {property} in {owner}")]
    DuplicateProperty { owner: String, property: String },

    #[error("Labelling property type {property} is not a property of {owner}")]
    UnknownLabellingProperty { owner: String, property: String },

    #[error("Relation {relation} refers to unknown {endpoint} entity type: {entity_type}")]
    DanglingRelationEndpoint {
        relation: String,
        endpoint: &'static str,
        entity_type: String,
    },

    #[error("A graph model named {name} already exists")]
    DuplicateModelName { name: String },
}

pub type Result<T> = std::result::Result<T, MindleapError>;
