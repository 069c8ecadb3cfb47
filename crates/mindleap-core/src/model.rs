//! Graph model schema types and their fluent builders.
//!
//! A [`GraphModel`] is assembled bottom-up: property models are attached to
//! entity and relation models, which are then added to the graph model.
//!
//! ```
//! # use mindleap_core::model::*;
//! let model = GraphModel::new()
//!     .with_name("Simple Model")
//!     .add_entity_model(
//!         EntityModel::new()
//!             .with_type_name("person")
//!             .with_type_label("Person")
//!             .with_icon_type(IconType::Person)
//!             .add_property_model(
//!                 PropertyModel::new()
//!                     .with_type_name("name")
//!                     .with_type_label("Name")
//!                     .with_value_type(PropertyValueType::String),
//!             )
//!             .with_labelling_property_types(["name"]),
//!     );
//! assert_eq!(model.entity_models.len(), 1);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SchemaError;

// ── Identifiers ──────────────────────────────────────────────────

/// Unique identifier of a stored graph model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct GraphModelId(pub Uuid);

impl GraphModelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GraphModelId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for GraphModelId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for GraphModelId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for GraphModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Enums ─────────────────────────────────────────────────────────

/// Value type of a property.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyValueType {
    #[default]
    String,
    Integer,
    Double,
    Boolean,
    Date,
    DateTime,
}

/// Icon shown for instances of an entity type.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IconType {
    #[default]
    Generic,
    Person,
    Phone,
    Email,
    Organization,
    Location,
    Vehicle,
    Document,
    Account,
    Event,
}

// ── Property ──────────────────────────────────────────────────────

/// A typed field definition attached to an entity or relation type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyModel {
    pub type_name: String,
    #[serde(default)]
    pub type_label: String,
    #[serde(default)]
    pub value_type: PropertyValueType,
}

impl PropertyModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_type_label(mut self, type_label: impl Into<String>) -> Self {
        self.type_label = type_label.into();
        self
    }

    pub fn with_value_type(mut self, value_type: PropertyValueType) -> Self {
        self.value_type = value_type;
        self
    }
}

// ── Shared behavior of entity and relation types ─────────────────

/// Read access shared by entity and relation models.
pub trait TypeModel {
    fn type_name(&self) -> &str;

    fn property_models(&self) -> &[PropertyModel];

    fn labelling_property_types(&self) -> &[String];

    /// Look up a property model by its type name.
    fn property_model(&self, type_name: &str) -> Option<&PropertyModel> {
        self.property_models()
            .iter()
            .find(|p| p.type_name == type_name)
    }

    /// Compute the display label of an instance from its property values.
    ///
    /// Values of the labelling properties are joined with a space, in
    /// labelling order. Missing or empty values are skipped; returns `None`
    /// when nothing remains.
    fn display_label(&self, values: &HashMap<String, String>) -> Option<String> {
        let parts: Vec<&str> = self
            .labelling_property_types()
            .iter()
            .filter_map(|name| values.get(name))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

fn push_unique(labels: &mut Vec<String>, name: String) {
    if !labels.contains(&name) {
        labels.push(name);
    }
}

fn unique_labels<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut labels = Vec::new();
    for name in names {
        push_unique(&mut labels, name.into());
    }
    labels
}

// ── Entity ────────────────────────────────────────────────────────

/// A node type definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityModel {
    pub type_name: String,
    #[serde(default)]
    pub type_label: String,
    #[serde(default)]
    pub icon_type: IconType,
    #[serde(default)]
    pub property_models: Vec<PropertyModel>,
    #[serde(default)]
    pub labelling_property_types: Vec<String>,
}

impl EntityModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_type_label(mut self, type_label: impl Into<String>) -> Self {
        self.type_label = type_label.into();
        self
    }

    pub fn with_icon_type(mut self, icon_type: IconType) -> Self {
        self.icon_type = icon_type;
        self
    }

    /// Append a property model. Duplicate type names are kept and reported
    /// by validation when the graph model is stored.
    pub fn add_property_model(mut self, property_model: PropertyModel) -> Self {
        self.property_models.push(property_model);
        self
    }

    /// Replace the labelling property set.
    pub fn with_labelling_property_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labelling_property_types = unique_labels(names);
        self
    }

    pub fn add_labelling_property_type(mut self, name: impl Into<String>) -> Self {
        push_unique(&mut self.labelling_property_types, name.into());
        self
    }
}

impl TypeModel for EntityModel {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn property_models(&self) -> &[PropertyModel] {
        &self.property_models
    }

    fn labelling_property_types(&self) -> &[String] {
        &self.labelling_property_types
    }
}

// ── Relation ──────────────────────────────────────────────────────

/// An edge type definition between two entity types.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationModel {
    pub type_name: String,
    #[serde(default)]
    pub type_label: String,
    pub from_entity_type: String,
    pub to_entity_type: String,
    #[serde(default)]
    pub property_models: Vec<PropertyModel>,
    #[serde(default)]
    pub labelling_property_types: Vec<String>,
}

impl RelationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn with_type_label(mut self, type_label: impl Into<String>) -> Self {
        self.type_label = type_label.into();
        self
    }

    pub fn with_from_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.from_entity_type = entity_type.into();
        self
    }

    pub fn with_to_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.to_entity_type = entity_type.into();
        self
    }

    pub fn add_property_model(mut self, property_model: PropertyModel) -> Self {
        self.property_models.push(property_model);
        self
    }

    /// Replace the labelling property set.
    pub fn with_labelling_property_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labelling_property_types = unique_labels(names);
        self
    }

    pub fn add_labelling_property_type(mut self, name: impl Into<String>) -> Self {
        push_unique(&mut self.labelling_property_types, name.into());
        self
    }
}

impl TypeModel for RelationModel {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn property_models(&self) -> &[PropertyModel] {
        &self.property_models
    }

    fn labelling_property_types(&self) -> &[String] {
        &self.labelling_property_types
    }
}

// ── Graph model ───────────────────────────────────────────────────

/// A named schema of entity and relation types.
///
/// `id` may be left unset; the backend assigns one on store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphModel {
    #[serde(default)]
    pub id: Option<GraphModelId>,
    pub name: String,
    #[serde(default)]
    pub entity_models: Vec<EntityModel>,
    #[serde(default)]
    pub relation_models: Vec<RelationModel>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<GraphModelId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn add_entity_model(mut self, entity_model: EntityModel) -> Self {
        self.entity_models.push(entity_model);
        self
    }

    pub fn add_relation_model(mut self, relation_model: RelationModel) -> Self {
        self.relation_models.push(relation_model);
        self
    }

    pub fn entity_model(&self, type_name: &str) -> Option<&EntityModel> {
        self.entity_models.iter().find(|e| e.type_name == type_name)
    }

    pub fn relation_model(&self, type_name: &str) -> Option<&RelationModel> {
        self.relation_models
            .iter()
            .find(|r| r.type_name == type_name)
    }

    /// Check the schema rules. See [`crate::validate::validate_graph_model`].
    pub fn validate(&self) -> Result<(), SchemaError> {
        crate::validate::validate_graph_model(self)
    }
}
