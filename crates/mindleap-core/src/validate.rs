//! Schema rules for graph models.
//!
//! Builders never validate; these checks run where a model is accepted for
//! storage, and from the CLI for offline checks.

use std::collections::HashSet;

use crate::error::SchemaError;
use crate::model::{GraphModel, TypeModel};

/// Check a graph model against the schema rules, returning the first violation.
pub fn validate_graph_model(model: &GraphModel) -> Result<(), SchemaError> {
    if model.name.trim().is_empty() {
        return Err(SchemaError::EmptyModelName);
    }

    let mut entity_types = HashSet::new();
    for entity in &model.entity_models {
        if entity.type_name.is_empty() {
            return Err(SchemaError::EmptyTypeName { kind: "Entity" });
        }
        if !entity_types.insert(entity.type_name.as_str()) {
            return Err(SchemaError::DuplicateEntityType {
                type_name: entity.type_name.clone(),
            });
        }
        validate_properties(entity)?;
    }

    let mut relation_types = HashSet::new();
    for relation in &model.relation_models {
        if relation.type_name.is_empty() {
            return Err(SchemaError::EmptyTypeName { kind: "Relation" });
        }
        if !relation_types.insert(relation.type_name.as_str()) {
            return Err(SchemaError::DuplicateRelationType {
                type_name: relation.type_name.clone(),
            });
        }
        validate_properties(relation)?;

        for (endpoint, entity_type) in [
            ("from", &relation.from_entity_type),
            ("to", &relation.to_entity_type),
        ] {
            if !entity_types.contains(entity_type.as_str()) {
                return Err(SchemaError::DanglingRelationEndpoint {
                    relation: relation.type_name.clone(),
                    endpoint,
                    entity_type: entity_type.clone(),
                });
            }
        }
    }

    Ok(())
}

fn validate_properties<T: TypeModel>(owner: &T) -> Result<(), SchemaError> {
    let mut names = HashSet::new();
    for property in owner.property_models() {
        if property.type_name.is_empty() {
            return Err(SchemaError::EmptyPropertyName {
                owner: owner.type_name().to_string(),
            });
        }
        if !names.insert(property.type_name.as_str()) {
            return Err(SchemaError::DuplicateProperty {
                owner: owner.type_name().to_string(),
                property: property.type_name.clone(),
            });
        }
    }

    // Labelling properties must name a property of the same type.
    for label in owner.labelling_property_types() {
        if !names.contains(label.as_str()) {
            return Err(SchemaError::UnknownLabellingProperty {
                owner: owner.type_name().to_string(),
                property: label.clone(),
            });
        }
    }

    Ok(())
}
