use std::collections::HashSet;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::names::ModelName;
use crate::schema::property::PropertyDef;
use crate::schema::relationship::{RelationshipDef, RelationshipKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelValidationError {
    #[error("model name must not be empty")]
    EmptyModelName,
    #[error("model '{0}' has a property with an empty name")]
    EmptyPropertyName(String),
    #[error("model '{0}' declares property '{1}' more than once")]
    DuplicateProperty(String, String),
    #[error("model '{0}' has a relationship with an empty name")]
    EmptyRelationshipName(String),
    #[error("model '{0}' declares relationship '{1}' more than once")]
    DuplicateRelationship(String, String),
    #[error("relationship '{0}.{1}' has min {2} greater than max {3}")]
    InvalidCardinality(String, String, u32, u32),
}

/// Metadata of one model as handed over by the host ORM.
///
/// `relationships` is the model's relationship mapping; each entry carries its
/// own name and the vector order is the mapping's iteration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ModelDef {
    pub name: ModelName,
    pub properties: Vec<PropertyDef>,
    #[serde(default)]
    pub relationships: Vec<RelationshipDef>,
}

impl ModelDef {
    pub fn new(name: impl Into<ModelName>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn relationship(mut self, relationship: RelationshipDef) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Key properties in declaration order.
    pub fn key_properties(&self) -> Vec<&PropertyDef> {
        self.properties.iter().filter(|p| p.is_key()).collect()
    }

    /// Always empty for now; foreign keys are not told apart from regular
    /// properties yet.
    pub fn foreign_key_properties(&self) -> Vec<&PropertyDef> {
        Vec::new()
    }

    /// All properties that are neither keys nor foreign keys, in declaration order.
    pub fn regular_properties(&self) -> Vec<&PropertyDef> {
        let foreign_keys = self.foreign_key_properties();
        self.properties
            .iter()
            .filter(|p| !p.is_key())
            .filter(|p| !foreign_keys.iter().any(|fk| fk.name == p.name))
            .collect()
    }

    pub fn relationships_of(&self, kind: &RelationshipKind) -> Vec<&RelationshipDef> {
        self.relationships
            .iter()
            .filter(|r| &r.kind == kind)
            .collect()
    }

    /// A model can only be rendered when it has at least one key property.
    pub fn is_complete(&self) -> bool {
        self.properties.iter().any(PropertyDef::is_key)
    }

    /// Structural checks a metadata layer can run before handing the model on.
    ///
    /// Completeness is not checked here; that is the renderer's gate.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.name.is_empty() {
            return Err(ModelValidationError::EmptyModelName);
        }

        let mut seen = HashSet::new();
        for prop in &self.properties {
            if prop.name.is_empty() {
                return Err(ModelValidationError::EmptyPropertyName(self.name.clone()));
            }
            if !seen.insert(prop.name.as_str()) {
                return Err(ModelValidationError::DuplicateProperty(
                    self.name.clone(),
                    prop.name.clone(),
                ));
            }
        }

        let mut seen = HashSet::new();
        for rel in &self.relationships {
            if rel.name.is_empty() {
                return Err(ModelValidationError::EmptyRelationshipName(
                    self.name.clone(),
                ));
            }
            if !seen.insert(rel.name.as_str()) {
                return Err(ModelValidationError::DuplicateRelationship(
                    self.name.clone(),
                    rel.name.clone(),
                ));
            }
            if let Some(max) = rel.max.filter(|max| rel.min > *max) {
                return Err(ModelValidationError::InvalidCardinality(
                    self.name.clone(),
                    rel.name.clone(),
                    rel.min,
                    max,
                ));
            }
        }

        Ok(())
    }
}
