#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use remodel_naming::demodulize;

use crate::schema::names::{PropertyName, TypeName};
use crate::schema::option::OptionMap;

/// Simple name of the auto-incrementing key type.
pub const SERIAL_TYPE: &str = "Serial";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct PropertyDef {
    pub name: PropertyName,
    /// Possibly qualified, e.g. `DataMapper::Property::String`.
    pub r#type: TypeName,
    #[serde(default, skip_serializing_if = "OptionMap::is_empty")]
    pub options: OptionMap,
}

impl PropertyDef {
    pub fn new(name: impl Into<PropertyName>, r#type: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            r#type: r#type.into(),
            options: OptionMap::new(),
        }
    }

    pub fn with_options(mut self, options: OptionMap) -> Self {
        self.options = options;
        self
    }

    /// The unqualified type name.
    pub fn simple_type(&self) -> &str {
        demodulize(&self.r#type)
    }

    pub fn is_serial(&self) -> bool {
        self.simple_type() == SERIAL_TYPE
    }

    /// Serial properties are always keys; anything else needs a truthy `key` option.
    pub fn is_key(&self) -> bool {
        self.is_serial() || self.options.is_set("key")
    }
}
