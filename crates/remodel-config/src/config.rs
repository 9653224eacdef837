#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::option_syntax::OptionSyntax;

/// Module included by every rendered model to mark it as a persistent resource.
pub const DEFAULT_RESOURCE_MODULE: &str = "DataMapper::Resource";

/// Spaces per indentation level inside a model body.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

fn default_resource_module() -> String {
    DEFAULT_RESOURCE_MODULE.to_string()
}

fn default_indent_width() -> usize {
    DEFAULT_INDENT_WIDTH
}

/// Top-level remodel rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RemodelConfig {
    /// Module named by the `include` line of each model.
    #[serde(default = "default_resource_module")]
    pub resource_module: String,
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
    #[serde(default)]
    pub option_syntax: OptionSyntax,
}

impl Default for RemodelConfig {
    fn default() -> Self {
        Self {
            resource_module: default_resource_module(),
            indent_width: default_indent_width(),
            option_syntax: OptionSyntax::default(),
        }
    }
}

impl RemodelConfig {
    /// Module named by the `include` line.
    pub fn resource_module(&self) -> &str {
        &self.resource_module
    }

    /// Indentation prefix for lines inside a model body.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }

    /// Preferred option pair syntax.
    pub fn option_syntax(&self) -> OptionSyntax {
        self.option_syntax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remodel_config_default() {
        let config = RemodelConfig::default();

        assert_eq!(config.resource_module, "DataMapper::Resource");
        assert_eq!(config.indent_width, 2);
        assert_eq!(config.option_syntax, OptionSyntax::HashRocket);
    }

    #[test]
    fn test_remodel_config_deserialize_partial() {
        let config: RemodelConfig = serde_json::from_str(r#"{"indentWidth": 4}"#).unwrap();

        assert_eq!(config.resource_module(), DEFAULT_RESOURCE_MODULE);
        assert_eq!(config.indent(), "    ");
        assert_eq!(config.option_syntax(), OptionSyntax::HashRocket);
    }

    #[test]
    fn test_remodel_config_deserialize_full() {
        let config: RemodelConfig = serde_json::from_str(
            r#"{"resourceModule": "Ohm::Model", "indentWidth": 0, "optionSyntax": "keyword"}"#,
        )
        .unwrap();

        assert_eq!(config.resource_module(), "Ohm::Model");
        assert_eq!(config.indent(), "");
        assert!(config.option_syntax().is_keyword());
    }

    #[test]
    fn test_remodel_config_serialize_camel_case() {
        let json = serde_json::to_value(RemodelConfig::default()).unwrap();

        assert_eq!(json["resourceModule"], "DataMapper::Resource");
        assert_eq!(json["indentWidth"], 2);
        assert_eq!(json["optionSyntax"], "hash_rocket");
    }
}
