#[cfg(feature = "cli")]
use clap::ValueEnum;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How an option pair is written in the rendered source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum OptionSyntax {
    /// `:required => true`
    #[default]
    HashRocket,
    /// `required: true`
    Keyword,
}

impl OptionSyntax {
    /// Returns true when pairs are written as `:name => value`.
    pub fn is_hash_rocket(self) -> bool {
        matches!(self, OptionSyntax::HashRocket)
    }

    /// Returns true when pairs are written as `name: value`.
    pub fn is_keyword(self) -> bool {
        matches!(self, OptionSyntax::Keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::OptionSyntax;

    #[test]
    fn default_is_hash_rocket() {
        assert_eq!(OptionSyntax::default(), OptionSyntax::HashRocket);
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&OptionSyntax::HashRocket).unwrap(),
            "\"hash_rocket\""
        );
        let parsed: OptionSyntax = serde_json::from_str("\"keyword\"").unwrap();
        assert_eq!(parsed, OptionSyntax::Keyword);
    }
}
