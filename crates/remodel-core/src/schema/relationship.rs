use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::names::RelationshipName;
use crate::schema::option::OptionMap;

/// Cardinality category of a relationship.
///
/// Tags the metadata layer produces that are not one of the four known
/// categories are kept as `Other` so the renderer can reject them by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationshipKind {
    ManyToOne,
    OneToOne,
    OneToMany,
    ManyToMany,
    Other(String),
}

impl RelationshipKind {
    /// The known categories, in the order relationships are rendered.
    pub const ORDERED: [RelationshipKind; 4] = [
        RelationshipKind::ManyToOne,
        RelationshipKind::OneToOne,
        RelationshipKind::OneToMany,
        RelationshipKind::ManyToMany,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            RelationshipKind::ManyToOne => "many_to_one",
            RelationshipKind::OneToOne => "one_to_one",
            RelationshipKind::OneToMany => "one_to_many",
            RelationshipKind::ManyToMany => "many_to_many",
            RelationshipKind::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RelationshipKind::Other(_))
    }
}

impl From<String> for RelationshipKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "many_to_one" => RelationshipKind::ManyToOne,
            "one_to_one" => RelationshipKind::OneToOne,
            "one_to_many" => RelationshipKind::OneToMany,
            "many_to_many" => RelationshipKind::ManyToMany,
            _ => RelationshipKind::Other(tag),
        }
    }
}

impl From<&str> for RelationshipKind {
    fn from(tag: &str) -> Self {
        RelationshipKind::from(tag.to_string())
    }
}

impl From<RelationshipKind> for String {
    fn from(kind: RelationshipKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "schema")]
impl JsonSchema for RelationshipKind {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "RelationshipKind".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "examples": ["many_to_one", "one_to_one", "one_to_many", "many_to_many"],
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct RelationshipDef {
    pub name: RelationshipName,
    pub kind: RelationshipKind,
    #[serde(default)]
    pub min: u32,
    /// `None` means unbounded.
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default, skip_serializing_if = "OptionMap::is_empty")]
    pub options: OptionMap,
}

impl RelationshipDef {
    pub fn new(
        name: impl Into<RelationshipName>,
        kind: impl Into<RelationshipKind>,
        min: u32,
        max: Option<u32>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            min,
            max,
            options: OptionMap::new(),
        }
    }

    pub fn belongs_to(name: impl Into<RelationshipName>) -> Self {
        Self::new(name, RelationshipKind::ManyToOne, 1, Some(1))
    }

    pub fn has_one(name: impl Into<RelationshipName>) -> Self {
        Self::new(name, RelationshipKind::OneToOne, 1, Some(1))
    }

    pub fn has_many(name: impl Into<RelationshipName>) -> Self {
        Self::new(name, RelationshipKind::OneToMany, 0, None)
    }

    pub fn has_many_through(name: impl Into<RelationshipName>) -> Self {
        Self::new(name, RelationshipKind::ManyToMany, 0, None)
    }

    pub fn with_options(mut self, options: OptionMap) -> Self {
        self.options = options;
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("many_to_one", RelationshipKind::ManyToOne)]
    #[case("one_to_one", RelationshipKind::OneToOne)]
    #[case("one_to_many", RelationshipKind::OneToMany)]
    #[case("many_to_many", RelationshipKind::ManyToMany)]
    #[case("polymorphic", RelationshipKind::Other("polymorphic".into()))]
    fn test_kind_from_tag(#[case] tag: &str, #[case] expected: RelationshipKind) {
        let kind = RelationshipKind::from(tag);
        assert_eq!(kind, expected);
        assert_eq!(kind.as_str(), tag);
    }

    #[test]
    fn test_ordered_kinds_are_known() {
        assert!(RelationshipKind::ORDERED.iter().all(RelationshipKind::is_known));
        assert!(!RelationshipKind::from("through").is_known());
    }

    #[test]
    fn test_deserialize_defaults_to_unbounded() {
        let rel: RelationshipDef =
            serde_json::from_str(r#"{"name": "projects", "kind": "one_to_many"}"#).unwrap();
        assert_eq!(rel, RelationshipDef::has_many("projects"));
        assert!(rel.is_unbounded());
    }

    #[test]
    fn test_serialize_kind_as_tag() {
        let rel = RelationshipDef::belongs_to("person");
        let value = serde_json::to_value(&rel).unwrap();
        assert_eq!(value["kind"], "many_to_one");
        assert_eq!(value["max"], 1);
    }
}
