use std::fmt;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::schema::names::OptionName;

/// A single option value as supplied by the host metadata layer.
///
/// Serialized untagged: `null`, booleans, numbers, strings and arrays map to
/// the obvious variants, while symbols, type references and ranges use a
/// one-key object (`{"symbol": "project_tasks"}`, `{"type": "Resource"}`,
/// `{"range": [1, 200]}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum OptionValue {
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Str(String),
    List(Vec<OptionValue>),
    Symbol { symbol: String },
    Type { r#type: String },
    Range { range: (i64, i64) },
}

impl OptionValue {
    pub fn symbol(name: impl Into<String>) -> Self {
        OptionValue::Symbol {
            symbol: name.into(),
        }
    }

    /// A reference to another type, e.g. an intermediate resource model.
    pub fn type_ref(name: impl Into<String>) -> Self {
        OptionValue::Type {
            r#type: name.into(),
        }
    }

    pub fn range(start: i64, end: i64) -> Self {
        OptionValue::Range {
            range: (start, end),
        }
    }

    /// Only `nil` and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, OptionValue::Nil | OptionValue::Bool(false))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        OptionValue::Integer(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Str(value)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        OptionValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Option name -> value mapping that keeps the order options were declared in.
///
/// Inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionMap(Vec<(OptionName, OptionValue)>);

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<OptionName>, value: impl Into<OptionValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<OptionName>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// True when the option is present and neither `nil` nor `false`.
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(OptionValue::is_truthy)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for OptionMap
where
    K: Into<OptionName>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OptionMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl Serialize for OptionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct OptionMapVisitor;

impl<'de> Visitor<'de> for OptionMapVisitor {
    type Value = OptionMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of option names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OptionMap::new();
        while let Some((name, value)) = access.next_entry::<OptionName, OptionValue>()? {
            map.insert(name, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for OptionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OptionMapVisitor)
    }
}

#[cfg(feature = "schema")]
impl JsonSchema for OptionMap {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "OptionMap".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "object",
            "additionalProperties": generator.subschema_for::<OptionValue>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OptionValue::Nil, false)]
    #[case(OptionValue::Bool(false), false)]
    #[case(OptionValue::Bool(true), true)]
    #[case(OptionValue::Integer(0), true)]
    #[case(OptionValue::Str(String::new()), true)]
    #[case(OptionValue::symbol("x"), true)]
    fn test_truthiness(#[case] value: OptionValue, #[case] truthy: bool) {
        assert_eq!(value.is_truthy(), truthy);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = OptionMap::new().with("required", true).with("length", 200);
        map.insert("required", false);
        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["required", "length"]);
        assert_eq!(map.get("required"), Some(&OptionValue::Bool(false)));
        assert!(!map.is_set("required"));
        assert!(map.is_set("length"));
        assert!(!map.is_set("missing"));
    }

    #[test]
    fn test_deserialize_keeps_document_order() {
        let map: OptionMap = serde_json::from_str(
            r#"{"unique_index": true, "required": true, "length": 200, "key": false}"#,
        )
        .unwrap();
        let names: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["unique_index", "required", "length", "key"]);
    }

    #[test]
    fn test_deserialize_value_variants() {
        let map: OptionMap = serde_json::from_str(
            r#"{
                "default": null,
                "lazy": false,
                "min": 1,
                "precision": 0.5,
                "format": "%Y",
                "set": ["a", "b"],
                "through": {"symbol": "project_tasks"},
                "model": {"type": "DataMapper::Resource"},
                "length": {"range": [1, 200]}
            }"#,
        )
        .unwrap();
        assert_eq!(map.get("default"), Some(&OptionValue::Nil));
        assert_eq!(map.get("lazy"), Some(&OptionValue::Bool(false)));
        assert_eq!(map.get("min"), Some(&OptionValue::Integer(1)));
        assert_eq!(map.get("precision"), Some(&OptionValue::Float(0.5)));
        assert_eq!(map.get("format"), Some(&OptionValue::Str("%Y".into())));
        assert_eq!(map.get("set"), Some(&OptionValue::from(vec!["a", "b"])));
        assert_eq!(
            map.get("through"),
            Some(&OptionValue::symbol("project_tasks"))
        );
        assert_eq!(
            map.get("model"),
            Some(&OptionValue::type_ref("DataMapper::Resource"))
        );
        assert_eq!(map.get("length"), Some(&OptionValue::range(1, 200)));
    }

    #[test]
    fn test_serialize_roundtrips_order() {
        let map = OptionMap::new()
            .with("through", OptionValue::symbol("memberships"))
            .with("constraint", OptionValue::symbol("destroy"));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"through":{"symbol":"memberships"},"constraint":{"symbol":"destroy"}}"#
        );
    }
}
