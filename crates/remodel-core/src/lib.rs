pub mod schema;

pub use schema::{
    ModelDef, ModelName, ModelValidationError, OptionMap, OptionName, OptionValue, PropertyDef,
    PropertyName, RelationshipDef, RelationshipKind, RelationshipName, SERIAL_TYPE, TypeName,
};
