pub mod model;
pub mod names;
pub mod option;
pub mod property;
pub mod relationship;

pub use model::{ModelDef, ModelValidationError};
pub use names::{ModelName, OptionName, PropertyName, RelationshipName, TypeName};
pub use option::{OptionMap, OptionValue};
pub use property::{PropertyDef, SERIAL_TYPE};
pub use relationship::{RelationshipDef, RelationshipKind};
