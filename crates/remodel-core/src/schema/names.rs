pub type ModelName = String;
pub type PropertyName = String;
pub type RelationshipName = String;
pub type OptionName = String;
pub type TypeName = String;
