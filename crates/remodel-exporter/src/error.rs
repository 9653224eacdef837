use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The model has no key property, so no definition can be produced for it.
    #[error("model '{model}' is incomplete: it has no key property")]
    IncompleteModel { model: String },
    #[error("relationship '{relationship}' has unsupported kind '{kind}'")]
    UnsupportedRelationship { relationship: String, kind: String },
}
