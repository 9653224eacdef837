//! Render `ModelDef` metadata back into DataMapper-style model source.
//!
//! Key properties come first, then foreign keys, then regular properties, then
//! relationships grouped as many-to-one, one-to-one, one-to-many and
//! many-to-many.

pub mod error;
pub mod model;
pub mod options;
pub mod property;
pub mod relationship;

pub use error::ExportError;
pub use model::ModelRenderer;
pub use options::OptionFormatter;
pub use property::PropertyRenderer;
pub use relationship::{RelationshipRenderer, RelationshipVariant};

use remodel_core::ModelDef;

/// Render one model with the default configuration.
pub fn render_model(model: &ModelDef) -> Result<String, ExportError> {
    ModelRenderer::default().render(model)
}

/// Render several models, separated by a blank line.
///
/// Fails on the first model that cannot be rendered; nothing is returned for
/// the others.
pub fn render_models(renderer: &ModelRenderer, models: &[ModelDef]) -> Result<String, ExportError> {
    let sources = models
        .iter()
        .map(|model| renderer.render(model))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sources.join("\n"))
}

/// Opt-in `to_source_text()` for model values.
pub trait ToSourceText {
    fn to_source_text(&self) -> Result<String, ExportError>;
}

impl ToSourceText for ModelDef {
    fn to_source_text(&self) -> Result<String, ExportError> {
        render_model(self)
    }
}
