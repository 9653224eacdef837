use log::{debug, trace};
use remodel_config::RemodelConfig;
use remodel_core::{ModelDef, PropertyDef, RelationshipDef};

use crate::error::ExportError;
use crate::property::PropertyRenderer;
use crate::relationship::{RelationshipRenderer, RelationshipVariant};

/// Renders a whole model definition block.
#[derive(Debug, Clone, Default)]
pub struct ModelRenderer {
    config: RemodelConfig,
}

impl ModelRenderer {
    pub fn new(config: RemodelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RemodelConfig {
        &self.config
    }

    /// Render `model`, or fail without output when it has no key property or
    /// carries a relationship of an unknown kind.
    pub fn render(&self, model: &ModelDef) -> Result<String, ExportError> {
        if !model.is_complete() {
            return Err(ExportError::IncompleteModel {
                model: model.name.clone(),
            });
        }
        debug!(
            "rendering model {} ({} properties, {} relationships)",
            model.name,
            model.properties.len(),
            model.relationships.len()
        );

        let keys = self.property_definitions(model.key_properties());
        let foreign_keys = self.property_definitions(model.foreign_key_properties());
        let regular = self.property_definitions(model.regular_properties());
        let relationships = self.relationship_definitions(&model.relationships)?;

        let indent = self.config.indent();
        let mut source = format!("class {}\n", model.name);
        source.push('\n');
        source.push_str(&format!(
            "{}include {}\n",
            indent,
            self.config.resource_module()
        ));
        push_lines(&mut source, &indent, &keys);
        source.push('\n');
        push_lines(&mut source, &indent, &foreign_keys);
        push_lines(&mut source, &indent, &regular);
        source.push('\n');
        push_lines(&mut source, &indent, &relationships);
        source.push('\n');
        source.push_str("\nend\n");

        debug!("rendered model {} ({} bytes)", model.name, source.len());
        Ok(source)
    }

    fn property_definitions(&self, properties: Vec<&PropertyDef>) -> Vec<String> {
        properties
            .into_iter()
            .map(|p| {
                let line = PropertyRenderer::new(p, self.config.option_syntax()).render();
                trace!("property {}: {}", p.name, line);
                line
            })
            .collect()
    }

    /// Lines grouped as many-to-one, one-to-one, one-to-many, many-to-many;
    /// mapping order is kept inside each group.
    fn relationship_definitions(
        &self,
        relationships: &[RelationshipDef],
    ) -> Result<Vec<String>, ExportError> {
        let renderers = relationships
            .iter()
            .map(|r| RelationshipRenderer::new(r, self.config.option_syntax()))
            .collect::<Result<Vec<_>, _>>()?;

        let order = [
            RelationshipVariant::ManyToOne,
            RelationshipVariant::OneToOne,
            RelationshipVariant::OneToMany,
            RelationshipVariant::ManyToMany,
        ];
        let mut lines = Vec::with_capacity(renderers.len());
        for variant in order {
            for renderer in renderers.iter().filter(|r| r.variant() == variant) {
                let line = renderer.render();
                trace!("relationship {}: {}", renderer.name(), line);
                lines.push(line);
            }
        }
        Ok(lines)
    }
}

fn push_lines(source: &mut String, indent: &str, lines: &[String]) {
    for line in lines {
        source.push('\n');
        source.push_str(indent);
        source.push_str(line);
    }
}
