use remodel_config::OptionSyntax;
use remodel_core::{OptionMap, PropertyDef};
use remodel_naming::symbol_literal;

use crate::options::{OptionFormatter, RenderedOption, format_options, literal};

const PROPERTY_PRIORITIES: &[&str] = &["key", "required", "unique", "unique_index"];

/// Renders one `property :name, Type, ...` line.
pub struct PropertyRenderer<'a> {
    backend: &'a PropertyDef,
    syntax: OptionSyntax,
}

impl<'a> PropertyRenderer<'a> {
    pub fn new(backend: &'a PropertyDef, syntax: OptionSyntax) -> Self {
        Self { backend, syntax }
    }

    pub fn name(&self) -> &str {
        &self.backend.name
    }

    pub fn type_name(&self) -> &str {
        self.backend.simple_type()
    }

    pub fn render(&self) -> String {
        format!(
            "property {}, {}{}",
            symbol_literal(self.name()),
            self.type_name(),
            self.options()
        )
    }
}

impl OptionFormatter for PropertyRenderer<'_> {
    fn backend_options(&self) -> &OptionMap {
        &self.backend.options
    }

    fn syntax(&self) -> OptionSyntax {
        self.syntax
    }

    fn option_priorities(&self) -> &'static [&'static str] {
        PROPERTY_PRIORITIES
    }

    /// `required` is implied by `key` and dropped when both are set.
    fn prioritized_options(&self) -> Vec<RenderedOption<'_>> {
        let options = self.backend_options();
        let is_key = options.is_set("key");
        PROPERTY_PRIORITIES
            .iter()
            .copied()
            .filter(|name| options.is_set(name))
            .filter(|name| !(*name == "required" && is_key))
            .filter_map(|name| options.get(name).map(|value| (name, literal(value))))
            .collect()
    }

    /// Serial properties carry their options implicitly.
    fn options(&self) -> String {
        if self.backend.is_serial() {
            String::new()
        } else {
            format_options(self)
        }
    }
}
