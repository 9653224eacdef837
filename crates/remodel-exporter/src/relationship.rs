use remodel_config::OptionSyntax;
use remodel_core::{OptionMap, OptionValue, RelationshipDef, RelationshipKind};
use remodel_naming::{demodulize, symbol_literal};

use crate::error::ExportError;
use crate::options::{OptionFormatter, RenderedOption, literal};

const RELATIONSHIP_PRIORITIES: &[&str] = &["through", "constraint"];

/// Expressed by the cardinality field or meaningless in source.
const RELATIONSHIP_IRRELEVANT: &[&str] = &[
    "min",
    "max",
    "parent_repository_name",
    "child_repository_name",
];

/// Rendering behaviour for each known relationship category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipVariant {
    ManyToOne,
    OneToOne,
    OneToMany,
    /// Formats exactly like `OneToMany`.
    ManyToMany,
}

impl RelationshipVariant {
    /// Pick the variant for a relationship kind, rejecting unknown tags.
    pub fn for_relationship(relationship: &RelationshipDef) -> Result<Self, ExportError> {
        match &relationship.kind {
            RelationshipKind::ManyToOne => Ok(RelationshipVariant::ManyToOne),
            RelationshipKind::OneToOne => Ok(RelationshipVariant::OneToOne),
            RelationshipKind::OneToMany => Ok(RelationshipVariant::OneToMany),
            RelationshipKind::ManyToMany => Ok(RelationshipVariant::ManyToMany),
            RelationshipKind::Other(tag) => Err(ExportError::UnsupportedRelationship {
                relationship: relationship.name.clone(),
                kind: tag.clone(),
            }),
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            RelationshipVariant::ManyToOne => "belongs_to",
            RelationshipVariant::OneToOne
            | RelationshipVariant::OneToMany
            | RelationshipVariant::ManyToMany => "has",
        }
    }

    /// `None` when the variant has no cardinality field at all.
    pub fn cardinality(self, min: u32, max: Option<u32>) -> Option<String> {
        match self {
            RelationshipVariant::ManyToOne => None,
            RelationshipVariant::OneToOne if min == 1 && max == Some(1) => Some("1".to_string()),
            RelationshipVariant::OneToOne
            | RelationshipVariant::OneToMany
            | RelationshipVariant::ManyToMany => Some(range(min, max)),
        }
    }
}

fn range(min: u32, max: Option<u32>) -> String {
    match max {
        Some(max) => format!("{}..{}", min, max),
        None => format!("{}..n", min),
    }
}

/// Renders one `has`/`belongs_to` line.
pub struct RelationshipRenderer<'a> {
    backend: &'a RelationshipDef,
    variant: RelationshipVariant,
    syntax: OptionSyntax,
}

impl<'a> RelationshipRenderer<'a> {
    pub fn new(backend: &'a RelationshipDef, syntax: OptionSyntax) -> Result<Self, ExportError> {
        Ok(Self {
            variant: RelationshipVariant::for_relationship(backend)?,
            backend,
            syntax,
        })
    }

    pub fn variant(&self) -> RelationshipVariant {
        self.variant
    }

    pub fn name(&self) -> &str {
        &self.backend.name
    }

    pub fn cardinality(&self) -> Option<String> {
        self.variant.cardinality(self.backend.min, self.backend.max)
    }

    pub fn render(&self) -> String {
        let name = symbol_literal(self.name());
        match self.cardinality() {
            Some(cardinality) => format!(
                "{} {}, {}{}",
                self.variant.keyword(),
                cardinality,
                name,
                self.options()
            ),
            None => format!("{} {}{}", self.variant.keyword(), name, self.options()),
        }
    }
}

impl OptionFormatter for RelationshipRenderer<'_> {
    fn backend_options(&self) -> &OptionMap {
        &self.backend.options
    }

    fn syntax(&self) -> OptionSyntax {
        self.syntax
    }

    fn option_priorities(&self) -> &'static [&'static str] {
        RELATIONSHIP_PRIORITIES
    }

    fn prioritized_options(&self) -> Vec<RenderedOption<'_>> {
        let options = self.backend_options();
        let mut prioritized = Vec::new();
        if let Some(through) = options.get("through").filter(|v| v.is_truthy()) {
            prioritized.push(("through", through_literal(through)));
        }
        if let Some(constraint) = options.get("constraint").filter(|v| v.is_truthy()) {
            prioritized.push(("constraint", literal(constraint)));
        }
        prioritized
    }

    fn irrelevant_options(&self) -> &'static [&'static str] {
        RELATIONSHIP_IRRELEVANT
    }
}

/// Names become symbols, type references their simple name.
fn through_literal(value: &OptionValue) -> String {
    match value {
        OptionValue::Symbol { symbol } => symbol_literal(symbol),
        OptionValue::Str(name) => symbol_literal(name),
        OptionValue::Type { r#type } => demodulize(r#type).to_string(),
        other => literal(other),
    }
}
