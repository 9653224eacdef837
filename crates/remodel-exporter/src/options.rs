//! Option suffix formatting shared by the property and relationship renderers.

use remodel_config::OptionSyntax;
use remodel_core::{OptionMap, OptionValue};
use remodel_naming::{demodulize, is_bare_identifier, quote, symbol_literal};

/// An option name paired with its already rendered value.
pub type RenderedOption<'a> = (&'a str, String);

/// Turns a backend's option mapping into the `, :name => value` suffix of a
/// declaration line.
///
/// Implementors pick which options come first (`prioritized_options`) and
/// which are dropped (`irrelevant_options`); everything else follows in the
/// backend's own order.
pub trait OptionFormatter {
    fn backend_options(&self) -> &OptionMap;

    fn syntax(&self) -> OptionSyntax;

    /// Names handled by `prioritized_options`; they never show up again in the rest.
    fn option_priorities(&self) -> &'static [&'static str] {
        &[]
    }

    fn prioritized_options(&self) -> Vec<RenderedOption<'_>> {
        Vec::new()
    }

    fn irrelevant_options(&self) -> &'static [&'static str] {
        &[]
    }

    fn rest_options(&self) -> Vec<RenderedOption<'_>> {
        rest_options(
            self.backend_options(),
            self.option_priorities(),
            self.irrelevant_options(),
        )
    }

    fn options(&self) -> String {
        format_options(self)
    }
}

/// Default `options()` body, callable from implementors that override it.
pub fn format_options<F: OptionFormatter + ?Sized>(formatter: &F) -> String {
    let mut relevant = formatter.prioritized_options();
    relevant.extend(formatter.rest_options());
    option_string(formatter.syntax(), &relevant)
}

/// Options of `backend` that are neither prioritized nor irrelevant, in order.
pub fn rest_options<'a>(
    backend: &'a OptionMap,
    priorities: &[&str],
    irrelevant: &[&str],
) -> Vec<RenderedOption<'a>> {
    backend
        .iter()
        .filter(|(name, _)| !priorities.contains(name) && !irrelevant.contains(name))
        .map(|(name, value)| (name, literal(value)))
        .collect()
}

/// Join rendered options into a suffix; empty when there is nothing to show.
pub fn option_string(syntax: OptionSyntax, options: &[RenderedOption<'_>]) -> String {
    if options.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = options
        .iter()
        .map(|(name, value)| option_pair(syntax, name, value))
        .collect();
    format!(", {}", pairs.join(", "))
}

fn option_pair(syntax: OptionSyntax, name: &str, value: &str) -> String {
    match syntax {
        OptionSyntax::HashRocket => format!("{} => {}", symbol_literal(name), value),
        OptionSyntax::Keyword if is_bare_identifier(name) => format!("{}: {}", name, value),
        OptionSyntax::Keyword => format!("{}: {}", quote(name), value),
    }
}

/// Source literal for an option value.
pub fn literal(value: &OptionValue) -> String {
    match value {
        OptionValue::Nil => "nil".to_string(),
        OptionValue::Bool(b) => b.to_string(),
        OptionValue::Integer(i) => i.to_string(),
        OptionValue::Float(f) => float_literal(*f),
        OptionValue::Str(s) => quote(s),
        OptionValue::Symbol { symbol } => symbol_literal(symbol),
        OptionValue::Type { r#type } => demodulize(r#type).to_string(),
        OptionValue::Range { range: (start, end) } => format!("{}..{}", start, end),
        OptionValue::List(values) => {
            let items: Vec<String> = values.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
    }
}

fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "Float::NAN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Float::INFINITY".to_string()
        } else {
            "-Float::INFINITY".to_string()
        }
    } else {
        // Debug keeps the fractional part (`1.0`), Display would drop it.
        format!("{:?}", value)
    }
}
