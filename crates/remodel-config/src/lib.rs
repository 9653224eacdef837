pub mod config;
pub mod option_syntax;

pub use config::{DEFAULT_INDENT_WIDTH, DEFAULT_RESOURCE_MODULE, RemodelConfig};
pub use option_syntax::OptionSyntax;
