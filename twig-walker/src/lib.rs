//! Tree-walking evaluator for [`twig_parser::ast::Node`] trees.

pub mod builtins;
pub mod error;
pub mod ops;
pub mod table;
pub mod walker;

pub use error::RuntimeError;
pub use table::VariableTable;
pub use twig_value::Value;
pub use walker::Walker;
