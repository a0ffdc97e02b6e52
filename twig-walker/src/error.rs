use std::io;
use thiserror::Error;
use twig_value::Value;

/// Errors that halt a walk. Nothing is rolled back: bindings made before the failure stay.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("unsupported node kind `{kind}`")]
    UnsupportedNodeKind { kind: String },
    #[error("unsupported operator `{operator}`")]
    UnsupportedOperator { operator: String },
    #[error("operand of `{operator}` must be a number, found {value:?}")]
    NonNumericOperand { operator: &'static str, value: Value },
    #[error("only identifiers can be called, found `{kind}`")]
    UnsupportedCallee { kind: String },
    #[error("declarator target must be an identifier, found `{kind}`")]
    InvalidDeclaratorTarget { kind: String },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
