//! Driver glue: turns source text (or an ESTree document) into a tree and walks it once.

pub mod logging;

use std::io::Write;
use thiserror::Error;
use tracing::debug;
use twig_parser::ast::Node;
use twig_parser::estree::{self, EstreeError};
use twig_parser::parser::Parser;
use twig_source::Source;

pub use twig_value::Value;
pub use twig_walker::{RuntimeError, Walker};

#[derive(Debug, Error)]
pub enum Error {
    /// The rendered report of every syntax error found.
    #[error("{}", .report.trim_end())]
    Syntax { report: String },
    #[error(transparent)]
    Estree(#[from] EstreeError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Parses source code into a tree, failing if any syntax error was reported.
pub fn parse(source: &str) -> Result<Node, Error> {
    let source = Source::new(source);
    let ast = Parser::new(&source).parse_program();
    if source.has_no_errors() {
        Ok(ast)
    } else {
        Err(Error::Syntax {
            report: source.to_string(),
        })
    }
}

/// Parses an ESTree JSON document into a tree.
pub fn parse_estree(json: &str) -> Result<Node, Error> {
    Ok(estree::parse_str(json)?)
}

/// Parses `source` and walks it on a fresh [`Walker`] printing to `out`.
pub fn interpret(source: &str, out: impl Write) -> Result<Value, Error> {
    let ast = parse(source)?;
    run(&ast, out)
}

/// Reads an ESTree JSON document and walks it on a fresh [`Walker`] printing to `out`.
pub fn interpret_estree(json: &str, out: impl Write) -> Result<Value, Error> {
    let ast = parse_estree(json)?;
    run(&ast, out)
}

fn run(ast: &Node, out: impl Write) -> Result<Value, Error> {
    debug!(root = ast.kind_name(), "walking tree");
    Ok(Walker::new(out).run(ast)?)
}
