//! Lexing and parsing into the [`ast::Node`] tree consumed by the tree walker.

pub mod ast;
pub mod estree;
pub mod lexer;
pub mod parser;
pub mod stack;
