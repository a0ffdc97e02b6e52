//! Built-in functions callable by name.

use std::io::{self, Write};
use twig_value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Print,
}

impl Builtin {
    /// Returns the builtin named `name`, if any.
    pub fn lookup(name: &str) -> Option<Self> {
        match name {
            "print" => Some(Builtin::Print),
            _ => None,
        }
    }

    pub fn call(self, args: &[Value], out: &mut impl Write) -> io::Result<Value> {
        match self {
            Builtin::Print => print(args, out),
        }
    }
}

/// Writes the arguments separated by a single space, followed by a newline.
pub fn print(args: &[Value], out: &mut impl Write) -> io::Result<Value> {
    let line = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(out, "{}", line)?;

    Ok(Value::Undefined)
}
