//! The tree walker.

use crate::builtins::Builtin;
use crate::error::RuntimeError;
use crate::ops::BinaryOp;
use crate::table::VariableTable;
use std::io::{self, Write};
use std::str::Chars;
use tracing::{debug, trace};
use twig_parser::ast::Node;
use twig_parser::stack::ensure_sufficient_stack;
use twig_value::Value;

/// Evaluates syntax trees, one node kind at a time.
///
/// The walker owns the [`VariableTable`] and the sink `print` writes to.
/// Bindings persist across calls to [`Walker::run`]: walking the same tree twice sees the
/// bindings left by the first walk. Call [`Walker::reset`] in between for a fresh run.
pub struct Walker<W: Write> {
    variables: VariableTable,
    output: W,
}

impl Walker<io::Stdout> {
    /// Creates a walker printing to the standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Walker<W> {
    pub fn new(output: W) -> Self {
        Self {
            variables: VariableTable::new(),
            output,
        }
    }

    /// Walks `root` and returns its value. Statements evaluate to [`Value::Undefined`].
    pub fn run(&mut self, root: &Node) -> Result<Value, RuntimeError> {
        let value = self.visit_node(root)?;
        self.output.flush()?;
        Ok(value)
    }

    /// Forgets every binding.
    pub fn reset(&mut self) {
        self.variables.clear();
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn visit_node(&mut self, node: &Node) -> Result<Value, RuntimeError> {
        ensure_sufficient_stack(|| self.visit_node_inner(node))
    }

    fn visit_node_inner(&mut self, node: &Node) -> Result<Value, RuntimeError> {
        trace!(kind = node.kind_name(), "visit");

        match node {
            Node::Program { body } => self.visit_nodes(body),
            Node::VariableDeclaration { declarations, .. } => self.visit_nodes(declarations),
            Node::VariableDeclarator { id, init } => {
                self.visit_variable_declarator(id, init.as_deref())
            }
            Node::Identifier { name } => Ok(self.variables.lookup(name)),
            Node::Literal { raw } => Ok(literal_value(raw)),
            Node::BinaryExpression {
                left,
                operator,
                right,
            } => self.visit_binary_expr(left, operator, right),
            Node::CallExpression { callee, arguments } => self.visit_call_expr(callee, arguments),
            Node::ExpressionStatement { expression } => {
                self.visit_node(expression)?; // only the side effects matter
                Ok(Value::Undefined)
            }
            Node::Unsupported { .. } | Node::Error => Err(RuntimeError::UnsupportedNodeKind {
                kind: node.kind_name().to_string(),
            }),
        }
    }

    fn visit_nodes(&mut self, nodes: &[Node]) -> Result<Value, RuntimeError> {
        for node in nodes {
            self.visit_node(node)?;
        }
        Ok(Value::Undefined)
    }

    fn visit_variable_declarator(
        &mut self,
        id: &Node,
        init: Option<&Node>,
    ) -> Result<Value, RuntimeError> {
        let name = match id {
            Node::Identifier { name } => name,
            other => {
                return Err(RuntimeError::InvalidDeclaratorTarget {
                    kind: other.kind_name().to_string(),
                })
            }
        };
        let value = match init {
            Some(init) => self.visit_node(init)?,
            None => Value::Undefined,
        };

        debug!(name = name.as_str(), value = %value, "define");
        self.variables.define(name.as_str(), value.clone());
        Ok(value)
    }

    fn visit_binary_expr(
        &mut self,
        left: &Node,
        operator: &str,
        right: &Node,
    ) -> Result<Value, RuntimeError> {
        let lhs = self.visit_node(left)?;
        let rhs = self.visit_node(right)?;
        operator.parse::<BinaryOp>()?.apply(lhs, rhs)
    }

    fn visit_call_expr(&mut self, callee: &Node, arguments: &[Node]) -> Result<Value, RuntimeError> {
        // The callee goes through the variable table like any identifier, so `let print = 1;` hides the builtin.
        let callee = match callee {
            Node::Identifier { name } => self.variables.lookup(name),
            other => {
                return Err(RuntimeError::UnsupportedCallee {
                    kind: other.kind_name().to_string(),
                })
            }
        };
        let args = arguments
            .iter()
            .map(|arg| self.visit_node(arg))
            .collect::<Result<Vec<_>, _>>()?;

        match callee.cast_to_str().and_then(Builtin::lookup) {
            Some(builtin) => Ok(builtin.call(&args, &mut self.output)?),
            None => {
                debug!(callee = %callee, "ignoring call to unknown function");
                Ok(Value::Undefined)
            }
        }
    }
}

/// Converts the raw text of a literal into a value.
///
/// Quoted text becomes a string with its quotes removed and escapes decoded.
/// Text starting with a digit or `.` that parses as a number becomes a number.
/// Anything else (`true`, `null`, `0x1f`, ...) is kept as a string of the raw text.
pub fn literal_value(raw: &str) -> Value {
    if let Some(inner) = strip_quotes(raw) {
        return Value::Str(unescape(inner));
    }
    if raw.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        if let Ok(val) = raw.parse::<f64>() {
            return Value::Number(val);
        }
    }
    Value::Str(raw.to_string())
}

fn strip_quotes(raw: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return Some(&raw[1..raw.len() - 1]);
        }
    }
    None
}

fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('b') => result.push('\u{8}'),
            Some('f') => result.push('\u{c}'),
            Some('v') => result.push('\u{b}'),
            Some('0') => result.push('\0'),
            Some('x') => match read_hex(&mut chars, 2).and_then(char::from_u32) {
                Some(decoded) => result.push(decoded),
                None => result.push('x'),
            },
            Some('u') => match read_unicode(&mut chars) {
                Some(code) => result.push(decode_code_unit(code, &mut chars)),
                None => result.push('u'),
            },
            Some('\n') => {} // line continuation
            Some(other) => result.push(other), // `\\`, `\'`, `\"` and unknown escapes
            None => result.push('\\'),
        }
    }
    result
}

/// Reads exactly `digits` hex digits, advancing `chars` only on success.
fn read_hex(chars: &mut Chars<'_>, digits: usize) -> Option<u32> {
    let rest = chars.as_str();
    let hex = rest.get(..digits)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let code = u32::from_str_radix(hex, 16).ok()?;
    *chars = rest[digits..].chars();
    Some(code)
}

/// Reads the `HHHH` or `{H..}` part of a `\u` escape.
fn read_unicode(chars: &mut Chars<'_>) -> Option<u32> {
    let rest = chars.as_str();
    match rest.strip_prefix('{') {
        Some(braced) => {
            let end = braced.find('}')?;
            let hex = &braced[..end];
            if hex.is_empty() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let code = u32::from_str_radix(hex, 16).ok()?;
            *chars = braced[end + 1..].chars();
            Some(code)
        }
        None => read_hex(chars, 4),
    }
}

/// Joins a high surrogate with a following low surrogate escape.
/// Lone surrogates cannot be represented and become U+FFFD.
fn decode_code_unit(code: u32, chars: &mut Chars<'_>) -> char {
    if (0xD800..0xDC00).contains(&code) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            let low = read_unicode(&mut lookahead).filter(|low| (0xDC00..0xE000).contains(low));
            if let Some(low) = low {
                *chars = lookahead;
                let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                return char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
