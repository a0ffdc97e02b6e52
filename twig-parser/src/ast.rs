use std::fmt;
use std::mem;
use std::str::FromStr;

/// The keyword a [`Node::VariableDeclaration`] was introduced with.
/// It is recorded for fidelity only: every binding lands in the same flat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }
}

impl FromStr for DeclarationKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "var" => Ok(DeclarationKind::Var),
            "let" => Ok(DeclarationKind::Let),
            "const" => Ok(DeclarationKind::Const),
            _ => Err(()),
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntax tree node. The variants mirror the ESTree node types of the same name.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The root of the tree (e.g. a whole file).
    Program { body: Vec<Node> },
    /// `let a = 1, b;`
    VariableDeclaration {
        kind: DeclarationKind,
        declarations: Vec<Node>,
    },
    /// A single `name = init` inside a declaration. `init` is `None` for `let a;`.
    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },
    /// An identifier (e.g. `foo`).
    Identifier { name: String },
    /// A literal, kept as its raw source text (e.g. `90` or `"nnamdi"` including the quotes).
    Literal { raw: String },
    /// A binary expression (e.g. `1+1`).
    BinaryExpression {
        left: Box<Node>,
        operator: String,
        right: Box<Node>,
    },
    /// A call expression (e.g. `print(a, b)`).
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    /// An expression evaluated for its side effects.
    ExpressionStatement { expression: Box<Node> },
    /// A node kind produced by an external parser that has no counterpart here.
    Unsupported { kind: String },
    /// Only produced alongside a reported syntax error.
    Error,
}

/// Drops the tree iteratively. The derived drop would recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}

impl Node {
    /// Returns the ESTree type name of the node.
    pub fn kind_name(&self) -> &str {
        match self {
            Node::Program { .. } => "Program",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::VariableDeclarator { .. } => "VariableDeclarator",
            Node::Identifier { .. } => "Identifier",
            Node::Literal { .. } => "Literal",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::CallExpression { .. } => "CallExpression",
            Node::ExpressionStatement { .. } => "ExpressionStatement",
            Node::Unsupported { kind } => kind,
            Node::Error => "Error",
        }
    }

    /// Moves every child node into `out`, leaving leaves behind.
    fn take_children(&mut self, out: &mut Vec<Node>) {
        match self {
            Node::Program { body } => out.append(body),
            Node::VariableDeclaration { declarations, .. } => out.append(declarations),
            Node::VariableDeclarator { id, init } => {
                out.push(mem::replace(&mut **id, Node::Error));
                if let Some(init) = init.take() {
                    out.push(*init);
                }
            }
            Node::BinaryExpression { left, right, .. } => {
                out.push(mem::replace(&mut **left, Node::Error));
                out.push(mem::replace(&mut **right, Node::Error));
            }
            Node::CallExpression { callee, arguments } => {
                out.push(mem::replace(&mut **callee, Node::Error));
                out.append(arguments);
            }
            Node::ExpressionStatement { expression } => {
                out.push(mem::replace(&mut **expression, Node::Error));
            }
            Node::Identifier { .. } | Node::Literal { .. } | Node::Unsupported { .. } | Node::Error => {}
        }
    }

    /* Constructors */

    pub fn program(body: Vec<Node>) -> Self {
        Node::Program { body }
    }

    pub fn declaration(kind: DeclarationKind, declarations: Vec<Node>) -> Self {
        Node::VariableDeclaration { kind, declarations }
    }

    pub fn declarator(name: impl Into<String>, init: Option<Node>) -> Self {
        Node::VariableDeclarator {
            id: Box::new(Node::identifier(name)),
            init: init.map(Box::new),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Node::Identifier { name: name.into() }
    }

    pub fn literal(raw: impl Into<String>) -> Self {
        Node::Literal { raw: raw.into() }
    }

    pub fn binary(left: Node, operator: impl Into<String>, right: Node) -> Self {
        Node::BinaryExpression {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Node::CallExpression {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn expr_stmt(expression: Node) -> Self {
        Node::ExpressionStatement {
            expression: Box::new(expression),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_deep_tree() {
        let mut node = Node::literal("1");
        for _i in 0..200_000 {
            node = Node::binary(node, "+", Node::literal("1"));
        }
        let node = Node::expr_stmt(Node::call(Node::identifier("print"), vec![node]));
        drop(node);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(Node::literal("1").kind_name(), "Literal");
        assert_eq!(
            Node::Unsupported {
                kind: "IfStatement".to_string()
            }
            .kind_name(),
            "IfStatement"
        );
    }
}
