//! Reader for ESTree JSON documents, the tree format emitted by JavaScript parsers such as acorn.
//!
//! Only the node shapes listed on [`Node`] are converted. Any other `type` becomes
//! [`Node::Unsupported`] so the walker can report it. Extra fields such as `start`,
//! `end` or `sourceType` are ignored.

use crate::ast::{DeclarationKind, Node};
use serde_json::{Map, Value as Json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstreeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a node object, found {found}")]
    NotANode { found: &'static str },
    #[error("`{kind}` node is missing field `{field}`")]
    MissingField { kind: String, field: &'static str },
    #[error("field `{field}` of `{kind}` node must be {expected}")]
    InvalidField {
        kind: String,
        field: &'static str,
        expected: &'static str,
    },
}

/// Parses an ESTree JSON document into a [`Node`].
pub fn parse_str(json: &str) -> Result<Node, EstreeError> {
    let value: Json = serde_json::from_str(json)?;
    from_json(&value)
}

/// Converts an already decoded ESTree JSON value into a [`Node`].
pub fn from_json(value: &Json) -> Result<Node, EstreeError> {
    let object = value.as_object().ok_or(EstreeError::NotANode {
        found: json_type(value),
    })?;
    let kind = match object.get("type") {
        Some(Json::String(kind)) => kind.as_str(),
        Some(_) => {
            return Err(EstreeError::InvalidField {
                kind: "<unknown>".to_string(),
                field: "type",
                expected: "a string",
            })
        }
        None => {
            return Err(EstreeError::MissingField {
                kind: "<unknown>".to_string(),
                field: "type",
            })
        }
    };
    let node = NodeObject { kind, object };

    Ok(match kind {
        "Program" => Node::Program {
            body: node.nodes("body")?,
        },
        "VariableDeclaration" => {
            let declaration_kind = node.string("kind")?;
            let declaration_kind = declaration_kind
                .parse::<DeclarationKind>()
                .map_err(|_| node.invalid("kind", "one of `var`, `let` or `const`"))?;
            Node::VariableDeclaration {
                kind: declaration_kind,
                declarations: node.nodes("declarations")?,
            }
        }
        "VariableDeclarator" => Node::VariableDeclarator {
            id: Box::new(node.node("id")?),
            init: node.optional_node("init")?.map(Box::new),
        },
        "Identifier" => Node::Identifier {
            name: node.string("name")?.to_string(),
        },
        "Literal" => Node::Literal {
            raw: node.literal_raw()?,
        },
        "BinaryExpression" => Node::BinaryExpression {
            left: Box::new(node.node("left")?),
            operator: node.string("operator")?.to_string(),
            right: Box::new(node.node("right")?),
        },
        "CallExpression" => Node::CallExpression {
            callee: Box::new(node.node("callee")?),
            arguments: node.nodes("arguments")?,
        },
        "ExpressionStatement" => Node::ExpressionStatement {
            expression: Box::new(node.node("expression")?),
        },
        other => Node::Unsupported {
            kind: other.to_string(),
        },
    })
}

fn json_type(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

/// Field accessors for one ESTree node object.
struct NodeObject<'a> {
    kind: &'a str,
    object: &'a Map<String, Json>,
}

impl<'a> NodeObject<'a> {
    fn field(&self, field: &'static str) -> Result<&'a Json, EstreeError> {
        self.object.get(field).ok_or_else(|| EstreeError::MissingField {
            kind: self.kind.to_string(),
            field,
        })
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> EstreeError {
        EstreeError::InvalidField {
            kind: self.kind.to_string(),
            field,
            expected,
        }
    }

    fn string(&self, field: &'static str) -> Result<&'a str, EstreeError> {
        self.field(field)?
            .as_str()
            .ok_or_else(|| self.invalid(field, "a string"))
    }

    fn node(&self, field: &'static str) -> Result<Node, EstreeError> {
        from_json(self.field(field)?)
    }

    fn optional_node(&self, field: &'static str) -> Result<Option<Node>, EstreeError> {
        match self.object.get(field) {
            None | Some(Json::Null) => Ok(None),
            Some(value) => from_json(value).map(Some),
        }
    }

    fn nodes(&self, field: &'static str) -> Result<Vec<Node>, EstreeError> {
        self.field(field)?
            .as_array()
            .ok_or_else(|| self.invalid(field, "an array"))?
            .iter()
            .map(from_json)
            .collect()
    }

    /// Prefers the `raw` source text. Falls back to re-serializing `value` for producers that omit `raw`.
    fn literal_raw(&self) -> Result<String, EstreeError> {
        if let Some(raw) = self.object.get("raw") {
            return raw
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| self.invalid("raw", "a string"));
        }
        match self.field("value")? {
            Json::Null => Ok("null".to_string()),
            // JSON string quoting is a valid quoted literal.
            value @ Json::String(_) => Ok(value.to_string()),
            Json::Bool(value) => Ok(value.to_string()),
            Json::Number(value) => Ok(value.to_string()),
            _ => Err(self.invalid("value", "a primitive")),
        }
    }
}
