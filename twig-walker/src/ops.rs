//! Binary operators.

use crate::error::RuntimeError;
use std::str::FromStr;
use twig_value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Applies the operator to already evaluated operands.
    ///
    /// `+` adds two numbers and otherwise concatenates the displayed operands.
    /// `-`, `*` and `/` coerce both operands with [`Value::to_number`] and fail when that is not possible.
    /// Division by zero follows IEEE-754 (`Infinity`, `-Infinity` or `NaN`).
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value, RuntimeError> {
        /// Generate arithmetic for a numeric binary operator.
        macro_rules! gen_num_binary_op {
            ($self: ident, $lhs: ident, $rhs: ident, $op: tt) => {{
                let a = $self.numeric_operand(&$lhs)?;
                let b = $self.numeric_operand(&$rhs)?;
                Ok(Value::Number(a $op b))
            }};
        }

        match self {
            BinaryOp::Add => match (lhs.cast_to_number(), rhs.cast_to_number()) {
                (Some(a), Some(b)) => Ok(Value::Number(a + b)),
                // handle string concatenation
                _ => Ok(Value::Str(format!("{}{}", lhs, rhs))),
            },
            BinaryOp::Sub => gen_num_binary_op!(self, lhs, rhs, -),
            BinaryOp::Mul => gen_num_binary_op!(self, lhs, rhs, *),
            BinaryOp::Div => gen_num_binary_op!(self, lhs, rhs, /),
        }
    }

    fn numeric_operand(self, value: &Value) -> Result<f64, RuntimeError> {
        value.to_number().ok_or_else(|| RuntimeError::NonNumericOperand {
            operator: self.as_str(),
            value: value.clone(),
        })
    }
}

impl FromStr for BinaryOp {
    type Err = RuntimeError;

    fn from_str(operator: &str) -> Result<Self, Self::Err> {
        match operator {
            "+" => Ok(BinaryOp::Add),
            "-" => Ok(BinaryOp::Sub),
            "*" => Ok(BinaryOp::Mul),
            "/" => Ok(BinaryOp::Div),
            _ => Err(RuntimeError::UnsupportedOperator {
                operator: operator.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn num(val: f64) -> Value {
        Value::Number(val)
    }

    fn apply(op: &str, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Value {
        op.parse::<BinaryOp>()
            .unwrap()
            .apply(lhs.into(), rhs.into())
            .unwrap()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply("+", 1.0, 2.0), num(3.0));
        assert_eq!(apply("-", 1.0, 2.0), num(-1.0));
        assert_eq!(apply("*", 90.0, 5.0), num(450.0));
        assert_eq!(apply("/", 9.0, 2.0), num(4.5));
    }

    #[test]
    fn test_concatenation() {
        assert_eq!(apply("+", "a", "b"), Value::from("ab"));
        assert_eq!(apply("+", "n", 1.0), Value::from("n1"));
        assert_eq!(apply("+", 2.5, "x"), Value::from("2.5x"));
        assert_eq!(apply("+", Value::Undefined, "x"), Value::from("undefinedx"));
    }

    #[test]
    fn test_numeric_text_is_coerced() {
        assert_eq!(apply("*", "3", 4.0), num(12.0));
        assert_eq!(apply("-", "10", "4"), num(6.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(apply("/", 1.0, 0.0), num(f64::INFINITY));
        assert_eq!(apply("/", -1.0, 0.0), num(f64::NEG_INFINITY));
        match apply("/", 0.0, 0.0) {
            Value::Number(val) => assert!(val.is_nan()),
            other => panic!("expected NaN, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_operand() {
        let err = BinaryOp::Mul
            .apply(Value::from("abc"), Value::Number(2.0))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"operand of `*` must be a number, found "abc""#
        );
        assert!(BinaryOp::Sub
            .apply(Value::Number(2.0), Value::Undefined)
            .is_err());
    }

    #[test]
    fn test_unsupported_operator() {
        let err = "%".parse::<BinaryOp>().unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::UnsupportedOperator { ref operator } if operator == "%"
        ));
    }
}
