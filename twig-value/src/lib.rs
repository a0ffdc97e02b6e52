use std::fmt;

/// The result of evaluating a node.
#[derive(Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
    /// The result of statements and of calls that produce nothing.
    Undefined,
}

impl Value {
    /// Attempts to cast the `Value` into a `&str` or `None` if wrong type.
    pub fn cast_to_str(&self) -> Option<&str> {
        match self {
            Self::Str(string) => Some(string),
            _ => None,
        }
    }

    pub fn cast_to_number(&self) -> Option<f64> {
        match self {
            Self::Number(val) => Some(*val),
            _ => None,
        }
    }

    /// Numeric coercion used by arithmetic operators.
    /// Numbers are returned as-is, strings convert when their trimmed text is a number.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(val) => Some(*val),
            Self::Str(string) => {
                let trimmed = string.trim();
                if trimmed.is_empty() || !is_numeric_text(trimmed) {
                    return None;
                }
                trimmed.parse().ok()
            }
            Self::Undefined => None,
        }
    }

    fn print_number(f: &mut fmt::Formatter<'_>, val: f64) -> fmt::Result {
        if val.is_nan() {
            write!(f, "NaN")
        } else if val.is_infinite() {
            write!(f, "{}", if val > 0.0 { "Infinity" } else { "-Infinity" })
        } else if val == 0.0 {
            write!(f, "0") // also covers -0
        } else if val.abs() >= 1e21 || val.abs() < 1e-6 {
            // `{:e}` gives the shortest round-trip digits (`1.5e-7`, `1e21`); the console writes `1e+21`.
            let formatted = format!("{:e}", val);
            match formatted.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{}e+{}", mantissa, exponent)
                }
                _ => write!(f, "{}", formatted),
            }
        } else {
            // Shortest round-trip digits, without a fraction for integral values.
            write!(f, "{}", val)
        }
    }
}

/// `f64::from_str` also accepts `inf`, `NaN` and friends. Only plain decimal text counts here.
fn is_numeric_text(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(val) => Self::print_number(f, *val),
            Value::Str(val) => write!(f, "{}", val),
            Value::Undefined => write!(f, "undefined"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(val) => write!(f, "{:?}", val),
            _ => fmt::Display::fmt(self, f),
        }
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::Number(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Str(val.to_string())
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Str(val)
    }
}
