//! The flat variable table shared by every declaration in a walk.

use std::collections::HashMap;
use twig_value::Value;

/// Maps variable names to their last assigned value.
/// There is a single scope: re-declaring a name overwrites it, and nothing is ever removed except by [`Self::clear`].
#[derive(Debug, Clone, Default)]
pub struct VariableTable {
    bindings: HashMap<String, Value>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, returning the previous binding if any.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    /// Returns the value bound to `name`, or `name` itself as a string when it was never bound.
    pub fn lookup(&self, name: &str) -> Value {
        match self.bindings.get(name) {
            Some(value) => value.clone(),
            None => Value::Str(name.to_string()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_define_and_lookup() {
        let mut table = VariableTable::new();
        assert_eq!(table.define("a", Value::Number(1.0)), None);
        assert_eq!(table.lookup("a"), Value::Number(1.0));
        assert_eq!(table.define("a", Value::from("x")), Some(Value::Number(1.0)));
        assert_eq!(table.lookup("a"), Value::from("x"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unbound_falls_back_to_name() {
        let table = VariableTable::new();
        assert_eq!(table.lookup("nope"), Value::from("nope"));
        assert_eq!(table.get("nope"), None);
    }

    #[test]
    fn test_falsy_values_are_still_bound() {
        let mut table = VariableTable::new();
        table.define("zero", Value::Number(0.0));
        table.define("empty", Value::from(""));
        assert_eq!(table.lookup("zero"), Value::Number(0.0));
        assert_eq!(table.lookup("empty"), Value::from(""));
    }

    #[test]
    fn test_clear() {
        let mut table = VariableTable::new();
        table.define("a", Value::Number(1.0));
        table.clear();
        assert!(table.is_empty());
        assert_eq!(table.lookup("a"), Value::from("a"));
    }
}
