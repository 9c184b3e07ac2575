//! A polymorphic value with a runtime tag, a name→tag lookup table, and the
//! fallible conversions the resolution and cast demonstrations rely on.

use std::collections::HashMap;
use std::fmt;

use crate::error::ScenarioError;

/// Runtime tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Integer,
    Float,
    Text,
    Boolean,
}

impl TypeTag {
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Integer => "Integer",
            TypeTag::Float => "Float",
            TypeTag::Text => "Text",
            TypeTag::Boolean => "Boolean",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically tagged value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
}

impl Value {
    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Integer(_) => TypeTag::Integer,
            Value::Float(_) => TypeTag::Float,
            Value::Text(_) => TypeTag::Text,
            Value::Boolean(_) => TypeTag::Boolean,
        }
    }

    /// Convert to the target tag. Identity casts and the integer→float
    /// widening succeed; every other pairing is an invalid cast.
    pub fn cast(self, target: TypeTag) -> Result<Value, ScenarioError> {
        match (self, target) {
            (value, target) if value.tag() == target => Ok(value),
            (Value::Integer(n), TypeTag::Float) => Ok(Value::Float(n as f64)),
            (value, target) => Err(ScenarioError::InvalidTypeCast {
                from: value.tag().name(),
                to: target.name(),
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// Lookup table from symbolic type names to runtime tags.
pub struct TypeRegistry {
    entries: HashMap<&'static str, TypeTag>,
}

impl TypeRegistry {
    /// Registry preloaded with the built-in names, including the short
    /// aliases users actually type.
    pub fn with_builtins() -> Self {
        let entries = HashMap::from([
            ("integer", TypeTag::Integer),
            ("int", TypeTag::Integer),
            ("float", TypeTag::Float),
            ("text", TypeTag::Text),
            ("string", TypeTag::Text),
            ("boolean", TypeTag::Boolean),
            ("bool", TypeTag::Boolean),
        ]);
        Self { entries }
    }

    /// Resolve a symbolic name to its tag. Lookup is case-insensitive.
    pub fn resolve(&self, name: &str) -> Result<TypeTag, ScenarioError> {
        self.entries
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ScenarioError::TypeResolutionFailure(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_resolves_builtin_names_and_aliases() {
        let registry = TypeRegistry::with_builtins();
        assert_eq!(registry.resolve("integer").unwrap(), TypeTag::Integer);
        assert_eq!(registry.resolve("int").unwrap(), TypeTag::Integer);
        assert_eq!(registry.resolve("String").unwrap(), TypeTag::Text);
        assert_eq!(registry.resolve("BOOL").unwrap(), TypeTag::Boolean);
    }

    #[test]
    fn unknown_names_fail_resolution() {
        let registry = TypeRegistry::with_builtins();
        let err = registry.resolve("Widget").unwrap_err();
        assert!(matches!(err, ScenarioError::TypeResolutionFailure(_)));
        assert_eq!(err.to_string(), "no registered type named 'Widget'");
    }

    #[test]
    fn identity_cast_succeeds() {
        let value = Value::Text("hello".to_string());
        assert_eq!(
            value.cast(TypeTag::Text).unwrap(),
            Value::Text("hello".to_string())
        );
    }

    #[test]
    fn integer_widens_to_float() {
        assert_eq!(
            Value::Integer(10).cast(TypeTag::Float).unwrap(),
            Value::Float(10.0)
        );
    }

    #[test]
    fn incompatible_tags_refuse_the_cast() {
        let err = Value::Integer(10).cast(TypeTag::Text).unwrap_err();
        assert_eq!(err.to_string(), "Integer value cannot be cast to Text");
    }

    #[test]
    fn float_does_not_narrow_to_integer() {
        assert!(Value::Float(1.5).cast(TypeTag::Integer).is_err());
    }
}
