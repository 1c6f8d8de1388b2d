//! Values passed into and returned from dispatched operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ==============================================================================
// Values
// ==============================================================================

/// A dynamically-typed argument or result of a dispatched operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the variant, used in argument error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::List(_) => "list",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unit => write!(f, "null"),
            other => {
                let json = serde_json::to_string(other).map_err(|_| std::fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Option<String>> for Value {
    fn from(s: Option<String>) -> Self {
        s.map_or(Self::Unit, Self::Str)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

// ==============================================================================
// Call Arguments
// ==============================================================================

/// Positional and keyword arguments for a dispatched call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallArgs {
    pub positional: Vec<Value>,
    pub keyword: BTreeMap<String, Value>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positional<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            keyword: BTreeMap::new(),
        }
    }

    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn with_keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, position: usize) -> Option<&Value> {
        self.positional.get(position)
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keyword.get(name)
    }
}

// ==============================================================================
// Delegation Results
// ==============================================================================

/// Kind tag of a wrapped collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    List,
    Set,
    Other(&'static str),
}

impl std::fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Set => write!(f, "set"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// What a collection operation hands back. `Collection` means the result
/// is the same kind as the receiver and gets rewrapped by the view;
/// anything else travels as a plain `Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delegated<C> {
    Collection(C),
    Value(Value),
}

impl<C> Delegated<C> {
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }
}
