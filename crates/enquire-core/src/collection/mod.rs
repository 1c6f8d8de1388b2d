//! The collection capability a `QueryableView` wraps.
//!
//! Defines the [`LabelCollection`] trait and two implementations:
//! [`LabelList`] (ordered, duplicates allowed) and [`LabelSet`] (unique,
//! sorted). Tests get a configurable `mock::MockCollection`.

mod list;
#[cfg(test)]
pub mod mock;
mod set;

pub use list::LabelList;
pub use set::LabelSet;

use crate::error::CollectionError;
use crate::types::{CallArgs, CollectionKind, Delegated, Value};

/// A collection of labels that can be iterated and can run named
/// operations.
///
/// `operations` is the delegation registry: a name listed there is
/// dispatched to `invoke` before the view considers it as a query.
pub trait LabelCollection: Sized {
    /// Labels in the collection's iteration order.
    fn labels(&self) -> Vec<&str>;

    fn kind(&self) -> CollectionKind;

    /// Names of every operation `invoke` accepts.
    fn operations(&self) -> &[&'static str];

    fn responds_to(&self, name: &str) -> bool {
        self.operations().iter().any(|op| *op == name)
    }

    /// Run the operation `name`. Only called for names this collection
    /// responds to.
    fn invoke(&mut self, name: &str, args: &CallArgs) -> Result<Delegated<Self>, CollectionError>;
}

// ==============================================================================
// Argument helpers
// ==============================================================================

pub(crate) fn arg<'a>(
    args: &'a CallArgs,
    operation: &'static str,
    position: usize,
) -> Result<&'a Value, CollectionError> {
    args.get(position)
        .ok_or(CollectionError::MissingArgument {
            operation,
            position,
        })
}

pub(crate) fn str_arg<'a>(
    args: &'a CallArgs,
    operation: &'static str,
    position: usize,
) -> Result<&'a str, CollectionError> {
    let value = arg(args, operation, position)?;
    value
        .as_str()
        .ok_or_else(|| CollectionError::InvalidArgument {
            operation,
            message: format!("expected string, got {}", value.type_name()),
        })
}

pub(crate) fn int_arg(
    args: &CallArgs,
    operation: &'static str,
    position: usize,
) -> Result<i64, CollectionError> {
    let value = arg(args, operation, position)?;
    // Textual callers (the CLI) hand every argument over as a string.
    let parsed = match value {
        Value::Str(s) => s.trim().parse::<i64>().ok(),
        other => other.as_int(),
    };
    parsed.ok_or_else(|| CollectionError::InvalidArgument {
        operation,
        message: format!("expected int, got {}", value.type_name()),
    })
}

/// Strings from either a `List` value or a single `Str`.
pub(crate) fn strings_arg(
    args: &CallArgs,
    operation: &'static str,
    position: usize,
) -> Result<Vec<String>, CollectionError> {
    match arg(args, operation, position)? {
        Value::List(items) => Ok(items.clone()),
        Value::Str(s) => Ok(vec![s.clone()]),
        other => Err(CollectionError::InvalidArgument {
            operation,
            message: format!("expected list, got {}", other.type_name()),
        }),
    }
}

pub(crate) fn unsupported(kind: CollectionKind, name: &str) -> CollectionError {
    CollectionError::Unsupported {
        kind: kind.to_string(),
        operation: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_arg_rejects_wrong_type() {
        let args = CallArgs::new().with_arg(3_i64);
        let err = str_arg(&args, "push", 0).expect_err("int is not a string");
        assert_eq!(
            err,
            CollectionError::InvalidArgument {
                operation: "push",
                message: "expected string, got int".into(),
            }
        );
    }

    #[test]
    fn missing_argument_names_position() {
        let err = int_arg(&CallArgs::new(), "get", 0).expect_err("no args");
        assert_eq!(err.to_string(), "get: missing argument at position 0");
    }

    #[test]
    fn int_arg_parses_numeric_strings() {
        let args = CallArgs::new().with_arg("-2").with_arg("two");
        assert_eq!(int_arg(&args, "get", 0).expect("numeric string"), -2);
        assert_eq!(
            int_arg(&args, "get", 1).expect_err("not a number"),
            CollectionError::InvalidArgument {
                operation: "get",
                message: "expected int, got string".into(),
            }
        );
    }

    #[test]
    fn strings_arg_accepts_single_string() {
        let args = CallArgs::new().with_arg("one");
        assert_eq!(
            strings_arg(&args, "concat", 0).expect("string is accepted"),
            vec!["one".to_string()]
        );
    }
}
