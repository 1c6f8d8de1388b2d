//! `LabelList` — an ordered label collection that allows duplicates.

use serde::Serialize;

use crate::error::CollectionError;
use crate::types::{CallArgs, CollectionKind, Delegated, Value};

use super::{int_arg, str_arg, strings_arg, unsupported, LabelCollection};

const OPERATIONS: &[&str] = &[
    "push", "<<", "pop", "len", "empty?", "include?", "first", "last", "get", "index", "join",
    "sort", "reverse", "concat", "to_vec",
];

const DEFAULT_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelList {
    items: Vec<String>,
}

impl LabelList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>) {
        self.items.push(label.into());
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Resolve a possibly negative index (counting from the end).
    fn resolve_index(&self, index: i64) -> Option<usize> {
        let len = i64::try_from(self.items.len()).ok()?;
        let idx = if index < 0 { len + index } else { index };
        (0..len).contains(&idx).then_some(idx as usize)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for LabelList {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl LabelCollection for LabelList {
    fn labels(&self) -> Vec<&str> {
        self.items.iter().map(String::as_str).collect()
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::List
    }

    fn operations(&self) -> &[&'static str] {
        OPERATIONS
    }

    fn invoke(&mut self, name: &str, args: &CallArgs) -> Result<Delegated<Self>, CollectionError> {
        match name {
            // In-place mutations hand back the mutated list so the caller
            // can keep chaining on it.
            "push" | "<<" => {
                let label = str_arg(args, "push", 0)?;
                self.items.push(label.to_string());
                Ok(Delegated::Collection(self.clone()))
            }
            "concat" => {
                let more = strings_arg(args, "concat", 0)?;
                self.items.extend(more);
                Ok(Delegated::Collection(self.clone()))
            }
            "pop" => Ok(Delegated::value(self.items.pop())),
            "len" => Ok(Delegated::value(self.items.len())),
            "empty?" => Ok(Delegated::value(self.items.is_empty())),
            "include?" => {
                let label = str_arg(args, "include?", 0)?;
                Ok(Delegated::value(self.items.iter().any(|l| l == label)))
            }
            "first" => Ok(Delegated::value(self.items.first().cloned())),
            "last" => Ok(Delegated::value(self.items.last().cloned())),
            "get" => {
                let index = int_arg(args, "get", 0)?;
                let idx = self
                    .resolve_index(index)
                    .ok_or(CollectionError::IndexOutOfRange {
                        operation: "get",
                        index,
                        len: self.items.len(),
                    })?;
                Ok(Delegated::value(self.items[idx].clone()))
            }
            "index" => {
                let label = str_arg(args, "index", 0)?;
                Ok(Delegated::Value(
                    self.items
                        .iter()
                        .position(|l| l == label)
                        .map_or(Value::Unit, Value::from),
                ))
            }
            "join" => {
                let separator = match args.keyword("separator").or_else(|| args.get(0)) {
                    Some(value) => value.as_str().ok_or_else(|| {
                        CollectionError::InvalidArgument {
                            operation: "join",
                            message: format!("expected string separator, got {}", value.type_name()),
                        }
                    })?,
                    None => DEFAULT_SEPARATOR,
                };
                Ok(Delegated::value(self.items.join(separator)))
            }
            "sort" => {
                let mut sorted = self.items.clone();
                sorted.sort();
                Ok(Delegated::Collection(Self::from(sorted)))
            }
            "reverse" => {
                let reversed = self.items.iter().rev().cloned().collect();
                Ok(Delegated::Collection(reversed))
            }
            "to_vec" => Ok(Delegated::value(self.items.clone())),
            _ => Err(unsupported(self.kind(), name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(labels: &[&str]) -> LabelList {
        labels.iter().copied().collect()
    }

    #[test]
    fn push_mutates_and_returns_same_kind() {
        let mut labels = list(&["a"]);
        let result = labels
            .invoke("<<", &CallArgs::new().with_arg("b"))
            .expect("push should succeed");
        assert_eq!(result, Delegated::Collection(list(&["a", "b"])));
        assert_eq!(labels.labels(), vec!["a", "b"]);
    }

    #[test]
    fn negative_get_counts_from_end() {
        let mut labels = list(&["a", "b", "c"]);
        let result = labels
            .invoke("get", &CallArgs::new().with_arg(-1_i64))
            .expect("get should succeed");
        assert_eq!(result, Delegated::value("c"));
    }

    #[test]
    fn get_out_of_range_fails() {
        let mut labels = list(&["a"]);
        let err = labels
            .invoke("get", &CallArgs::new().with_arg(5_i64))
            .expect_err("index 5 is out of range");
        assert_eq!(
            err,
            CollectionError::IndexOutOfRange {
                operation: "get",
                index: 5,
                len: 1,
            }
        );
    }

    #[test]
    fn join_uses_keyword_then_positional_then_default() {
        let mut labels = list(&["a", "b"]);
        let by_keyword = labels
            .invoke("join", &CallArgs::new().with_keyword("separator", "-"))
            .expect("join");
        assert_eq!(by_keyword, Delegated::value("a-b"));
        let by_default = labels.invoke("join", &CallArgs::new()).expect("join");
        assert_eq!(by_default, Delegated::value("a, b"));
    }

    #[test]
    fn sort_leaves_receiver_untouched() {
        let mut labels = list(&["b", "a"]);
        let sorted = labels.invoke("sort", &CallArgs::new()).expect("sort");
        assert_eq!(sorted, Delegated::Collection(list(&["a", "b"])));
        assert_eq!(labels.labels(), vec!["b", "a"]);
    }

    #[test]
    fn empty_list_scalars() {
        let mut labels = LabelList::new();
        assert_eq!(
            labels.invoke("first", &CallArgs::new()).expect("first"),
            Delegated::Value(Value::Unit)
        );
        assert_eq!(
            labels.invoke("pop", &CallArgs::new()).expect("pop"),
            Delegated::Value(Value::Unit)
        );
        assert_eq!(
            labels.invoke("empty?", &CallArgs::new()).expect("empty?"),
            Delegated::value(true)
        );
    }

    #[test]
    fn unknown_operation_is_unsupported() {
        let mut labels = LabelList::new();
        let err = labels
            .invoke("frobnicate", &CallArgs::new())
            .expect_err("not an operation");
        assert!(matches!(err, CollectionError::Unsupported { .. }));
        assert!(!labels.responds_to("frobnicate"));
        assert!(labels.responds_to("<<"));
    }
}
