//! `LabelSet` — a label collection without duplicates, iterated in
//! sorted order.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::CollectionError;
use crate::types::{CallArgs, CollectionKind, Delegated};

use super::{str_arg, strings_arg, unsupported, LabelCollection};

const OPERATIONS: &[&str] = &[
    "add",
    "<<",
    "delete",
    "len",
    "empty?",
    "include?",
    "union",
    "difference",
    "to_vec",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelSet {
    items: BTreeSet<String>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the label was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.items.insert(label.into())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.items.contains(label)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl LabelCollection for LabelSet {
    fn labels(&self) -> Vec<&str> {
        self.items.iter().map(String::as_str).collect()
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Set
    }

    fn operations(&self) -> &[&'static str] {
        OPERATIONS
    }

    fn invoke(&mut self, name: &str, args: &CallArgs) -> Result<Delegated<Self>, CollectionError> {
        match name {
            "add" | "<<" => {
                let label = str_arg(args, "add", 0)?;
                self.items.insert(label.to_string());
                Ok(Delegated::Collection(self.clone()))
            }
            "delete" => {
                let label = str_arg(args, "delete", 0)?;
                self.items.remove(label);
                Ok(Delegated::Collection(self.clone()))
            }
            "len" => Ok(Delegated::value(self.items.len())),
            "empty?" => Ok(Delegated::value(self.items.is_empty())),
            "include?" => {
                let label = str_arg(args, "include?", 0)?;
                Ok(Delegated::value(self.contains(label)))
            }
            "union" => {
                let other = strings_arg(args, "union", 0)?;
                let merged = self.items.iter().cloned().chain(other).collect();
                Ok(Delegated::Collection(merged))
            }
            "difference" => {
                let other: BTreeSet<String> = strings_arg(args, "difference", 0)?
                    .into_iter()
                    .collect();
                let remaining = self.items.difference(&other).cloned().collect();
                Ok(Delegated::Collection(remaining))
            }
            "to_vec" => Ok(Delegated::value(
                self.items.iter().cloned().collect::<Vec<_>>(),
            )),
            _ => Err(unsupported(self.kind(), name)),
        }
    }
}
