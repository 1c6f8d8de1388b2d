use std::collections::HashMap;

use crate::error::CollectionError;
use crate::types::{CallArgs, CollectionKind, Delegated, Value};

use super::LabelCollection;

/// A scriptable collection for dispatch tests. Operations and their
/// canned outcomes are registered through the builder; every invocation
/// is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCollection {
    labels: Vec<String>,
    operations: Vec<&'static str>,
    responses: HashMap<&'static str, MockResponse>,
    pub calls: Vec<(String, CallArgs)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockResponse {
    Value(Value),
    /// Return a same-kind collection holding the current labels plus these.
    Extend(Vec<String>),
    Fail(CollectionError),
}

impl MockCollection {
    pub fn builder() -> MockCollectionBuilder {
        MockCollectionBuilder {
            labels: Vec::new(),
            responses: Vec::new(),
        }
    }
}

pub struct MockCollectionBuilder {
    labels: Vec<String>,
    responses: Vec<(&'static str, MockResponse)>,
}

impl MockCollectionBuilder {
    pub fn with_labels(mut self, labels: &[&str]) -> Self {
        self.labels.extend(labels.iter().map(|l| l.to_string()));
        self
    }

    pub fn with_operation(mut self, name: &'static str, response: MockResponse) -> Self {
        self.responses.push((name, response));
        self
    }

    pub fn build(self) -> MockCollection {
        MockCollection {
            labels: self.labels,
            operations: self.responses.iter().map(|(name, _)| *name).collect(),
            responses: self.responses.into_iter().collect(),
            calls: Vec::new(),
        }
    }
}

impl LabelCollection for MockCollection {
    fn labels(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }

    fn kind(&self) -> CollectionKind {
        CollectionKind::Other("mock")
    }

    fn operations(&self) -> &[&'static str] {
        &self.operations
    }

    fn invoke(&mut self, name: &str, args: &CallArgs) -> Result<Delegated<Self>, CollectionError> {
        self.calls.push((name.to_string(), args.clone()));
        match self.responses.get(name).cloned() {
            Some(MockResponse::Value(value)) => Ok(Delegated::Value(value)),
            Some(MockResponse::Extend(more)) => {
                let mut next = self.clone();
                next.calls.clear();
                next.labels.extend(more);
                Ok(Delegated::Collection(next))
            }
            Some(MockResponse::Fail(err)) => Err(err),
            None => Err(super::unsupported(self.kind(), name)),
        }
    }
}
