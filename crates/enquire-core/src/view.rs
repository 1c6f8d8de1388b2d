//! `QueryableView` — wraps a label collection, answers `<label>?` queries
//! from a normalization mapping and forwards everything else to the
//! collection.
//!
//! Calls resolve in a fixed order (see [`Route`]):
//! 1. an operation the collection itself responds to always runs on the
//!    collection, even if its name is also a normalized identifier;
//!    same-kind results come back wrapped in a fresh view;
//! 2. a normalized identifier answers `true`;
//! 3. any other `?`-suffixed name answers `false`;
//! 4. everything else is [`ViewError::NoSuchOperation`].

use crate::collection::LabelCollection;
use crate::error::ViewError;
use crate::mapping::NormalizationMapping;
use crate::normalize::{canonical_identifier, is_query_name};
use crate::types::{CallArgs, CollectionKind, Delegated, Value};

/// Which dispatch rule a name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Passthrough,
    NormalizedQuery,
    UnknownQuery,
    Unsupported,
}

/// The outcome of a successful [`QueryableView::call`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched<C> {
    /// A same-kind collection returned by the underlying operation,
    /// rewrapped.
    View(QueryableView<C>),
    /// Any other result of the underlying operation, unchanged.
    Value(Value),
    /// Answer to a label query.
    Query(bool),
}

impl<C> Dispatched<C> {
    /// Boolean answer, whether it came from a label query or from an
    /// underlying operation returning a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Query(b) => Some(*b),
            Self::Value(value) => value.as_bool(),
            Self::View(_) => None,
        }
    }

    pub fn into_view(self) -> Option<QueryableView<C>> {
        match self {
            Self::View(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryableView<C> {
    underlying: C,
    mapping: NormalizationMapping,
}

impl<C: LabelCollection> QueryableView<C> {
    /// Wrap `underlying`, building the normalization mapping from its
    /// current labels. Fails if two labels normalize to the same
    /// identifier.
    pub fn new(underlying: C) -> Result<Self, ViewError> {
        let mapping = NormalizationMapping::build(underlying.labels())?;
        tracing::debug!(
            kind = %underlying.kind(),
            labels = mapping.len(),
            "built queryable view"
        );
        Ok(Self {
            underlying,
            mapping,
        })
    }

    pub fn route(&self, name: &str) -> Route {
        if self.underlying.responds_to(name) {
            Route::Passthrough
        } else if self.mapping.contains(name) {
            Route::NormalizedQuery
        } else if is_query_name(name) {
            Route::UnknownQuery
        } else {
            Route::Unsupported
        }
    }

    /// Dispatch `name` with `args`. Errors raised by the underlying
    /// operation are returned as [`ViewError::Collection`].
    pub fn call(&mut self, name: &str, args: &CallArgs) -> Result<Dispatched<C>, ViewError> {
        let route = self.route(name);
        tracing::trace!(operation = name, ?route, kind = %self.underlying.kind(), "dispatch");

        match route {
            Route::Passthrough => match self.underlying.invoke(name, args)? {
                Delegated::Collection(collection) => {
                    Ok(Dispatched::View(QueryableView::new(collection)?))
                }
                Delegated::Value(value) => Ok(Dispatched::Value(value)),
            },
            Route::NormalizedQuery => Ok(Dispatched::Query(true)),
            Route::UnknownQuery => Ok(Dispatched::Query(false)),
            Route::Unsupported => Err(ViewError::NoSuchOperation(name.to_string())),
        }
    }

    /// Dispatch `name` without arguments and expect a boolean answer.
    pub fn query(&mut self, name: &str) -> Result<bool, ViewError> {
        self.call(name, &CallArgs::new())?
            .as_bool()
            .ok_or_else(|| ViewError::NotBoolean(name.to_string()))
    }

    /// Whether a call to `name` would be answered rather than rejected
    /// with `NoSuchOperation`. Unknown `?` names are not advertised even
    /// though they answer `false`.
    pub fn responds_to(&self, name: &str) -> bool {
        matches!(
            self.route(name),
            Route::Passthrough | Route::NormalizedQuery
        )
    }

    /// Whether `label` was present when the view was built.
    pub fn has_label(&self, label: &str) -> bool {
        self.mapping.contains(&canonical_identifier(label))
    }

    pub fn kind(&self) -> CollectionKind {
        self.underlying.kind()
    }

    pub fn underlying(&self) -> &C {
        &self.underlying
    }

    pub fn mapping(&self) -> &NormalizationMapping {
        &self.mapping
    }
}
