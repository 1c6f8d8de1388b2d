//! The normalization mapping: canonical identifier → original label,
//! built once from a collection and never mutated afterwards.

use std::collections::BTreeMap;

use crate::error::ViewError;
use crate::normalize::canonical_identifier;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizationMapping {
    entries: BTreeMap<String, String>,
}

impl NormalizationMapping {
    /// Build the mapping in a single pass over `labels`. The first label
    /// whose identifier is already taken aborts the build.
    pub fn build<'a, I>(labels: I) -> Result<Self, ViewError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        labels
            .into_iter()
            .try_fold(BTreeMap::<String, String>::new(), |mut entries, label| {
                let identifier = canonical_identifier(label);
                if let Some(existing) = entries.get(&identifier) {
                    return Err(ViewError::DuplicateKey {
                        identifier,
                        label: label.to_string(),
                        existing: existing.clone(),
                    });
                }
                entries.insert(identifier, label.to_string());
                Ok(entries)
            })
            .map(|entries| Self { entries })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// The original label that produced `identifier`.
    pub fn label_for(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// Identifiers in sorted order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
