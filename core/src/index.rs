#![deny(missing_docs)]

//! # Endpoint Index
//!
//! Derives the tag-grouped view of a document's operations. The index is
//! transient: rebuilt whenever the document changes, never persisted.

use crate::document::{ApiDocument, Operation, OperationKey};
use indexmap::IndexMap;

/// One operation placed in a group, carrying its lookup key.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    /// Key resolving back to the operation in the current document.
    pub key: OperationKey,
    /// Snapshot of the operation for display.
    pub operation: Operation,
}

/// Tag name to ordered operation list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EndpointIndex {
    groups: IndexMap<String, Vec<Endpoint>>,
}

impl EndpointIndex {
    /// Iterates groups in first-appearance order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Endpoint])> {
        self.groups
            .iter()
            .map(|(tag, endpoints)| (tag.as_str(), endpoints.as_slice()))
    }

    /// Endpoints under one tag, if the tag exists.
    pub fn group(&self, tag: &str) -> Option<&[Endpoint]> {
        self.groups.get(tag).map(Vec::as_slice)
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of endpoints across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// True when no group holds any endpoint.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups every (path, method) operation by its first tag.
///
/// Pure derivation over the immutable document: iteration order of the
/// source mapping is preserved and no sorting is applied. An operation with
/// an empty tag list lands in [`crate::document::DEFAULT_TAG`]; a document
/// with no paths yields an empty index, never a failure.
pub fn build_index(document: &ApiDocument) -> EndpointIndex {
    let mut groups: IndexMap<String, Vec<Endpoint>> = IndexMap::new();

    for (path, item) in &document.paths {
        for (method, operation) in &item.operations {
            groups
                .entry(operation.group_tag().to_string())
                .or_default()
                .push(Endpoint {
                    key: OperationKey::new(*method, path.clone()),
                    operation: operation.clone(),
                });
        }
    }

    EndpointIndex { groups }
}
