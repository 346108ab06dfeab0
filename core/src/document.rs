#![deny(missing_docs)]

//! # Document Model
//!
//! Decoded Swagger 2.x document shapes, acting as an Intermediate
//! Deserialization Layer over the fetched JSON.
//!
//! The document is immutable once decoded: readers share it, and a reload
//! replaces it wholesale. Key order in `paths`, per-path operations,
//! `responses`, and `definitions` follows the source document, so authors
//! control display order by how they lay out the spec.

use crate::error::DocumentError;
use indexmap::IndexMap;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Group name used for operations with an empty tag list.
pub const DEFAULT_TAG: &str = "default";

/// HTTP methods an operation can be keyed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
}

impl HttpMethod {
    /// Every supported method, in Swagger path-item field order.
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
    ];

    /// Parses a path-item key (or user input); case-insensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| key.eq_ignore_ascii_case(method.as_str()))
    }

    /// Uppercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The location a parameter is supplied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Substituted into the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as a request header.
    Header,
    /// Sent as the request payload.
    Body,
}

impl ParamLocation {
    /// Lowercase name as written in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            ParamLocation::Path => "path",
            ParamLocation::Query => "query",
            ParamLocation::Header => "header",
            ParamLocation::Body => "body",
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A (possibly recursive) structural description of a data shape.
///
/// Kept as raw JSON: schemas are rendered for reading, never executed, and
/// `$ref` entries are displayed verbatim rather than resolved.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Schema(pub Value);

impl Schema {
    /// The declared `"type"` string, when present.
    pub fn type_name(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// Raw JSON view of the schema.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// One declared input of an operation.
///
/// Invariant (owned by the document author): (`name`, `location`) pairs are
/// unique within one operation. No dedup is applied here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    /// Parameter name as written in the document.
    pub name: String,
    /// Where the parameter is supplied.
    #[serde(rename = "in")]
    pub location: ParamLocation,
    /// Whether a value must be present at submission time.
    #[serde(default)]
    pub required: bool,
    /// Primitive type name, for non-body parameters.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Nested schema, for body parameters.
    pub schema: Option<Schema>,
    /// Human-readable description.
    pub description: Option<String>,
}

/// One declared response of an operation, keyed by status-code string.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Response {
    /// Human-readable description.
    pub description: Option<String>,
    /// Response payload shape, when declared.
    pub schema: Option<Schema>,
}

/// One (method, path template) endpoint definition.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Operation {
    /// Ordered tag list; the first tag is the grouping key.
    pub tags: Vec<String>,
    /// One-line summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Declared inputs, in document order.
    pub parameters: Vec<Parameter>,
    /// Declared responses keyed by status-code string, in document order.
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// The tag this operation is grouped under: first tag, or [`DEFAULT_TAG`].
    pub fn group_tag(&self) -> &str {
        self.tags.first().map_or(DEFAULT_TAG, String::as_str)
    }

    /// Declared path parameters, in document order.
    pub fn path_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|param| param.location == ParamLocation::Path)
    }
}

/// Ordered mapping of HTTP method to operation under one path template.
///
/// Deserializes from a raw path-item object, keeping only method keys;
/// `x-` extensions and shared-parameter blocks are skipped. A path item
/// with zero methods is representable and contributes nothing downstream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathItem {
    /// Operations in document order.
    pub operations: IndexMap<HttpMethod, Operation>,
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut operations = IndexMap::new();

        for (key, value) in raw {
            let Some(method) = HttpMethod::from_key(&key) else {
                continue;
            };
            let operation = serde_json::from_value::<Operation>(value).map_err(|e| {
                DeError::custom(format!("Failed to parse operation '{}': {}", key, e))
            })?;
            operations.insert(method, operation);
        }

        Ok(Self { operations })
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Info {
    /// API title.
    pub title: Option<String>,
    /// API description.
    pub description: Option<String>,
    /// API version string.
    pub version: Option<String>,
}

/// The decoded API description document.
///
/// Owned by the loader for the lifetime of one activation; shared read-only
/// with the index builder and every rendering call.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct ApiDocument {
    /// Document-level metadata.
    pub info: Info,
    /// Target host, e.g. `api.example.com`.
    pub host: Option<String>,
    /// Transport schemes in preference order, e.g. `["https"]`.
    pub schemes: Vec<String>,
    /// Path template to path item, in document order.
    pub paths: IndexMap<String, PathItem>,
    /// Named model definitions, in document order.
    pub definitions: IndexMap<String, Schema>,
}

impl ApiDocument {
    /// Decodes a document from JSON text. No other wire format is accepted.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(text).map_err(|e| DocumentError::Decode(e.to_string()))
    }

    /// Resolves an operation key against this document.
    ///
    /// Drafts hold keys rather than handles, so a reloaded document simply
    /// stops resolving keys that no longer exist.
    pub fn operation(&self, key: &OperationKey) -> Option<&Operation> {
        self.paths.get(&key.path)?.operations.get(&key.method)
    }

    /// True when the document declares no operations at all.
    ///
    /// This is the soft "nothing to show" state, not a load failure.
    pub fn is_empty(&self) -> bool {
        self.paths.values().all(|item| item.operations.is_empty())
    }
}

/// Identifies one operation by its (path template, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationKey {
    /// Path template, e.g. `/users/{id}`.
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
}

impl OperationKey {
    /// Creates a key for `method` on `path`.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
        }
    }
}

impl fmt::Display for OperationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
