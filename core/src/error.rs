#![deny(missing_docs)]

//! # Error Handling
//!
//! Typed error families for the three fallible surfaces of the explorer:
//! document loading, request composition, and request execution.
//!
//! An empty-but-decodable document is deliberately not an error; see
//! [`crate::document::ApiDocument::is_empty`].

use derive_more::{Display, From};

/// Failures while obtaining or decoding the API document.
///
/// Fatal for the current loader activation; there is no retry. A fresh
/// activation starts an independent fetch.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The fetch itself failed (transport-level).
    #[display("Failed to fetch API document: {_0}")]
    Fetch(String),

    /// The payload was not a decodable Swagger JSON document.
    #[display("Failed to decode API document: {_0}")]
    Decode(String),

    /// An activation was requested while a fetch was already underway.
    #[display("A document fetch is already in progress")]
    AlreadyLoading,
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for DocumentError {}

/// Failures raised by the request composer.
///
/// Always recovered locally: a refused submission leaves the composer in
/// its current phase with the draft intact.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ComposerError {
    /// An edit or submission was attempted with no draft open.
    #[display("No request draft is open")]
    NotOpen,

    /// The draft's operation key no longer resolves against the document.
    #[display("Operation is not defined in the current document")]
    UnknownOperation,

    /// A value was entered for a path parameter the operation does not declare.
    #[display("Operation declares no path parameter named '{_0}'")]
    UnknownParameter(String),

    /// Required path parameters were left empty at submission time.
    #[display("Required path parameters missing a value: {}", _0.join(", "))]
    MissingParameters(Vec<String>),

    /// The document declares no host to send the request to.
    #[display("Document declares no host; cannot build a request target")]
    MissingHost,

    /// The assembled target is not a valid absolute URL.
    #[display("Request target is not a valid URL: {_0}")]
    InvalidTarget(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for ComposerError {}

/// Failures while sending a prepared request.
///
/// Scoped to the composer/result surface; never affects the rendered
/// reference listing.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// Transport-level failure before any response arrived.
    #[display("Network error: {_0}")]
    Network(String),

    /// The target answered with a non-2xx status.
    #[display("Request failed with status {code}")]
    Status {
        /// HTTP status code of the failure response.
        code: u16,
        /// Raw response payload, possibly empty.
        body: String,
    },

    /// The draft body was attached but is not decodable JSON.
    #[display("Request body is not valid JSON: {_0}")]
    MalformedBody(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for ExecutionError {}

/// Umbrella error for callers driving the whole explorer.
#[derive(Debug, Display, From, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Document loading failed.
    #[display("{_0}")]
    Document(DocumentError),

    /// Composition was refused.
    #[display("{_0}")]
    Composer(ComposerError),

    /// Execution failed.
    #[display("{_0}")]
    Execution(ExecutionError),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CoreError {}

/// Helper type alias for Result using CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
