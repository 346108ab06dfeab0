#![deny(missing_docs)]

//! # apix core
//!
//! Core library for the Swagger endpoint explorer: consumes a decoded
//! OpenAPI/Swagger 2.x document and derives a browsable, tag-grouped
//! reference of every endpoint, plus an interactive request builder that
//! assembles and fires one HTTP call against a chosen operation.
//!
//! Data flow: loader -> document -> index builder -> grouped operations ->
//! renderers (display) and composer (interaction) -> runner -> result.

/// Shared error types.
pub mod error;

/// Decoded document shapes and operation lookup.
pub mod document;

/// Tag-grouped endpoint derivation.
pub mod index;

/// Pure display formatting.
pub mod render;

/// Request draft state machine.
pub mod composer;

/// Request construction and execution boundary.
pub mod runner;

/// Document fetch and loading state.
pub mod loader;

pub use composer::{body_editor_enabled, Composer, ComposerPhase, RequestDraft};
pub use document::{
    ApiDocument, HttpMethod, Info, Operation, OperationKey, ParamLocation, Parameter, PathItem,
    Response, Schema, DEFAULT_TAG,
};
pub use error::{ComposerError, CoreError, CoreResult, DocumentError, ExecutionError};
pub use index::{build_index, Endpoint, EndpointIndex};
pub use loader::{DocumentLoader, FetchDocument, LoadState};
pub use render::{
    body_parameter, classify_status, document_title, method_accent, parameter_rows, render_model,
    response_entries, MethodAccent, ParameterRow, ResponseEntry, StatusClass, MAX_RENDER_DEPTH,
};
pub use runner::{
    prepare_request, run, ExecuteRequest, ExecutionOutcome, ExecutionResponse, PreparedRequest,
};

#[cfg(feature = "client")]
pub use loader::HttpFetcher;
#[cfg(feature = "client")]
pub use runner::HttpExecutor;
