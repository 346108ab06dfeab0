#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use apix_core::{ComposerError, DocumentError, ExecutionError};
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Document loading failed; nothing can be rendered.
    #[display("{}", _0)]
    Document(DocumentError),

    /// Composition refused; no request was fired.
    #[display("{}", _0)]
    Composer(ComposerError),

    /// Execution failed after submission.
    #[display("{}", _0)]
    Execution(ExecutionError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
