#![deny(missing_docs)]

//! # Shared Command Plumbing
//!
//! Document-source arguments common to every command, plus operation
//! addressing from user input.

use crate::error::{CliError, CliResult};
use apix_core::{ApiDocument, DocumentLoader, HttpFetcher, HttpMethod};

/// Where the Swagger document is fetched from.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// URL of the Swagger JSON document.
    #[clap(long, env = "APIX_SPEC_URL")]
    pub spec_url: String,
}

impl SourceArgs {
    /// Runs one loader activation against the configured source.
    pub fn load(&self) -> CliResult<ApiDocument> {
        let mut loader = DocumentLoader::new(&self.spec_url);
        loader.activate(&HttpFetcher)?;
        loader
            .document()
            .cloned()
            .ok_or_else(|| CliError::General("loader finished without a document".into()))
    }
}

/// Parses a user-entered HTTP method name.
pub fn parse_method(input: &str) -> CliResult<HttpMethod> {
    HttpMethod::from_key(input)
        .ok_or_else(|| CliError::General(format!("unknown HTTP method '{}'", input)))
}
