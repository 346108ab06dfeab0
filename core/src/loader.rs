#![deny(missing_docs)]

//! # Document Loader
//!
//! Obtains the decoded API document from a fixed, configured source. One
//! activation performs exactly one fetch; a failure is terminal for that
//! activation and a fresh activation starts an independent fetch.

use crate::document::ApiDocument;
use crate::error::DocumentError;

/// Observable loading state.
///
/// Transitions strictly `Loading -> (Ready | Failed)`; never reversed
/// without a fresh activation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// No activation yet.
    #[default]
    Idle,
    /// A fetch is underway.
    Loading,
    /// The document decoded; shared read-only until replaced wholesale.
    Ready(ApiDocument),
    /// The fetch or decode failed; no automatic retry.
    Failed(DocumentError),
}

/// Obtains the raw document text from a source.
pub trait FetchDocument {
    /// Performs one fetch of `source`.
    fn fetch(&self, source: &str) -> Result<String, DocumentError>;
}

/// Owns the document for the lifetime of one activation.
#[derive(Debug, Default)]
pub struct DocumentLoader {
    source: String,
    state: LoadState,
}

impl DocumentLoader {
    /// Creates an idle loader for a fixed source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            state: LoadState::Idle,
        }
    }

    /// The configured source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current loading state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The document, when ready.
    pub fn document(&self) -> Option<&ApiDocument> {
        match &self.state {
            LoadState::Ready(document) => Some(document),
            _ => None,
        }
    }

    /// Runs one activation: fetch, decode, publish.
    ///
    /// Re-activation while a fetch is underway is refused
    /// ([`DocumentError::AlreadyLoading`]); a single-shot fetch per
    /// activation is assumed. An empty-but-decodable document is `Ready`,
    /// not `Failed`: the empty state is the renderer's concern.
    pub fn activate(&mut self, fetcher: &impl FetchDocument) -> Result<(), DocumentError> {
        if matches!(self.state, LoadState::Loading) {
            return Err(DocumentError::AlreadyLoading);
        }

        self.state = LoadState::Loading;
        log::debug!("fetching API document from {}", self.source);

        match fetcher
            .fetch(&self.source)
            .and_then(|text| ApiDocument::from_json(&text))
        {
            Ok(document) => {
                log::debug!("document ready: {} path(s)", document.paths.len());
                self.state = LoadState::Ready(document);
                Ok(())
            }
            Err(error) => {
                self.state = LoadState::Failed(error.clone());
                Err(error)
            }
        }
    }
}

/// Fetcher backed by `ureq`: one HTTP GET per activation.
#[cfg(feature = "client")]
pub struct HttpFetcher;

#[cfg(feature = "client")]
impl FetchDocument for HttpFetcher {
    fn fetch(&self, source: &str) -> Result<String, DocumentError> {
        let mut response = ureq::get(source)
            .call()
            .map_err(|e| DocumentError::Fetch(e.to_string()))?;
        response
            .body_mut()
            .read_to_string()
            .map_err(|e| DocumentError::Fetch(e.to_string()))
    }
}
