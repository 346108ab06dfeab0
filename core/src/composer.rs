#![deny(missing_docs)]

//! # Request Composer
//!
//! Collects path-parameter values and an optional body for one selected
//! operation, then produces a ready-to-send request on submission.
//!
//! Phases move strictly `Closed -> Open -> Composing* -> Submitted`; any
//! new open discards the prior draft. Validation happens at submission
//! time only, and a refused submission leaves the draft untouched.

use crate::document::{ApiDocument, HttpMethod, OperationKey};
use crate::error::{ComposerError, ExecutionError};
use crate::runner::{prepare_request, ExecutionOutcome, ExecutionResponse, PreparedRequest};
use indexmap::IndexMap;

/// Whether the body editor is offered for a method.
///
/// Fixed rule: every method except GET gets a body editor, whether or not
/// the operation declares a body parameter. Conversely a GET operation
/// with a declared body parameter has no way to submit it. Preserved
/// as-is; see DESIGN.md.
pub fn body_editor_enabled(method: HttpMethod) -> bool {
    method != HttpMethod::Get
}

/// The working state for one composer session targeting one operation.
///
/// Holds a lookup key rather than an operation handle, so a document
/// reload cannot leave the draft pointing at a stale operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDraft {
    /// Key of the selected operation.
    pub operation: OperationKey,
    /// Entered path-parameter values, seeded empty per declared parameter.
    pub path_params: IndexMap<String, String>,
    /// Raw body text, intended to be JSON. Not validated here.
    pub body_text: String,
}

/// Observable composer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerPhase {
    /// No operation selected.
    Closed,
    /// A fresh draft is open, untouched so far.
    Open,
    /// The draft has received at least one edit.
    Composing,
    /// The draft was submitted; terminal until the next open.
    Submitted,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Closed,
    Open {
        draft: RequestDraft,
        edited: bool,
    },
    Submitted {
        draft: RequestDraft,
    },
}

/// Stateful request builder for at most one draft at a time.
#[derive(Debug, Default)]
pub struct Composer {
    state: State,
    generation: u64,
}

impl Composer {
    /// Creates a closed composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> ComposerPhase {
        match &self.state {
            State::Closed => ComposerPhase::Closed,
            State::Open { edited: false, .. } => ComposerPhase::Open,
            State::Open { edited: true, .. } => ComposerPhase::Composing,
            State::Submitted { .. } => ComposerPhase::Submitted,
        }
    }

    /// The active draft, if one is open or submitted.
    pub fn draft(&self) -> Option<&RequestDraft> {
        match &self.state {
            State::Closed => None,
            State::Open { draft, .. } | State::Submitted { draft } => Some(draft),
        }
    }

    /// Generation of the current draft; bumped on every open.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Opens a fresh draft for `key`, discarding any prior draft.
    ///
    /// Always yields an empty draft, even when re-opening the same
    /// operation: drafts are not resumed. Path-parameter slots are seeded
    /// from the operation's declared path parameters.
    pub fn open(&mut self, document: &ApiDocument, key: OperationKey) -> Result<(), ComposerError> {
        let operation = document
            .operation(&key)
            .ok_or(ComposerError::UnknownOperation)?;

        let path_params = operation
            .path_parameters()
            .map(|param| (param.name.clone(), String::new()))
            .collect();

        self.generation += 1;
        self.state = State::Open {
            draft: RequestDraft {
                operation: key,
                path_params,
                body_text: String::new(),
            },
            edited: false,
        };
        Ok(())
    }

    /// Closes the composer, dropping the draft.
    pub fn close(&mut self) {
        self.state = State::Closed;
    }

    /// Records an entered value for a declared path parameter.
    ///
    /// Synchronous local update with no external effect.
    pub fn set_path_param(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), ComposerError> {
        let State::Open { draft, edited } = &mut self.state else {
            return Err(ComposerError::NotOpen);
        };
        let slot = draft
            .path_params
            .get_mut(name)
            .ok_or_else(|| ComposerError::UnknownParameter(name.to_string()))?;
        *slot = value.into();
        *edited = true;
        Ok(())
    }

    /// Replaces the draft body text.
    ///
    /// Kept even for GET drafts, where it is never attached to a request;
    /// content is not validated until execution.
    pub fn set_body(&mut self, text: impl Into<String>) -> Result<(), ComposerError> {
        let State::Open { draft, edited } = &mut self.state else {
            return Err(ComposerError::NotOpen);
        };
        draft.body_text = text.into();
        *edited = true;
        Ok(())
    }

    /// Validates the draft and produces the request to execute.
    ///
    /// Required path parameters left empty block submission: the error
    /// names the offending parameters and the composer stays in place. On
    /// success the phase becomes [`ComposerPhase::Submitted`], which makes
    /// a second submission for the same draft impossible; at most one
    /// execution exists per draft.
    pub fn submit(&mut self, document: &ApiDocument) -> Result<PreparedRequest, ComposerError> {
        let State::Open { draft, .. } = &self.state else {
            return Err(ComposerError::NotOpen);
        };
        let operation = document
            .operation(&draft.operation)
            .ok_or(ComposerError::UnknownOperation)?;

        let missing: Vec<String> = operation
            .path_parameters()
            .filter(|param| param.required)
            .filter(|param| {
                draft
                    .path_params
                    .get(&param.name)
                    .is_none_or(|value| value.trim().is_empty())
            })
            .map(|param| param.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(ComposerError::MissingParameters(missing));
        }

        let request = prepare_request(document, draft, self.generation)?;

        let State::Open { draft, .. } = std::mem::take(&mut self.state) else {
            return Err(ComposerError::NotOpen);
        };
        self.state = State::Submitted { draft };
        Ok(request)
    }

    /// Accepts an execution outcome for the current draft.
    ///
    /// Returns `None` for an outcome produced by a superseded draft, or
    /// when the composer has been closed in the meantime; a late-arriving
    /// result must be ignored, not applied.
    pub fn accept<'a>(
        &self,
        outcome: &'a ExecutionOutcome,
    ) -> Option<&'a Result<ExecutionResponse, ExecutionError>> {
        (self.draft().is_some() && outcome.generation == self.generation)
            .then_some(&outcome.result)
    }
}
