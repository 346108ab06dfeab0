#![deny(missing_docs)]

//! # Execution Runner
//!
//! Turns a submitted draft into one concrete HTTP request and fires it.
//! The wire boundary is the [`ExecuteRequest`] trait; nothing here sends a
//! request without an explicit submission upstream.

use crate::composer::RequestDraft;
use crate::document::{ApiDocument, HttpMethod};
use crate::error::{ComposerError, ExecutionError};
use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use url::Url;

/// Scheme used when the document declares none.
const DEFAULT_SCHEME: &str = "https";

/// Characters escaped when substituting a value into one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'/')
    .add(b'%')
    .add(b'{')
    .add(b'}');

/// A ready-to-send HTTP request descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method of the selected operation.
    pub method: HttpMethod,
    /// Absolute target URL with path parameters substituted.
    pub url: String,
    /// Raw payload text; attached for non-GET methods with a non-empty body.
    pub body: Option<String>,
    /// Draft generation this request was built from.
    pub generation: u64,
}

/// Successful response payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResponse {
    /// HTTP status code (2xx).
    pub status: u16,
    /// Raw response payload.
    pub body: String,
}

/// Result of one execution, tagged with the draft generation it belongs to.
///
/// The consuming composer ignores outcomes whose generation is stale, so a
/// late-arriving response for a superseded draft is never applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Generation of the draft that produced the request.
    pub generation: u64,
    /// Success payload or typed execution failure.
    pub result: Result<ExecutionResponse, ExecutionError>,
}

/// Builds the concrete request for a draft against the current document.
///
/// The URL is `scheme://host` plus the path template with `{name}`
/// placeholders percent-encoded-substituted from the draft; the scheme is
/// the document's first entry, falling back to `https`. Errors here are
/// submission-time validation failures, so they are composer errors.
pub fn prepare_request(
    document: &ApiDocument,
    draft: &RequestDraft,
    generation: u64,
) -> Result<PreparedRequest, ComposerError> {
    let host = document
        .host
        .as_deref()
        .filter(|host| !host.is_empty())
        .ok_or(ComposerError::MissingHost)?;
    let scheme = document
        .schemes
        .first()
        .map_or(DEFAULT_SCHEME, String::as_str);

    let path = substitute_path(&draft.operation.path, &draft.path_params);
    let target = format!("{}://{}{}", scheme, host, path);
    let url = Url::parse(&target)
        .map_err(|_| ComposerError::InvalidTarget(target.clone()))?
        .to_string();

    let body = (draft.operation.method != HttpMethod::Get && !draft.body_text.trim().is_empty())
        .then(|| draft.body_text.clone());

    Ok(PreparedRequest {
        method: draft.operation.method,
        url,
        body,
        generation,
    })
}

/// Replaces `{name}` placeholders with percent-encoded entered values.
///
/// Placeholders without a corresponding entry are left literal.
fn substitute_path(template: &str, values: &IndexMap<String, String>) -> String {
    let mut path = template.to_string();
    for (name, value) in values {
        let placeholder = format!("{{{}}}", name);
        if path.contains(&placeholder) {
            let encoded = utf8_percent_encode(value, PATH_SEGMENT).to_string();
            path = path.replace(&placeholder, &encoded);
        }
    }
    path
}

/// The wire boundary: sends one prepared request.
pub trait ExecuteRequest {
    /// Sends the request and reports the raw response or a typed failure.
    fn execute(&self, request: &PreparedRequest) -> Result<ExecutionResponse, ExecutionError>;
}

/// Runs one prepared request through an executor.
///
/// A body that is not decodable JSON is reported as an execution failure
/// here, before anything is sent; the composer hands malformed text
/// through on purpose. The outcome carries the request's generation so the
/// composer can discard stale results.
pub fn run(executor: &impl ExecuteRequest, request: &PreparedRequest) -> ExecutionOutcome {
    let result = check_body(request).and_then(|()| executor.execute(request));
    ExecutionOutcome {
        generation: request.generation,
        result,
    }
}

fn check_body(request: &PreparedRequest) -> Result<(), ExecutionError> {
    if let Some(body) = &request.body {
        serde_json::from_str::<Value>(body)
            .map_err(|e| ExecutionError::MalformedBody(e.to_string()))?;
    }
    Ok(())
}

/// Executor backed by `ureq`.
#[cfg(feature = "client")]
pub struct HttpExecutor;

#[cfg(feature = "client")]
impl ExecuteRequest for HttpExecutor {
    fn execute(&self, request: &PreparedRequest) -> Result<ExecutionResponse, ExecutionError> {
        log::debug!("executing {} {}", request.method, request.url);

        let mut builder = ureq::http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        if request.body.is_some() {
            builder = builder.header("content-type", "application/json");
        }
        let wire_request = builder
            .body(request.body.as_deref().unwrap_or_default())
            .map_err(|e| ExecutionError::Network(e.to_string()))?;

        match ureq::run(wire_request) {
            Ok(mut response) => {
                let status = response.status().as_u16();
                let body = response
                    .body_mut()
                    .read_to_string()
                    .map_err(|e| ExecutionError::Network(e.to_string()))?;
                if (200..300).contains(&status) {
                    Ok(ExecutionResponse { status, body })
                } else {
                    Err(ExecutionError::Status { code: status, body })
                }
            }
            Err(ureq::Error::StatusCode(code)) => Err(ExecutionError::Status {
                code,
                body: String::new(),
            }),
            Err(e) => Err(ExecutionError::Network(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::OperationKey;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn draft(method: HttpMethod, path: &str) -> RequestDraft {
        RequestDraft {
            operation: OperationKey::new(method, path),
            path_params: IndexMap::new(),
            body_text: String::new(),
        }
    }

    fn document(json: &str) -> ApiDocument {
        ApiDocument::from_json(json).unwrap()
    }

    struct StaticExecutor(Result<ExecutionResponse, ExecutionError>);

    impl ExecuteRequest for StaticExecutor {
        fn execute(&self, _: &PreparedRequest) -> Result<ExecutionResponse, ExecutionError> {
            self.0.clone()
        }
    }

    struct RecordingExecutor {
        calls: RefCell<Vec<PreparedRequest>>,
    }

    impl ExecuteRequest for RecordingExecutor {
        fn execute(&self, request: &PreparedRequest) -> Result<ExecutionResponse, ExecutionError> {
            self.calls.borrow_mut().push(request.clone());
            Ok(ExecutionResponse {
                status: 200,
                body: String::new(),
            })
        }
    }

    #[test]
    fn test_prepare_substitutes_and_encodes_path_params() {
        let document = document(r#"{"host": "api.example.com", "schemes": ["http"]}"#);
        let mut draft = draft(HttpMethod::Get, "/users/{id}/files/{name}");
        draft.path_params.insert("id".into(), "42".into());
        draft.path_params.insert("name".into(), "a b/c".into());

        let request = prepare_request(&document, &draft, 1).unwrap();
        assert_eq!(request.url, "http://api.example.com/users/42/files/a%20b%2Fc");
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_prepare_defaults_scheme_to_https() {
        let document = document(r#"{"host": "api.example.com"}"#);
        let request = prepare_request(&document, &draft(HttpMethod::Get, "/ping"), 1).unwrap();
        assert_eq!(request.url, "https://api.example.com/ping");
    }

    #[test]
    fn test_prepare_requires_host() {
        let document = document(r#"{"schemes": ["https"]}"#);
        let err = prepare_request(&document, &draft(HttpMethod::Get, "/ping"), 1).unwrap_err();
        assert_eq!(err, ComposerError::MissingHost);
    }

    #[test]
    fn test_prepare_attaches_body_for_non_get_only() {
        let document = document(r#"{"host": "api.example.com"}"#);

        let mut post = draft(HttpMethod::Post, "/pets");
        post.body_text = "{\"name\": \"rex\"}".into();
        let request = prepare_request(&document, &post, 1).unwrap();
        assert_eq!(request.body.as_deref(), Some("{\"name\": \"rex\"}"));

        let mut get = draft(HttpMethod::Get, "/pets");
        get.body_text = "{\"name\": \"rex\"}".into();
        let request = prepare_request(&document, &get, 1).unwrap();
        assert_eq!(request.body, None);

        // An untouched body editor sends no payload.
        let post = draft(HttpMethod::Post, "/pets");
        let request = prepare_request(&document, &post, 1).unwrap();
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_unfilled_placeholder_stays_literal() {
        let document = document(r#"{"host": "api.example.com"}"#);
        let request =
            prepare_request(&document, &draft(HttpMethod::Get, "/users/{id}"), 1).unwrap();
        assert_eq!(request.url, "https://api.example.com/users/%7Bid%7D");
    }

    #[test]
    fn test_run_flags_malformed_body_without_sending() {
        let executor = RecordingExecutor {
            calls: RefCell::new(Vec::new()),
        };
        let request = PreparedRequest {
            method: HttpMethod::Post,
            url: "https://api.example.com/pets".into(),
            body: Some("not json".into()),
            generation: 3,
        };

        let outcome = run(&executor, &request);
        assert_eq!(outcome.generation, 3);
        assert!(matches!(
            outcome.result,
            Err(ExecutionError::MalformedBody(_))
        ));
        assert!(executor.calls.borrow().is_empty());
    }

    #[test]
    fn test_run_tags_outcome_with_generation() {
        let executor = StaticExecutor(Err(ExecutionError::Status {
            code: 404,
            body: "missing".into(),
        }));
        let request = PreparedRequest {
            method: HttpMethod::Get,
            url: "https://api.example.com/pets/9".into(),
            body: None,
            generation: 7,
        };

        let outcome = run(&executor, &request);
        assert_eq!(outcome.generation, 7);
        assert!(matches!(
            outcome.result,
            Err(ExecutionError::Status { code: 404, .. })
        ));
    }
}
