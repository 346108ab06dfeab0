//! End-to-end scenarios: load a document, index it, compose, and execute
//! against a fake wire boundary.

use apix_core::{
    build_index, run, ApiDocument, Composer, ComposerError, ComposerPhase, DocumentError,
    DocumentLoader, ExecuteRequest, ExecutionError, ExecutionResponse, FetchDocument, HttpMethod,
    LoadState, OperationKey, PreparedRequest,
};
use pretty_assertions::assert_eq;
use std::cell::RefCell;

const USERS_DOCUMENT: &str = r#"{
    "info": {"title": "Users API", "version": "1.0"},
    "host": "api.example.com",
    "schemes": ["https"],
    "paths": {
        "/users/{id}": {
            "get": {
                "tags": ["users"],
                "parameters": [{"name": "id", "in": "path", "required": true}],
                "responses": {"200": {"description": "ok"}}
            }
        }
    }
}"#;

struct StaticFetcher(&'static str);

impl FetchDocument for StaticFetcher {
    fn fetch(&self, _: &str) -> Result<String, DocumentError> {
        Ok(self.0.to_string())
    }
}

#[derive(Default)]
struct RecordingExecutor {
    calls: RefCell<Vec<PreparedRequest>>,
}

impl ExecuteRequest for RecordingExecutor {
    fn execute(&self, request: &PreparedRequest) -> Result<ExecutionResponse, ExecutionError> {
        self.calls.borrow_mut().push(request.clone());
        Ok(ExecutionResponse {
            status: 200,
            body: "{\"id\": \"42\"}".into(),
        })
    }
}

fn load(document: &'static str) -> ApiDocument {
    let mut loader = DocumentLoader::new("https://api.example.com/swagger.json");
    loader.activate(&StaticFetcher(document)).unwrap();
    loader.document().unwrap().clone()
}

#[test]
fn test_users_scenario_blocks_then_fires() {
    let document = load(USERS_DOCUMENT);

    let index = build_index(&document);
    assert_eq!(index.group_count(), 1);
    assert_eq!(index.group("users").unwrap().len(), 1);

    let executor = RecordingExecutor::default();
    let mut composer = Composer::new();
    let key = OperationKey::new(HttpMethod::Get, "/users/{id}");
    composer.open(&document, key).unwrap();

    // Submitting with the required parameter empty fires nothing.
    let err = composer.submit(&document).unwrap_err();
    assert_eq!(err, ComposerError::MissingParameters(vec!["id".into()]));
    assert!(executor.calls.borrow().is_empty());
    assert_eq!(composer.phase(), ComposerPhase::Open);

    // Filling it targets the substituted path.
    composer.set_path_param("id", "42").unwrap();
    let request = composer.submit(&document).unwrap();
    assert_eq!(request.url, "https://api.example.com/users/42");

    let outcome = run(&executor, &request);
    assert_eq!(executor.calls.borrow().len(), 1);
    let result = composer.accept(&outcome).unwrap();
    assert_eq!(result.as_ref().unwrap().status, 200);
}

#[test]
fn test_empty_document_renders_soft_state() {
    let document = load(r#"{"paths": {}}"#);
    assert!(document.is_empty());

    let index = build_index(&document);
    assert!(index.is_empty());
    assert_eq!(index.group_count(), 0);
}

#[test]
fn test_draft_reset_between_operations() {
    let document = load(
        r#"{
            "host": "api.example.com",
            "paths": {
                "/users/{id}": {
                    "get": {"parameters": [{"name": "id", "in": "path", "required": true}]}
                },
                "/orgs/{org}": {
                    "get": {"parameters": [{"name": "org", "in": "path", "required": true}]}
                }
            }
        }"#,
    );

    let mut composer = Composer::new();
    composer
        .open(&document, OperationKey::new(HttpMethod::Get, "/users/{id}"))
        .unwrap();
    composer.set_path_param("id", "42").unwrap();

    composer
        .open(&document, OperationKey::new(HttpMethod::Get, "/orgs/{org}"))
        .unwrap();
    let draft = composer.draft().unwrap();
    assert_eq!(draft.path_params.keys().collect::<Vec<_>>(), vec!["org"]);
    assert!(draft.path_params.values().all(String::is_empty));
}

#[test]
fn test_stale_execution_result_is_dropped() {
    let document = load(USERS_DOCUMENT);
    let executor = RecordingExecutor::default();

    let mut composer = Composer::new();
    let key = OperationKey::new(HttpMethod::Get, "/users/{id}");
    composer.open(&document, key.clone()).unwrap();
    composer.set_path_param("id", "1").unwrap();
    let request = composer.submit(&document).unwrap();
    let outcome = run(&executor, &request);

    // The user moved on before the result landed.
    composer.open(&document, key).unwrap();
    assert!(composer.accept(&outcome).is_none());

    // The fresh draft accepts only its own outcome.
    composer.set_path_param("id", "2").unwrap();
    let request = composer.submit(&document).unwrap();
    let outcome = run(&executor, &request);
    assert!(composer.accept(&outcome).is_some());
}

#[test]
fn test_document_reload_invalidates_draft_key() {
    let document = load(USERS_DOCUMENT);
    let mut composer = Composer::new();
    composer
        .open(&document, OperationKey::new(HttpMethod::Get, "/users/{id}"))
        .unwrap();
    composer.set_path_param("id", "42").unwrap();

    // The source document changed shape under the open draft.
    let reloaded = load(r#"{"host": "api.example.com", "paths": {"/ping": {"get": {}}}}"#);
    let err = composer.submit(&reloaded).unwrap_err();
    assert_eq!(err, ComposerError::UnknownOperation);
}

#[test]
fn test_loader_failure_blocks_explorer() {
    struct FailingFetcher;
    impl FetchDocument for FailingFetcher {
        fn fetch(&self, _: &str) -> Result<String, DocumentError> {
            Err(DocumentError::Fetch("connection refused".into()))
        }
    }

    let mut loader = DocumentLoader::new("https://api.example.com/swagger.json");
    assert!(loader.activate(&FailingFetcher).is_err());
    assert!(matches!(loader.state(), LoadState::Failed(_)));
    assert!(loader.document().is_none());
}

#[test]
fn test_malformed_body_is_an_execution_error_not_a_composer_error() {
    let document = load(
        r#"{
            "host": "api.example.com",
            "paths": {"/pets": {"post": {"tags": ["pets"]}}}
        }"#,
    );

    let mut composer = Composer::new();
    composer
        .open(&document, OperationKey::new(HttpMethod::Post, "/pets"))
        .unwrap();
    composer.set_body("{not json").unwrap();

    // Composition accepts the text as-is.
    let request = composer.submit(&document).unwrap();
    assert_eq!(request.body.as_deref(), Some("{not json"));

    // The runner reports it, without sending anything.
    let executor = RecordingExecutor::default();
    let outcome = run(&executor, &request);
    assert!(executor.calls.borrow().is_empty());
    assert!(matches!(
        composer.accept(&outcome),
        Some(Err(ExecutionError::MalformedBody(_)))
    ));
}
