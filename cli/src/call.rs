#![deny(missing_docs)]

//! # Call Command
//!
//! The try-it-out flow: open a draft for one operation, apply entered
//! path parameters and an optional body, submit, and fire the request.

use crate::error::{CliError, CliResult};
use crate::source::{parse_method, SourceArgs};
use apix_core::{run, Composer, ExecutionError, HttpExecutor, OperationKey};

/// Arguments for the call command.
#[derive(clap::Args, Debug, Clone)]
pub struct CallArgs {
    /// HTTP method of the operation (e.g. GET).
    pub method: String,

    /// Path template exactly as listed by `browse` (e.g. /users/{id}).
    pub path: String,

    /// Path parameter value, `name=value`. Repeatable.
    #[clap(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Raw JSON request body (ignored for GET).
    #[clap(short = 'd', long = "data")]
    pub data: Option<String>,

    /// Document source.
    #[clap(flatten)]
    pub source: SourceArgs,
}

/// Helper to parse "key=value" arguments.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Executes the call command.
///
/// A refused submission (missing required parameters, unknown operation)
/// exits without firing any request.
pub fn execute(args: &CallArgs) -> CliResult<()> {
    let document = args.source.load()?;
    let key = OperationKey::new(parse_method(&args.method)?, args.path.clone());

    let mut composer = Composer::new();
    composer.open(&document, key)?;
    for (name, value) in &args.params {
        composer.set_path_param(name, value.clone())?;
    }
    if let Some(body) = &args.data {
        composer.set_body(body.clone())?;
    }

    let request = composer.submit(&document)?;
    println!("-> {} {}", request.method, request.url);

    let outcome = run(&HttpExecutor, &request);
    match composer.accept(&outcome) {
        Some(Ok(response)) => {
            println!("<- {} OK", response.status);
            if !response.body.is_empty() {
                println!("{}", response.body);
            }
            Ok(())
        }
        Some(Err(error)) => {
            println!("<- execution failed: {}", error);
            if let ExecutionError::Status { body, .. } = error {
                if !body.is_empty() {
                    println!("{}", body);
                }
            }
            Err(CliError::Execution(error.clone()))
        }
        None => Err(CliError::General("stale execution result".into())),
    }
}
