#![deny(missing_docs)]

//! # Show Command
//!
//! Prints one operation in detail: summary, parameter table, response
//! list, and the declared request-body schema when present.

use crate::display::method_badge;
use crate::error::{CliError, CliResult};
use crate::source::{parse_method, SourceArgs};
use apix_core::{
    body_parameter, parameter_rows, render_model, response_entries, OperationKey, ParameterRow,
};

/// Arguments for the show command.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// HTTP method of the operation (e.g. GET).
    pub method: String,

    /// Path template exactly as listed by `browse` (e.g. /users/{id}).
    pub path: String,

    /// Document source.
    #[clap(flatten)]
    pub source: SourceArgs,
}

/// Executes the show command.
pub fn execute(args: &ShowArgs) -> CliResult<()> {
    let document = args.source.load()?;
    let key = OperationKey::new(parse_method(&args.method)?, args.path.clone());
    let operation = document
        .operation(&key)
        .ok_or_else(|| CliError::General(format!("no operation '{}' in the document", key)))?;

    println!("{} {}", method_badge(key.method), key.path);
    if let Some(summary) = &operation.summary {
        println!("{}", summary);
    }
    if let Some(description) = &operation.description {
        println!("{}", description);
    }

    println!();
    println!("Parameters");
    print_parameter_table(&parameter_rows(&operation.parameters));

    println!();
    println!("Responses");
    let entries = response_entries(&operation.responses);
    if entries.is_empty() {
        println!("  (none)");
    }
    for entry in entries {
        println!("  {} [{}] {}", entry.code, entry.class.label(), entry.description);
        if let Some(dump) = entry.schema_dump {
            print_indented(&dump, "    ");
        }
    }

    if let Some(param) = body_parameter(operation) {
        println!();
        println!("Request body");
        match &param.schema {
            Some(schema) => print_indented(&render_model(schema), "  "),
            None => println!("  (no schema declared)"),
        }
    }

    Ok(())
}

/// Prints aligned rows; an operation without parameters still gets an
/// explicit, visible section.
fn print_parameter_table(rows: &[ParameterRow]) {
    if rows.is_empty() {
        println!("  (none)");
        return;
    }

    let name_width = column_width(rows.iter().map(|row| row.name.len()), "Name".len());
    let in_width = column_width(rows.iter().map(|row| row.location.as_str().len()), "In".len());
    let type_width = column_width(rows.iter().map(|row| row.type_name.len()), "Type".len());

    println!(
        "  {:<name_width$}  {:<in_width$}  {:<type_width$}  {:<8}  Description",
        "Name", "In", "Type", "Required"
    );
    for row in rows {
        println!(
            "  {:<name_width$}  {:<in_width$}  {:<type_width$}  {:<8}  {}",
            row.name,
            row.location.as_str(),
            row.type_name,
            if row.required { "required" } else { "" },
            row.description
        );
    }
}

fn column_width(lengths: impl Iterator<Item = usize>, header: usize) -> usize {
    lengths.fold(header, usize::max)
}

fn print_indented(text: &str, prefix: &str) {
    for line in text.lines() {
        println!("{}{}", prefix, line);
    }
}
