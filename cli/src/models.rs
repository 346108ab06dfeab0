#![deny(missing_docs)]

//! # Models Command
//!
//! Prints every named model definition from the document, depth-capped.

use crate::error::CliResult;
use crate::source::SourceArgs;
use apix_core::render_model;

/// Arguments for the models command.
#[derive(clap::Args, Debug, Clone)]
pub struct ModelsArgs {
    /// Document source.
    #[clap(flatten)]
    pub source: SourceArgs,
}

/// Executes the models command.
pub fn execute(args: &ModelsArgs) -> CliResult<()> {
    let document = args.source.load()?;

    if document.definitions.is_empty() {
        println!("No model definitions.");
        return Ok(());
    }

    for (name, schema) in &document.definitions {
        println!("{}", name);
        for line in render_model(schema).lines() {
            println!("  {}", line);
        }
        println!();
    }

    Ok(())
}
