#![deny(missing_docs)]

//! # Browse Command
//!
//! Fetches the document and prints every endpoint grouped by tag, in
//! document order.

use crate::display::{method_badge, print_header};
use crate::error::CliResult;
use crate::source::SourceArgs;
use apix_core::build_index;

/// Arguments for the browse command.
#[derive(clap::Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Document source.
    #[clap(flatten)]
    pub source: SourceArgs,
}

/// Executes the browse command.
pub fn execute(args: &BrowseArgs) -> CliResult<()> {
    let document = args.source.load()?;
    print_header(&document);

    let index = build_index(&document);
    if index.is_empty() {
        println!();
        println!("No endpoints to show.");
        return Ok(());
    }

    for (tag, endpoints) in index.groups() {
        println!();
        println!("{} ({})", tag, endpoints.len());
        for endpoint in endpoints {
            match endpoint.operation.summary.as_deref() {
                Some(summary) => println!(
                    "  {} {}  {}",
                    method_badge(endpoint.key.method),
                    endpoint.key.path,
                    summary
                ),
                None => println!(
                    "  {} {}",
                    method_badge(endpoint.key.method),
                    endpoint.key.path
                ),
            }
        }
    }

    Ok(())
}
