#![deny(missing_docs)]

//! # apix CLI
//!
//! Terminal client for exploring a Swagger-described API.
//!
//! Supported Commands:
//! - `browse`: Grouped listing of every endpoint.
//! - `show`: One operation in detail.
//! - `models`: Named model definitions.
//! - `call`: Compose and fire one request.

use clap::{Parser, Subcommand};

use crate::error::CliResult;

mod browse;
mod call;
mod display;
mod error;
mod models;
mod show;
mod source;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Swagger endpoint explorer and request runner")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse every endpoint grouped by tag.
    Browse(browse::BrowseArgs),
    /// Show one operation in detail.
    Show(show::ShowArgs),
    /// Print every named model definition.
    Models(models::ModelsArgs),
    /// Compose and fire one request against an operation.
    Call(call::CallArgs),
}

fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Browse(args) => browse::execute(args),
        Commands::Show(args) => show::execute(args),
        Commands::Models(args) => models::execute(args),
        Commands::Call(args) => call::execute(args),
    }
}
