//! pokedex CLI
//!
//! Command-line front end for browsing the Pokémon catalog.

mod cli_types;
mod commands;
mod error;
mod logging;
mod render;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands};
use commands::browse::{BrowseArgs, run_browse};
use commands::config::run_config;
use commands::show::run_show;
use commands::types::run_types;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Error: failed to open log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, cli.quiet) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands, quiet: bool) -> Result<(), CliError> {
    match command {
        Commands::Browse {
            type_filter,
            page_size,
            scrolls,
            open,
            api,
        } => run_browse(
            BrowseArgs {
                type_filter,
                page_size,
                scrolls,
                open,
                api,
            },
            quiet,
        ),
        Commands::Show { name, api } => run_show(name, api, quiet),
        Commands::Types { api } => run_types(api),
        Commands::Config { action } => run_config(action),
    }
}
