//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pokedex_lib::INITIAL_PAGE_SIZE;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Browse the Pokémon catalog from the terminal", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Endpoint overrides shared by commands that talk to the APIs.
#[derive(Args, Clone, Default)]
pub(crate) struct ApiArgs {
    /// GraphQL endpoint (overrides env and config file)
    #[arg(long)]
    pub graphql_url: Option<String>,

    /// Type index endpoint (overrides env and config file)
    #[arg(long)]
    pub types_url: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Load the catalog list, optionally filtered and extended
    Browse {
        /// Only show entries of this type (e.g. water, Fire)
        #[arg(short = 't', long = "type")]
        type_filter: Option<String>,

        /// Number of entries fetched on first load
        #[arg(long, default_value_t = INITIAL_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
        page_size: u32,

        /// Simulate reaching the end of the list this many times
        #[arg(short, long, default_value_t = 0)]
        scrolls: u32,

        /// After loading, open the detail screen for this entry
        #[arg(long)]
        open: Option<String>,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// Show details for one Pokémon by name
    Show {
        /// Name as the catalog spells it (e.g. Bulbasaur)
        name: String,

        #[command(flatten)]
        api: ApiArgs,
    },

    /// List the types available for filtering
    Types {
        #[command(flatten)]
        api: ApiArgs,
    },

    /// Manage the client configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where each one comes from
    Show,

    /// Write a config file with the current effective settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_size(args: &[&str]) -> Result<u32, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Commands::Browse { page_size, .. } => Ok(page_size),
            _ => panic!("expected browse"),
        }
    }

    #[test]
    fn page_size_defaults_to_initial_page() {
        assert_eq!(page_size(&["pokedex", "browse"]).unwrap(), INITIAL_PAGE_SIZE);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(page_size(&["pokedex", "browse", "--page-size", "0"]).is_err());
        assert_eq!(page_size(&["pokedex", "browse", "--page-size", "1"]).unwrap(), 1);
    }
}
