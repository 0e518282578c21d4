use std::sync::Arc;

use pokedex_lib::async_util::run_with_updates;
use pokedex_lib::{CatalogEntry, CatalogSource, DetailScreen, DetailStatus};

use crate::cli_types::ApiArgs;
use crate::commands::{connect, runtime};
use crate::error::CliError;
use crate::{render, spinner};

/// Run the show command: open the detail screen for `name` directly.
pub(crate) fn run_show(name: String, api: ApiArgs, quiet: bool) -> Result<(), CliError> {
    let client = connect(&api)?;
    runtime()?.block_on(show_detail(client, CatalogEntry::named(name), quiet))
}

/// Mount a detail screen for `pokemon`, wait for the refetch, render it.
pub(crate) async fn show_detail<S: CatalogSource>(
    source: Arc<S>,
    pokemon: CatalogEntry,
    quiet: bool,
) -> Result<(), CliError> {
    let pb = spinner::start(format!("Loading details for {}...", pokemon.name), quiet);
    let screen = DetailScreen::mount(source, pokemon);

    let joined = run_with_updates(screen.load(), screen.subscribe(), |_| pb.tick()).await;
    pb.finish_and_clear();
    joined.map_err(|e| CliError::runtime(format!("detail fetch did not complete: {e}")))?;

    let state = screen.state();
    render::detail(&state);
    match state.status() {
        DetailStatus::Failed(message) => Err(CliError::LoadFailed(message.clone())),
        _ => Ok(()),
    }
}
