use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_lib::ListScreen;

use crate::cli_types::ApiArgs;
use crate::commands::{connect, runtime};
use crate::error::CliError;
use crate::render;

/// Run the types command: print the filter menu.
///
/// An unreachable type index is not an error; the menu is just empty.
pub(crate) fn run_types(api: ApiArgs) -> Result<(), CliError> {
    let client = connect(&api)?;
    let mut screen = ListScreen::new(client);
    runtime()?.block_on(screen.load_type_menu());

    log::info!("{}", "Types".if_supports_color(Stdout, |t| t.bold()));
    if screen.type_menu().is_empty() {
        log::info!("  (none available)");
    }
    for ty in screen.type_menu() {
        log::info!("  {}", render::badge(ty));
    }
    Ok(())
}
