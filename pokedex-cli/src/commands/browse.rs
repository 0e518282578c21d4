use pokedex_lib::async_util::run_with_updates;
use pokedex_lib::{CatalogState, ListScreen, ListView, NavStack, PendingFetch, Route, TriggerOutcome};

use crate::cli_types::ApiArgs;
use crate::commands::show::show_detail;
use crate::commands::{connect, runtime};
use crate::error::CliError;
use crate::{render, spinner};

pub(crate) struct BrowseArgs {
    pub type_filter: Option<String>,
    pub page_size: u32,
    pub scrolls: u32,
    pub open: Option<String>,
    pub api: ApiArgs,
}

/// Run the browse command.
///
/// Mounts the list screen, waits for the first page, then sends `scrolls`
/// near-end signals one after another before rendering the filtered list.
pub(crate) fn run_browse(args: BrowseArgs, quiet: bool) -> Result<(), CliError> {
    let client = connect(&args.api)?;
    let rt = runtime()?;

    rt.block_on(async {
        let (mut screen, pending) = ListScreen::mount(client.clone(), args.page_size);

        if let Some(pending) = pending {
            let pb = spinner::start(format!("Loading {} entries...", pending.first()), quiet);
            run_with_updates(pending.wait(), screen.subscribe(), |_| pb.tick()).await;
            pb.finish_and_clear();
        }

        if let ListView::Error(message) = screen.view() {
            render::list(&screen.view(), None);
            let detail = screen
                .loader()
                .state()
                .last_failure()
                .map(|f| f.message.clone())
                .unwrap_or(message);
            return Err(CliError::LoadFailed(detail));
        }

        screen.load_type_menu().await;
        if let Some(raw) = &args.type_filter {
            screen.select_type(raw);
            if let Some(selected) = screen.filter().selected() {
                if !screen.type_menu().is_empty() && !screen.type_menu().contains(selected) {
                    log::warn!("'{}' is not in the type menu; no entries will match", selected);
                }
            }
        }

        for n in 1..=args.scrolls {
            match screen.near_end() {
                TriggerOutcome::Requested(pending) => load_more(&screen, pending, quiet).await,
                TriggerOutcome::InFlight => log::debug!("scroll {}: load already in flight", n),
                TriggerOutcome::NotReady => {
                    log::debug!("scroll {}: list not ready, stopping", n);
                    break;
                }
            }
        }

        render::list(&screen.view(), screen.filter().selected());

        let Some(name) = args.open else {
            return Ok(());
        };
        let route = screen
            .open(&name)
            .ok_or_else(|| CliError::not_found(name.clone()))?;
        let mut nav = NavStack::new();
        nav.push(route);
        log::info!("");
        match nav.current() {
            Route::Detail { pokemon } => show_detail(client, pokemon.clone(), quiet).await,
            Route::List => Ok(()),
        }
    })
}

async fn load_more<S: pokedex_lib::CatalogSource>(
    screen: &ListScreen<S>,
    pending: PendingFetch,
    quiet: bool,
) {
    let first = pending.first();
    let pb = spinner::start(format!("Loading more ({} entries)...", first), quiet);
    run_with_updates(pending.wait(), screen.subscribe(), |state: &CatalogState| {
        pb.set_message(format!(
            "Loading more ({} of {} entries)...",
            state.entries().len(),
            first
        ));
    })
    .await;
    pb.finish_and_clear();

    let state = screen.loader().state();
    if let Some(failure) = state.last_failure() {
        log::warn!(
            "Could not load more entries, keeping {}: {}",
            state.entries().len(),
            failure.message
        );
    }
}
