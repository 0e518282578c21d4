//! Terminal rendering of list and detail screens.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_lib::{CatalogEntry, DetailState, DetailStatus, DetailTab, ListView, TypeCategory, TypeName};

/// A type tag colored by its category.
pub(crate) fn badge(ty: &TypeName) -> String {
    let text = format!("[{}]", ty);
    match ty.category() {
        TypeCategory::Water => text.if_supports_color(Stdout, |t| t.blue()).to_string(),
        TypeCategory::Grass => text.if_supports_color(Stdout, |t| t.green()).to_string(),
        TypeCategory::Fire => text.if_supports_color(Stdout, |t| t.red()).to_string(),
        TypeCategory::Poison => text.if_supports_color(Stdout, |t| t.magenta()).to_string(),
        TypeCategory::Normal => text.if_supports_color(Stdout, |t| t.white()).to_string(),
        TypeCategory::Other => text.if_supports_color(Stdout, |t| t.yellow()).to_string(),
    }
}

fn badges(types: &[TypeName]) -> String {
    types.iter().map(badge).collect::<Vec<_>>().join(" ")
}

fn entry_line(entry: &CatalogEntry) -> String {
    let number = entry
        .number
        .as_deref()
        .map(|n| format!("#{n}"))
        .unwrap_or_default();
    format!(
        "  {:>5} {:<14} {}",
        number.if_supports_color(Stdout, |t| t.dimmed()),
        entry.name.if_supports_color(Stdout, |t| t.bold()),
        badges(&entry.types),
    )
}

pub(crate) fn list(view: &ListView, filter: Option<&TypeName>) {
    match view {
        ListView::Loading => log::info!("Loading..."),
        ListView::Error(message) => {
            log::info!("{}", message.if_supports_color(Stdout, |t| t.red()));
        }
        ListView::Entries {
            entries,
            loading_more,
        } => {
            if let Some(ty) = filter {
                log::info!("Filter: {}", badge(ty));
            }
            if entries.is_empty() {
                log::info!("  (no entries)");
            }
            for entry in entries {
                log::info!("{}", entry_line(entry));
            }
            if *loading_more {
                log::info!("  {}", "loading more...".if_supports_color(Stdout, |t| t.dimmed()));
            }
            log::info!("");
            log::info!("{} shown", entries.len());
        }
    }
}

pub(crate) fn detail(state: &DetailState) {
    let pokemon = state.pokemon();
    let number = state.number().map(|n| format!(" #{n}")).unwrap_or_default();
    log::info!(
        "{}{}",
        pokemon.name.if_supports_color(Stdout, |t| t.bold()),
        number.if_supports_color(Stdout, |t| t.dimmed()),
    );

    let types = if pokemon.types.is_empty() {
        state.detail().map(|d| d.types.as_slice()).unwrap_or_default()
    } else {
        pokemon.types.as_slice()
    };
    if !types.is_empty() {
        log::info!("  {}", badges(types));
    }
    if let Some(classification) = state.classification() {
        log::info!("  {}", classification.if_supports_color(Stdout, |t| t.italic()));
    }
    let image = state
        .detail()
        .map(|d| d.image.as_str())
        .filter(|_| pokemon.image.is_empty())
        .unwrap_or(pokemon.image.as_str());
    if !image.is_empty() {
        log::info!("  {}", image.if_supports_color(Stdout, |t| t.cyan()));
    }

    match state.status() {
        DetailStatus::Loading => log::info!("  Loading..."),
        DetailStatus::Failed(_) => {}
        DetailStatus::Ready(detail) => {
            for tab in state.tabs() {
                log::info!("");
                log::info!("  {}", tab.label().if_supports_color(Stdout, |t| t.underline()));
                match tab {
                    DetailTab::Evolutions => {
                        for evolution in detail.evolutions.iter().flatten() {
                            log::info!("  {}", entry_line(evolution));
                        }
                    }
                    DetailTab::Resistant => log::info!("    {}", badges(&detail.resistant)),
                    DetailTab::Weaknesses => log::info!("    {}", badges(&detail.weaknesses)),
                }
            }
        }
    }
}
