//! List screen controller: catalog loader, type filter, filter menu and
//! load-more trigger behind one handle.

use std::sync::Arc;

use pokedex_client::CatalogSource;
use pokedex_core::{CatalogEntry, CatalogState, FilterState, LoadStatus, TypeName, title_case};
use tokio::sync::watch;

use crate::catalog::{CatalogLoader, PendingFetch};
use crate::navigation::Route;
use crate::trigger::{LoadMoreTrigger, ScrollMetrics, TriggerOutcome};

/// Shown in place of the list when the first fetch fails.
pub const INITIAL_LOAD_ERROR: &str = "Something went wrong, please try again";

/// What the list screen should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// First page in flight: full-screen indicator.
    Loading,
    /// First page failed: generic message instead of the list.
    Error(String),
    /// Filtered entries, plus a footer indicator while loading more.
    Entries {
        entries: Vec<CatalogEntry>,
        loading_more: bool,
    },
}

pub struct ListScreen<S> {
    source: Arc<S>,
    loader: CatalogLoader<S>,
    trigger: LoadMoreTrigger,
    filter: FilterState,
    type_menu: Vec<TypeName>,
}

impl<S: CatalogSource> ListScreen<S> {
    /// Build the screen without fetching anything.
    pub fn new(source: Arc<S>) -> Self {
        Self {
            loader: CatalogLoader::new(Arc::clone(&source)),
            source,
            trigger: LoadMoreTrigger::default(),
            filter: FilterState::new(),
            type_menu: Vec::new(),
        }
    }

    /// Build the screen and start the first fetch for `page_size` entries.
    /// Panics outside a Tokio runtime, as [`CatalogLoader::request_initial`]
    /// does.
    pub fn mount(source: Arc<S>, page_size: u32) -> (Self, Option<PendingFetch>) {
        let screen = Self::new(source);
        let pending = screen.loader.request_initial(page_size);
        (screen, pending)
    }

    pub fn loader(&self) -> &CatalogLoader<S> {
        &self.loader
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.loader.subscribe()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Select a type from the menu (any spelling; it is title-cased).
    pub fn select_type(&mut self, raw: &str) {
        self.filter = self.filter.select(raw);
    }

    pub fn reset_filter(&mut self) {
        self.filter = self.filter.reset();
    }

    pub fn type_menu(&self) -> &[TypeName] {
        &self.type_menu
    }

    /// Populate the filter menu. A failure is logged and leaves the menu
    /// empty; the list keeps working.
    pub async fn load_type_menu(&mut self) {
        self.type_menu = match self.source.fetch_type_names().await {
            Ok(names) => names
                .iter()
                .map(|n| TypeName::new(title_case(n)))
                .collect(),
            Err(e) => {
                log::warn!("could not load type filter menu: {}", e);
                Vec::new()
            }
        };
    }

    /// Feed a scroll position from the view.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<TriggerOutcome> {
        self.trigger.on_scroll(metrics, &self.loader)
    }

    /// A near-end signal that bypasses scroll geometry.
    pub fn near_end(&self) -> TriggerOutcome {
        LoadMoreTrigger::near_end(&self.loader)
    }

    /// Entries passing the current filter, in server order.
    pub fn visible(&self) -> Vec<CatalogEntry> {
        self.filter.apply(self.loader.state().entries())
    }

    pub fn view(&self) -> ListView {
        Self::view_of(&self.loader.state(), &self.filter)
    }

    /// Render decision for a given snapshot; usable from a subscriber that
    /// only holds the published state.
    pub fn view_of(state: &CatalogState, filter: &FilterState) -> ListView {
        match state.status() {
            LoadStatus::Mounted | LoadStatus::Loading => ListView::Loading,
            LoadStatus::Failed(_) => ListView::Error(INITIAL_LOAD_ERROR.to_string()),
            LoadStatus::Ready => ListView::Entries {
                entries: filter.apply(state.entries()),
                loading_more: state.is_loading_more(),
            },
        }
    }

    /// Route to the detail screen for the loaded entry called `name`.
    pub fn open(&self, name: &str) -> Option<Route> {
        self.loader
            .state()
            .entries()
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| Route::Detail {
                pokemon: e.clone(),
            })
    }
}
