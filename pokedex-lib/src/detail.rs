//! Detail screen controller.
//!
//! Mounted with the entry passed through navigation, which is rendered
//! immediately; the extended fields are refetched by name.

use std::sync::{Arc, Weak};

use pokedex_client::CatalogSource;
use pokedex_core::{CatalogEntry, DetailState};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct DetailScreen<S> {
    source: Arc<S>,
    state: Arc<watch::Sender<DetailState>>,
}

impl<S: CatalogSource> DetailScreen<S> {
    pub fn mount(source: Arc<S>, pokemon: CatalogEntry) -> Self {
        let (tx, _rx) = watch::channel(DetailState::mount(pokemon));
        Self {
            source,
            state: Arc::new(tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Start the refetch of extended fields. The result is dropped if the
    /// screen is gone when it arrives.
    ///
    /// Must be called from within a Tokio runtime; `tokio::spawn` panics
    /// otherwise.
    pub fn load(&self) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let state: Weak<watch::Sender<DetailState>> = Arc::downgrade(&self.state);
        let name = self.state.borrow().pokemon().name.clone();
        tokio::spawn(async move {
            let result = source.fetch_detail(&name).await.map_err(|e| {
                log::warn!("loading details for {} failed: {}", name, e);
                e.to_string()
            });
            match state.upgrade() {
                Some(state) => state.send_modify(|current| *current = current.resolve(result)),
                None => log::debug!("discarding details for {}: detail screen is gone", name),
            }
        })
    }
}
