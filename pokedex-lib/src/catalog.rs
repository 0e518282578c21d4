//! Catalog loader: drives [`CatalogState`] transitions against a
//! [`CatalogSource`].
//!
//! The state lives inside a `watch::Sender`. Starting a fetch and applying
//! its result both happen inside `send_if_modified`, so the check of the
//! loading flag and the flip that sets it cannot interleave with another
//! near-end signal. Fetches run on spawned tasks and only hold a weak handle
//! to the state; if the screen is gone by the time a response arrives, the
//! response is dropped.

use std::sync::{Arc, Weak};

use pokedex_client::CatalogSource;
use pokedex_core::{CatalogState, FetchKind, FetchTicket, LoadStatus};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A fetch started by the loader. Awaiting it is optional: dropping the
/// handle does not cancel the request.
#[derive(Debug)]
pub struct PendingFetch {
    ticket: FetchTicket,
    handle: JoinHandle<()>,
}

impl PendingFetch {
    pub(crate) fn new(ticket: FetchTicket, handle: JoinHandle<()>) -> Self {
        Self { ticket, handle }
    }

    /// Total number of entries requested.
    pub fn first(&self) -> u32 {
        self.ticket.first
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait until the result has been applied (or discarded).
    pub async fn wait(self) {
        if let Err(e) = self.handle.await {
            log::error!("fetch for first={} did not complete: {}", self.ticket.first, e);
        }
    }
}

/// Why a load-more request did not start a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoreBlocked {
    /// A load-more is still unresolved.
    InFlight,
    /// The first page has not arrived, or it failed.
    NotReady,
}

impl MoreBlocked {
    fn of(state: &CatalogState) -> Self {
        if state.status() == &LoadStatus::Ready && state.is_loading_more() {
            Self::InFlight
        } else {
            Self::NotReady
        }
    }
}

/// Owns the list screen's [`CatalogState`].
pub struct CatalogLoader<S> {
    source: Arc<S>,
    state: Arc<watch::Sender<CatalogState>>,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: Arc<S>) -> Self {
        let (tx, _rx) = watch::channel(CatalogState::new());
        Self {
            source,
            state: Arc::new(tx),
        }
    }

    /// Receive every published state. The receiver outlives the loader but
    /// sees no further changes once it is dropped.
    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    /// Current snapshot.
    pub fn state(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    /// Fetch the first `page_size` entries. Only the first call after
    /// construction does anything; later calls return `None`.
    ///
    /// # Panics
    ///
    /// Spawns the fetch with `tokio::spawn`, so it panics when called
    /// outside a Tokio runtime.
    pub fn request_initial(&self, page_size: u32) -> Option<PendingFetch> {
        let ticket = self.transition(|s| s.begin_initial(page_size))?;
        log::debug!("initial fetch: first={}", ticket.first);
        Some(self.spawn_fetch(ticket))
    }

    /// Raise the cursor and fetch the larger page.
    ///
    /// A no-op returning `None` while a previous load-more is unresolved or
    /// before the initial page has arrived. See [`Self::try_request_more`]
    /// for which of the two applied.
    ///
    /// # Panics
    ///
    /// Outside a Tokio runtime, like [`Self::request_initial`].
    pub fn request_more(&self) -> Option<PendingFetch> {
        self.try_request_more().ok()
    }

    /// Like [`Self::request_more`], but reports why nothing started. The
    /// reason is read from the same state the guard checked.
    ///
    /// # Panics
    ///
    /// Outside a Tokio runtime, like [`Self::request_initial`].
    pub fn try_request_more(&self) -> Result<PendingFetch, MoreBlocked> {
        let mut outcome = Err(MoreBlocked::NotReady);
        self.state.send_if_modified(|state| match state.begin_more() {
            Some((next, ticket)) => {
                *state = next;
                outcome = Ok(ticket);
                true
            }
            None => {
                outcome = Err(MoreBlocked::of(state));
                false
            }
        });
        let ticket = outcome?;
        log::debug!("load more: first={}", ticket.first);
        Ok(self.spawn_fetch(ticket))
    }

    fn transition(
        &self,
        begin: impl FnOnce(&CatalogState) -> Option<(CatalogState, FetchTicket)>,
    ) -> Option<FetchTicket> {
        let mut issued = None;
        self.state.send_if_modified(|state| match begin(state) {
            Some((next, ticket)) => {
                *state = next;
                issued = Some(ticket);
                true
            }
            None => false,
        });
        issued
    }

    fn spawn_fetch(&self, ticket: FetchTicket) -> PendingFetch {
        let source = Arc::clone(&self.source);
        let state = Arc::downgrade(&self.state);
        let handle = tokio::spawn(async move {
            let result = source
                .fetch_page(ticket.first)
                .await
                .map_err(|e| e.to_string());
            apply_result(&state, ticket, result);
        });
        PendingFetch::new(ticket, handle)
    }
}

fn apply_result(
    state: &Weak<watch::Sender<CatalogState>>,
    ticket: FetchTicket,
    result: Result<Vec<pokedex_core::CatalogEntry>, String>,
) {
    let Some(state) = state.upgrade() else {
        log::debug!(
            "discarding result for first={}: list screen is gone",
            ticket.first
        );
        return;
    };

    if let Err(message) = &result {
        match ticket.kind {
            FetchKind::Initial => log::warn!("initial catalog load failed: {}", message),
            FetchKind::More => log::warn!(
                "loading more entries (first={}) failed: {}",
                ticket.first,
                message
            ),
        }
    }

    let applied = state.send_if_modified(|current| match current.resolve(ticket, result) {
        Some(next) => {
            *current = next;
            true
        }
        None => false,
    });
    if !applied {
        log::debug!("ignoring stale result for first={}", ticket.first);
    }
}
