//! List-screen state and its transitions.
//!
//! `CatalogState` never changes in place. Each transition takes `&self` and
//! returns the next state, so the owner can publish snapshots to subscribers
//! and the guard for duplicate load-more requests is a plain value check.
//!
//! The server pages by cumulative size rather than by token: asking for
//! `first: 40` returns entries 0..40. A resolved page therefore replaces the
//! list wholesale. If the backend ordering shifts between calls, entries may
//! move or repeat across refreshes; that is kept as-is.

use std::sync::Arc;

use crate::entry::CatalogEntry;

/// Page size requested when the list screen mounts.
pub const INITIAL_PAGE_SIZE: u32 = 30;

/// How much the cursor grows on each load-more.
pub const PAGE_STEP: u32 = 10;

/// Which request a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Initial,
    More,
}

/// A failed fetch, kept on the state so subscribers can render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl LoadFailure {
    pub fn initial(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Initial,
            message: message.into(),
        }
    }

    pub fn more(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::More,
            message: message.into(),
        }
    }
}

/// Progress of the first fetch after mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Mounted, nothing requested yet.
    Mounted,
    /// First fetch in flight; the view shows a full-screen indicator.
    Loading,
    /// At least one page has arrived.
    Ready,
    /// First fetch failed. Terminal: the screen shows an error instead of the list.
    Failed(LoadFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Initial,
    More,
}

/// Issued by a transition that starts a fetch; handed back on resolution so
/// results for a cursor that is no longer current can be recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub kind: FetchKind,
    /// Total number of entries requested (`first` on the wire).
    pub first: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    entries: Arc<[CatalogEntry]>,
    cursor: u32,
    is_loading_more: bool,
    status: LoadStatus,
    last_failure: Option<LoadFailure>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Empty state at screen mount. The cursor is established by the first
    /// fetch.
    pub fn new() -> Self {
        Self {
            entries: Arc::from(Vec::new()),
            cursor: 0,
            is_loading_more: false,
            status: LoadStatus::Mounted,
            last_failure: None,
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    pub fn is_loading_more(&self) -> bool {
        self.is_loading_more
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Most recent failure, initial or load-more. Cleared when the next
    /// load-more starts.
    pub fn last_failure(&self) -> Option<&LoadFailure> {
        self.last_failure.as_ref()
    }

    pub fn is_initial_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// True when a near-end signal would start a fetch right now.
    pub fn can_load_more(&self) -> bool {
        self.status == LoadStatus::Ready && !self.is_loading_more
    }

    /// Start the first fetch for `page_size` entries.
    ///
    /// Only valid once, straight after mount; returns `None` otherwise.
    pub fn begin_initial(&self, page_size: u32) -> Option<(Self, FetchTicket)> {
        if self.status != LoadStatus::Mounted {
            return None;
        }
        let cursor = self.cursor.max(page_size);
        let next = Self {
            cursor,
            status: LoadStatus::Loading,
            is_loading_more: false,
            ..self.clone()
        };
        Some((
            next,
            FetchTicket {
                kind: FetchKind::Initial,
                first: cursor,
            },
        ))
    }

    /// Start a load-more: raise the cursor by [`PAGE_STEP`] and set the
    /// loading flag.
    ///
    /// Returns `None` while a load-more is already in flight, or before the
    /// first page has arrived.
    pub fn begin_more(&self) -> Option<(Self, FetchTicket)> {
        if !self.can_load_more() {
            return None;
        }
        let cursor = self.cursor.saturating_add(PAGE_STEP);
        let next = Self {
            cursor,
            is_loading_more: true,
            last_failure: None,
            ..self.clone()
        };
        Some((
            next,
            FetchTicket {
                kind: FetchKind::More,
                first: cursor,
            },
        ))
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// A successful page replaces the entries. A failed load-more keeps the
    /// previous entries. The loading flag is cleared either way. Returns
    /// `None` when the ticket does not belong to the fetch this state is
    /// waiting on.
    pub fn resolve(
        &self,
        ticket: FetchTicket,
        result: Result<Vec<CatalogEntry>, String>,
    ) -> Option<Self> {
        if ticket.first != self.cursor {
            return None;
        }
        match ticket.kind {
            FetchKind::Initial => {
                if self.status != LoadStatus::Loading {
                    return None;
                }
                Some(match result {
                    Ok(entries) => Self {
                        entries: Arc::from(entries),
                        is_loading_more: false,
                        status: LoadStatus::Ready,
                        last_failure: None,
                        ..self.clone()
                    },
                    Err(message) => {
                        let failure = LoadFailure::initial(message);
                        Self {
                            is_loading_more: false,
                            status: LoadStatus::Failed(failure.clone()),
                            last_failure: Some(failure),
                            ..self.clone()
                        }
                    }
                })
            }
            FetchKind::More => {
                if !self.is_loading_more {
                    return None;
                }
                Some(match result {
                    Ok(entries) => Self {
                        entries: Arc::from(entries),
                        is_loading_more: false,
                        last_failure: None,
                        ..self.clone()
                    },
                    Err(message) => Self {
                        is_loading_more: false,
                        last_failure: Some(LoadFailure::more(message)),
                        ..self.clone()
                    },
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
