//! Load-more trigger: turns scroll positions into at most one near-end
//! signal per threshold crossing, and forwards signals to the loader's
//! guarded `request_more`.

use pokedex_client::CatalogSource;

use crate::catalog::{CatalogLoader, MoreBlocked, PendingFetch};

/// Distance from the end, in viewport lengths, that counts as "near".
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Scroll geometry reported by the view. Units are arbitrary but must
/// agree (pixels, rows, ...).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub viewport_len: f32,
    pub content_len: f32,
}

impl ScrollMetrics {
    pub fn distance_from_end(&self) -> f32 {
        (self.content_len - (self.offset + self.viewport_len)).max(0.0)
    }
}

/// Edge detector for the near-end zone.
///
/// Fires when the view enters the zone, then stays quiet until it either
/// leaves the zone or the content grows (a new page was rendered).
#[derive(Debug, Clone)]
pub struct NearEndDetector {
    threshold: f32,
    armed: bool,
    content_len: f32,
}

impl NearEndDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            armed: true,
            content_len: 0.0,
        }
    }

    /// Returns true exactly once per crossing into the near-end zone.
    pub fn observe(&mut self, metrics: ScrollMetrics) -> bool {
        if metrics.content_len > self.content_len {
            self.armed = true;
        }
        self.content_len = metrics.content_len;

        let near = metrics.distance_from_end() <= self.threshold * metrics.viewport_len;
        if !near {
            self.armed = true;
            return false;
        }
        if self.armed {
            self.armed = false;
            return true;
        }
        false
    }
}

impl Default for NearEndDetector {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// What a near-end signal did.
#[derive(Debug)]
pub enum TriggerOutcome {
    /// A load-more fetch was started.
    Requested(PendingFetch),
    /// A load-more is already outstanding; the signal was dropped.
    InFlight,
    /// The first page has not arrived (or failed); nothing to extend.
    NotReady,
}

impl TriggerOutcome {
    pub fn is_requested(&self) -> bool {
        matches!(self, Self::Requested(_))
    }
}

/// Binds the near-end signal to [`CatalogLoader::request_more`].
#[derive(Debug, Clone, Default)]
pub struct LoadMoreTrigger {
    detector: NearEndDetector,
}

impl LoadMoreTrigger {
    pub fn new(threshold: f32) -> Self {
        Self {
            detector: NearEndDetector::new(threshold),
        }
    }

    /// Feed a scroll position. `None` when it did not cross into the
    /// near-end zone.
    pub fn on_scroll<S: CatalogSource>(
        &mut self,
        metrics: ScrollMetrics,
        loader: &CatalogLoader<S>,
    ) -> Option<TriggerOutcome> {
        self.detector
            .observe(metrics)
            .then(|| Self::near_end(loader))
    }

    /// Handle one near-end signal.
    pub fn near_end<S: CatalogSource>(loader: &CatalogLoader<S>) -> TriggerOutcome {
        match loader.try_request_more() {
            Ok(pending) => TriggerOutcome::Requested(pending),
            Err(MoreBlocked::InFlight) => {
                log::debug!("near end while loading more, ignoring");
                TriggerOutcome::InFlight
            }
            Err(MoreBlocked::NotReady) => TriggerOutcome::NotReady,
        }
    }
}
