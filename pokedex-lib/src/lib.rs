//! Screen controllers for the catalog browser.
//!
//! The controllers own their state and publish every change on a
//! `tokio::sync::watch` channel; a front end subscribes and re-renders from
//! the latest snapshot. Data comes from any [`CatalogSource`], injected at
//! construction.

pub mod async_util;
pub mod catalog;
pub mod detail;
pub mod list;
pub mod navigation;
pub mod trigger;

pub use catalog::{CatalogLoader, MoreBlocked, PendingFetch};
pub use detail::DetailScreen;
pub use list::{ListScreen, ListView, INITIAL_LOAD_ERROR};
pub use navigation::{NavStack, Route};
pub use trigger::{LoadMoreTrigger, NearEndDetector, ScrollMetrics, TriggerOutcome};

pub use pokedex_client::{CatalogSource, ClientError};
pub use pokedex_core::{
    CatalogEntry, CatalogState, DetailState, DetailStatus, DetailTab, FilterState,
    INITIAL_PAGE_SIZE, LoadFailure, LoadStatus, PAGE_STEP, PokemonDetail, TypeCategory, TypeName,
};
