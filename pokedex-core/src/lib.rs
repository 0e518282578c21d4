//! Catalog data model and the pure parts of the list controller.
//!
//! Everything in this crate is synchronous and free of I/O: entry and type
//! types, title-casing, the type filter, and the state transitions that the
//! async loader in `pokedex-lib` drives.

pub mod detail;
pub mod entry;
pub mod filter;
pub mod state;
pub mod text;

pub use detail::{DetailState, DetailStatus, DetailTab, PokemonDetail};
pub use entry::{CatalogEntry, TypeCategory, TypeName};
pub use filter::{FilterState, apply};
pub use state::{
    CatalogState, FailureKind, FetchKind, FetchTicket, INITIAL_PAGE_SIZE, LoadFailure,
    LoadStatus, PAGE_STEP,
};
pub use text::title_case;
