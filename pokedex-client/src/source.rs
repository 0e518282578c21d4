use std::future::Future;

use pokedex_core::{CatalogEntry, PokemonDetail};

use crate::error::ClientError;

/// Where the screens get their data.
///
/// [`crate::PokedexClient`] is the network implementation; tests supply
/// in-memory ones. The returned futures are `Send` so fetches can run on
/// spawned tasks.
pub trait CatalogSource: Send + Sync + 'static {
    /// The first `first` entries, in server order.
    fn fetch_page(
        &self,
        first: u32,
    ) -> impl Future<Output = Result<Vec<CatalogEntry>, ClientError>> + Send;

    /// Extended fields for one Pokémon.
    fn fetch_detail(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<PokemonDetail, ClientError>> + Send;

    /// Raw type names for the filter menu, as the type index spells them.
    fn fetch_type_names(&self) -> impl Future<Output = Result<Vec<String>, ClientError>> + Send;
}
