use pokedex_core::{CatalogEntry, PokemonDetail};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// List query: the first `limit` entries in server order.
pub const POKEMONS_QUERY: &str = r#"
    query ($limit: Int!) {
        pokemons(first: $limit) {
            name
            image
            types
            number
        }
    }
"#;

/// Detail query for a single Pokémon by name.
pub const POKEMON_QUERY: &str = r#"
    query ($name: String!) {
        pokemon(name: $name) {
            number
            name
            classification
            image
            types
            resistant
            weaknesses
            evolutions {
                name
                image
                types
                number
            }
        }
    }
"#;

/// Request body for a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct PokemonsVariables {
    pub limit: u32,
}

#[derive(Debug, Serialize)]
pub struct PokemonVariables<'a> {
    pub name: &'a str,
}

/// Top-level GraphQL response wrapper.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Unwrap `data`, treating a non-empty `errors` array as failure even
    /// when partial data came back.
    pub fn into_data(self) -> Result<T, ClientError> {
        if !self.errors.is_empty() {
            return Err(ClientError::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data
            .ok_or_else(|| ClientError::malformed("response has neither data nor errors"))
    }
}

#[derive(Debug, Deserialize)]
pub struct PokemonsData {
    #[serde(default)]
    pub pokemons: Option<Vec<CatalogEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct PokemonData {
    #[serde(default)]
    pub pokemon: Option<PokemonDetail>,
}

/// Response from the REST type index.
#[derive(Debug, Deserialize)]
pub struct TypeListResponse {
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NamedResource {
    pub name: String,
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
