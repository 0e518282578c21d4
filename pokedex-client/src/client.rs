use pokedex_core::{CatalogEntry, PokemonDetail};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::source::CatalogSource;
use crate::types::{
    GraphQlRequest, GraphQlResponse, POKEMON_QUERY, POKEMONS_QUERY, PokemonData, PokemonVariables,
    PokemonsData, PokemonsVariables, TypeListResponse,
};

/// How much of a bad response body to quote in error messages.
const BODY_EXCERPT: usize = 200;

/// HTTP client for the GraphQL catalog and the REST type index.
///
/// Holds no global state; construct one per application and hand it to the
/// screens that need it.
pub struct PokedexClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PokedexClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The first `first` entries of the catalog. A `null` list is
    /// `Malformed`, not an empty page.
    pub async fn pokemons(&self, first: u32) -> Result<Vec<CatalogEntry>, ClientError> {
        let data: PokemonsData = self
            .query(POKEMONS_QUERY, PokemonsVariables { limit: first })
            .await?;
        let entries = data
            .pokemons
            .ok_or_else(|| ClientError::malformed("pokemons was null"))?;
        log::debug!("pokemons(first: {}) returned {} entries", first, entries.len());
        Ok(entries)
    }

    /// Extended fields for one Pokémon. A `null` result is `NotFound`.
    pub async fn pokemon(&self, name: &str) -> Result<PokemonDetail, ClientError> {
        let data: PokemonData = self.query(POKEMON_QUERY, PokemonVariables { name }).await?;
        data.pokemon
            .ok_or_else(|| ClientError::NotFound(name.to_string()))
    }

    /// Type names from the REST index, spelled as it spells them (lower case).
    pub async fn type_names(&self) -> Result<Vec<String>, ClientError> {
        log::debug!("GET {}", self.config.types_url);
        let resp = self.http.get(&self.config.types_url).send().await?;
        let text = checked_body(resp).await?;
        let list: TypeListResponse = serde_json::from_str(&text).map_err(|e| {
            ClientError::malformed(format!(
                "Failed to parse type list: {e}. Response: {}",
                excerpt(&text)
            ))
        })?;
        Ok(list.results.into_iter().map(|r| r.name).collect())
    }

    async fn query<V, T>(&self, query: &str, variables: V) -> Result<T, ClientError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("POST {}", self.config.graphql_url);
        let resp = self
            .http
            .post(&self.config.graphql_url)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        let text = checked_body(resp).await?;
        let parsed: GraphQlResponse<T> = serde_json::from_str(&text).map_err(|e| {
            ClientError::malformed(format!(
                "Failed to parse GraphQL response: {e}. Response: {}",
                excerpt(&text)
            ))
        })?;
        parsed.into_data()
    }
}

impl CatalogSource for PokedexClient {
    async fn fetch_page(&self, first: u32) -> Result<Vec<CatalogEntry>, ClientError> {
        self.pokemons(first).await
    }

    async fn fetch_detail(&self, name: &str) -> Result<PokemonDetail, ClientError> {
        self.pokemon(name).await
    }

    async fn fetch_type_names(&self) -> Result<Vec<String>, ClientError> {
        self.type_names().await
    }
}

/// Read the body, turning non-success statuses into `ServerError`.
///
/// GraphQL servers often answer 400 with a JSON `errors` body; that case is
/// passed through so the caller reports the GraphQL messages instead.
async fn checked_body(resp: reqwest::Response) -> Result<String, ClientError> {
    let status = resp.status();
    let text = resp.text().await?;
    if status.is_success() || (status == reqwest::StatusCode::BAD_REQUEST && text.contains("\"errors\"")) {
        return Ok(text);
    }
    Err(ClientError::ServerError {
        status: status.as_u16(),
        message: excerpt(&text).to_string(),
    })
}

fn excerpt(text: &str) -> &str {
    let mut end = text.len().min(BODY_EXCERPT);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
