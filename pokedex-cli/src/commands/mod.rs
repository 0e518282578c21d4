pub(crate) mod browse;
pub(crate) mod config;
pub(crate) mod show;
pub(crate) mod types;

use std::sync::Arc;

use pokedex_client::{ClientConfig, PokedexClient};

use crate::cli_types::ApiArgs;
use crate::error::CliError;

/// Build the API client from config, env and CLI overrides.
pub(crate) fn connect(api: &ApiArgs) -> Result<Arc<PokedexClient>, CliError> {
    let config = ClientConfig::load()?.with_overrides(api.graphql_url.clone(), api.types_url.clone());
    log::debug!(
        "using GraphQL endpoint {} (timeout {}s)",
        config.graphql_url,
        config.timeout.as_secs()
    );
    Ok(Arc::new(PokedexClient::new(config)?))
}

pub(crate) fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {e}")))
}
