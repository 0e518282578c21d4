use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ClientError;

pub const DEFAULT_GRAPHQL_URL: &str = "https://graphql-pokemon.now.sh";
pub const DEFAULT_TYPES_URL: &str = "https://pokeapi.co/api/v2/type";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_GRAPHQL_URL: &str = "POKEDEX_GRAPHQL_URL";
pub const ENV_TYPES_URL: &str = "POKEDEX_TYPES_URL";
pub const ENV_TIMEOUT_SECS: &str = "POKEDEX_TIMEOUT_SECS";

/// Endpoints and transport settings for [`crate::PokedexClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub graphql_url: String,
    pub types_url: String,
    /// Per-request timeout. Bounds how long a load-more can keep the list's
    /// loading indicator up.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            types_url: DEFAULT_TYPES_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Provenance of each config field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
    pub graphql_url: ConfigSource,
    pub types_url: ConfigSource,
    pub timeout: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    api: Option<ApiConfig>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ApiConfig {
    graphql_url: Option<String>,
    types_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Load from environment variables, the config file, or defaults.
    ///
    /// Priority: env vars > config file > defaults.
    pub fn load() -> Result<Self, ClientError> {
        let path = config_path();
        Self::resolve(path.as_deref(), |key| std::env::var(key).ok()).map(|(config, _)| config)
    }

    /// Resolve every field against `file` and `env`, recording where each
    /// value came from. A missing file is fine; an unreadable or invalid one
    /// is an error.
    pub fn resolve(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Self, ConfigSources), ClientError> {
        let api = match file {
            Some(path) => load_config_file(path)?.unwrap_or_default(),
            None => ApiConfig::default(),
        };

        let (graphql_url, graphql_src) = pick(
            env(ENV_GRAPHQL_URL),
            ENV_GRAPHQL_URL,
            api.graphql_url,
            DEFAULT_GRAPHQL_URL.to_string(),
        );
        let (types_url, types_src) = pick(
            env(ENV_TYPES_URL),
            ENV_TYPES_URL,
            api.types_url,
            DEFAULT_TYPES_URL.to_string(),
        );

        let env_timeout = env(ENV_TIMEOUT_SECS)
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|_| {
                    ClientError::config(format!("{} must be a whole number of seconds, got {:?}", ENV_TIMEOUT_SECS, raw))
                })
            })
            .transpose()?;
        let (timeout_secs, timeout_src) = pick(
            env_timeout,
            ENV_TIMEOUT_SECS,
            api.timeout_secs,
            DEFAULT_TIMEOUT.as_secs(),
        );
        if timeout_secs == 0 {
            return Err(ClientError::config("timeout must be at least one second"));
        }

        let config = Self {
            graphql_url,
            types_url,
            timeout: Duration::from_secs(timeout_secs),
        };
        let sources = ConfigSources {
            graphql_url: graphql_src,
            types_url: types_src,
            timeout: timeout_src,
        };
        Ok((config, sources))
    }

    /// Apply explicit values (e.g. from CLI flags) over the loaded ones.
    pub fn with_overrides(mut self, graphql_url: Option<String>, types_url: Option<String>) -> Self {
        if let Some(url) = graphql_url {
            self.graphql_url = url;
        }
        if let Some(url) = types_url {
            self.types_url = url;
        }
        self
    }
}

fn pick<T>(env: Option<T>, var: &'static str, file: Option<T>, default: T) -> (T, ConfigSource) {
    if let Some(v) = env {
        (v, ConfigSource::EnvVar(var))
    } else if let Some(v) = file {
        (v, ConfigSource::ConfigFile)
    } else {
        (default, ConfigSource::Default)
    }
}

/// Return the path to the client config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pokedex").join("config.toml"))
}

/// Determine where each config field is coming from, using the real
/// environment and config file.
pub fn config_sources() -> Result<ConfigSources, ClientError> {
    let path = config_path();
    ClientConfig::resolve(path.as_deref(), |key| std::env::var(key).ok()).map(|(_, sources)| sources)
}

/// Write `config` to `path`, creating parent directories as needed.
///
/// Written to a temporary sibling first and renamed into place.
pub fn save_to_file(config: &ClientConfig, path: &Path) -> Result<(), ClientError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = ConfigFile {
        api: Some(ApiConfig {
            graphql_url: Some(config.graphql_url.clone()),
            types_url: Some(config.types_url.clone()),
            timeout_secs: Some(config.timeout.as_secs()),
        }),
    };
    let toml_str = toml::to_string_pretty(&file)
        .map_err(|e| ClientError::config(format!("Failed to serialize config: {}", e)))?;

    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, toml_str)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

fn load_config_file(path: &Path) -> Result<Option<ApiConfig>, ClientError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let config: ConfigFile = toml::from_str(&content)
        .map_err(|e| ClientError::config(format!("{}: {}", path.display(), e)))?;
    Ok(config.api)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
