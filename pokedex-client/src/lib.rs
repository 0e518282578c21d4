pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use client::PokedexClient;
pub use config::{ClientConfig, ConfigSource, ConfigSources, config_path, config_sources, save_to_file};
pub use error::ClientError;
pub use source::CatalogSource;
