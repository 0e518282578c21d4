use std::collections::HashMap;

use tempfile::TempDir;

use super::*;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn no_env() -> impl Fn(&str) -> Option<String> {
    env_from(&[])
}

#[test]
fn defaults_without_file_or_env() {
    let (config, sources) = ClientConfig::resolve(None, no_env()).unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(sources.graphql_url, ConfigSource::Default);
    assert_eq!(sources.timeout, ConfigSource::Default);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nope.toml");
    let (config, _) = ClientConfig::resolve(Some(&path), no_env()).unwrap();
    assert_eq!(config.graphql_url, DEFAULT_GRAPHQL_URL);
}

#[test]
fn file_values_override_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        "[api]\ngraphql_url = \"http://localhost:4000\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    let (config, sources) = ClientConfig::resolve(Some(&path), no_env()).unwrap();
    assert_eq!(config.graphql_url, "http://localhost:4000");
    assert_eq!(config.types_url, DEFAULT_TYPES_URL);
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(sources.graphql_url, ConfigSource::ConfigFile);
    assert_eq!(sources.types_url, ConfigSource::Default);
}

#[test]
fn env_beats_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[api]\ngraphql_url = \"http://file\"\n").unwrap();

    let env = env_from(&[(ENV_GRAPHQL_URL, "http://env"), (ENV_TIMEOUT_SECS, "12")]);
    let (config, sources) = ClientConfig::resolve(Some(&path), env).unwrap();
    assert_eq!(config.graphql_url, "http://env");
    assert_eq!(config.timeout, Duration::from_secs(12));
    assert_eq!(sources.graphql_url, ConfigSource::EnvVar(ENV_GRAPHQL_URL));
    assert_eq!(sources.timeout, ConfigSource::EnvVar(ENV_TIMEOUT_SECS));
}

#[test]
fn bad_timeout_env_is_an_error() {
    let env = env_from(&[(ENV_TIMEOUT_SECS, "soon")]);
    let err = ClientConfig::resolve(None, env).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn zero_timeout_is_rejected() {
    let env = env_from(&[(ENV_TIMEOUT_SECS, "0")]);
    assert!(ClientConfig::resolve(None, env).is_err());
}

#[test]
fn invalid_toml_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[api\n").unwrap();
    let err = ClientConfig::resolve(Some(&path), no_env()).unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn saved_file_round_trips_through_resolve() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("config.toml");
    let config = ClientConfig {
        graphql_url: "http://localhost:4000/graphql".into(),
        types_url: "http://localhost:4001/type".into(),
        timeout: Duration::from_secs(9),
    };
    save_to_file(&config, &path).unwrap();
    assert!(!path.with_extension("toml.tmp").exists());

    let (loaded, sources) = ClientConfig::resolve(Some(&path), no_env()).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(sources.types_url, ConfigSource::ConfigFile);
}

#[test]
fn overrides_replace_only_given_fields() {
    let config = ClientConfig::default().with_overrides(Some("http://cli".into()), None);
    assert_eq!(config.graphql_url, "http://cli");
    assert_eq!(config.types_url, DEFAULT_TYPES_URL);
}

#[test]
fn source_display() {
    assert_eq!(ConfigSource::EnvVar(ENV_TYPES_URL).to_string(), "env $POKEDEX_TYPES_URL");
    assert_eq!(ConfigSource::ConfigFile.to_string(), "config file");
    assert_eq!(ConfigSource::Default.to_string(), "default");
}
