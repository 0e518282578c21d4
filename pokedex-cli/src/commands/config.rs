use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pokedex_client::{ClientConfig, config_path, config_sources, save_to_file};

use crate::cli_types::ConfigAction;
use crate::error::CliError;

pub(crate) fn run_config(action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Init { force } => init(force),
        ConfigAction::Path => {
            let path = config_path().ok_or_else(|| CliError::config("no config directory on this platform"))?;
            log::info!("{}", path.display());
            Ok(())
        }
    }
}

fn show() -> Result<(), CliError> {
    let config = ClientConfig::load()?;
    let sources = config_sources()?;
    let path = config_path();

    log::info!("{}", "Configuration".if_supports_color(Stdout, |t| t.bold()));
    match &path {
        Some(p) if p.exists() => log::info!("  file: {}", p.display()),
        Some(p) => log::info!("  file: {} (not created)", p.display()),
        None => log::info!("  file: (no config directory)"),
    }
    log::info!("");
    log::info!(
        "  graphql_url   {}  ({})",
        config.graphql_url,
        sources.graphql_url.if_supports_color(Stdout, |t| t.dimmed())
    );
    log::info!(
        "  types_url     {}  ({})",
        config.types_url,
        sources.types_url.if_supports_color(Stdout, |t| t.dimmed())
    );
    log::info!(
        "  timeout_secs  {}  ({})",
        config.timeout.as_secs(),
        sources.timeout.if_supports_color(Stdout, |t| t.dimmed())
    );
    Ok(())
}

fn init(force: bool) -> Result<(), CliError> {
    let path = config_path().ok_or_else(|| CliError::config("no config directory on this platform"))?;
    if path.exists() && !force {
        return Err(CliError::config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let config = ClientConfig::load()?;
    save_to_file(&config, &path)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
