//! Entry point: load the config, set up logging and hand over to the
//! platform run loop.

use anyhow::Context;
use tracing::{info, warn};

use dynamic_notch::logging;
use dynamic_notch::storage::AppConfig;

fn load_config() -> anyhow::Result<AppConfig> {
    let path = AppConfig::default_path().context("locate config file")?;
    AppConfig::load_from(&path).with_context(|| format!("load config from {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let (config, config_err) = match load_config() {
        Ok(cfg) => (cfg, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    logging::init(config.debug_logging);
    if let Some(err) = config_err {
        warn!("{err:#}; using defaults");
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    run(&config)
}

#[cfg(target_os = "macos")]
fn run(config: &AppConfig) -> anyhow::Result<()> {
    dynamic_notch::platform::macos::run(config);
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn run(_config: &AppConfig) -> anyhow::Result<()> {
    anyhow::bail!("the notch overlay only runs on macOS")
}
