use ferrous_responder_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        upstream = %config.upstream.server,
        fallback_servers = config.failover.fallback_servers.len(),
        max_entries = config.cache.max_entries,
        "Configuration loaded"
    );

    Ok(config)
}
