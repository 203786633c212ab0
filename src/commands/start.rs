use anyhow::Result;
use colored::Colorize;
use cost_optimizer::{config, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting cost optimizer...".green());

    let cfg = config::load_config(config_path)?;
    info!(
        "Configuration loaded from {} ({} users)",
        config_path.display(),
        cfg.auth.users.len()
    );

    server::start_server(cfg).await
}
