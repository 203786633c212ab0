use anyhow::Result;
use colored::Colorize;
use cost_optimizer::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the current configuration with passwords masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Users: {}", cfg.auth.users.len());
    println!("  Session TTL: {} minutes", cfg.auth.session_ttl_minutes);
    println!(
        "  Simulated latency: {} ms",
        cfg.analysis.simulated_latency_ms
    );

    info!("Configuration validation successful");
    Ok(())
}

/// Mask passwords in configuration for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    for user in &mut sanitized.auth.users {
        user.password = mask_secret(&user.password);
    }
    sanitized
}

/// Shows the first 2 characters with asterisks after
/// Example: "demo-password" -> "de***"
fn mask_secret(secret: &str) -> String {
    if secret.len() <= 2 {
        return "***".to_string();
    }
    format!("{}***", &secret[..2])
}
