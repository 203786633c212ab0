use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub users: Vec<UserConfig>,
    #[serde(default = "default_session_ttl_minutes")]
    pub session_ttl_minutes: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserConfig {
    pub email: String,
    pub password: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Artificial delay applied before returning analysis results.
    /// UX affordance only; 0 disables it.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
}

fn default_session_ttl_minutes() -> u64 {
    60
}

fn default_simulated_latency_ms() -> u64 {
    1500
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("COST_OPTIMIZER").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.port == 0 {
        anyhow::bail!("Server port must be non-zero");
    }

    cfg.server
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|_| anyhow::anyhow!("Invalid server host: {}", cfg.server.host))?;

    if !cfg.auth.users.iter().any(|u| u.enabled) {
        anyhow::bail!("At least one user must be enabled");
    }

    for user in &cfg.auth.users {
        if user.email.is_empty() {
            anyhow::bail!("User email cannot be empty");
        }
        if user.password.is_empty() {
            anyhow::bail!("Password for user '{}' cannot be empty", user.email);
        }
    }

    if cfg.auth.session_ttl_minutes == 0 {
        anyhow::bail!("Session TTL must be at least one minute");
    }

    Ok(())
}
