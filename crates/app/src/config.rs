use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, embedded at build time so the web
/// target needs no file access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config once and return it. Invalid config falls back to
/// defaults.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| load(CONFIG_TOML))
}

fn load(contents: &str) -> AppConfig {
    match AppConfig::from_toml_str(contents) {
        Ok(config) => {
            tracing::debug!(?config, "loaded config.toml");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
            AppConfig::default()
        }
    }
}
