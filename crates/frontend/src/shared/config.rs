use anyhow::Context;
use contracts::shared::record_list::ViewMode;
use serde::{Deserialize, Serialize};

/// localStorage key holding an optional TOML override document
pub const CONFIG_STORAGE_KEY: &str = "hr_app_config";

/// Clock ticks faster than this are rejected
const MIN_CLOCK_TICK_MS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Title shown in the top header
    pub app_title: String,
    /// Interval of the header clock
    pub clock_tick_ms: u32,
    /// Layout of a list page opened for the first time
    pub default_view_mode: ViewMode,
    /// Keep filters and view mode of every list page in localStorage
    pub persist_list_state: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "HR Management".to_string(),
            clock_tick_ms: 1000,
            default_view_mode: ViewMode::Grid,
            persist_list_state: true,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
app_title = "HR Management"
clock_tick_ms = 1000
default_view_mode = "grid"
persist_list_state = true
"#;

/// Parse a TOML document. Missing keys take their default value.
pub fn parse_config(src: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(src).context("invalid app config")?;
    if config.clock_tick_ms < MIN_CLOCK_TICK_MS {
        anyhow::bail!(
            "clock_tick_ms must be at least {}, got {}",
            MIN_CLOCK_TICK_MS,
            config.clock_tick_ms
        );
    }
    if config.app_title.trim().is_empty() {
        anyhow::bail!("app_title must not be empty");
    }
    Ok(config)
}

fn stored_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(CONFIG_STORAGE_KEY).ok().flatten()
}

/// Load configuration.
///
/// Search order:
/// 1. TOML document stored in localStorage under [`CONFIG_STORAGE_KEY`]
/// 2. Falls back to the embedded default config
pub fn load_config() -> AppConfig {
    if let Some(src) = stored_override() {
        match parse_config(&src) {
            Ok(config) => {
                log::info!("Loading config from localStorage '{}'", CONFIG_STORAGE_KEY);
                return config;
            }
            Err(e) => log::warn!("Ignoring stored config: {:#}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {:#}", e);
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config("default_view_mode = \"table\"").unwrap();
        assert_eq!(config.default_view_mode, ViewMode::Table);
        assert_eq!(config.clock_tick_ms, 1000);
        assert!(config.persist_list_state);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(parse_config("clock_tick_ms = 10").is_err());
        assert!(parse_config("app_title = \"  \"").is_err());
        assert!(parse_config("default_view_mode = \"kanban\"").is_err());
        assert!(parse_config("clock_tick_ms = ").is_err());
    }
}
