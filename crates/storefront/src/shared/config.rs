use contracts::reports::DateRangePreset;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub media: MediaConfig,
    pub reports: ReportsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Absolute backend URL. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    pub upload_url: String,
    pub upload_preset: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportsConfig {
    #[serde(default = "default_preset")]
    pub default_preset: String,
    #[serde(default = "default_debounce")]
    pub search_debounce_ms: u32,
}

fn default_port() -> u16 {
    3000
}

fn default_preset() -> String {
    DateRangePreset::Last30Days.code().to_string()
}

fn default_debounce() -> u32 {
    300
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[media]
upload_url = "https://api.cloudinary.com/v1_1/game-marketplace/auto/upload"
upload_preset = "game_uploads"

[reports]
default_preset = "30days"
search_debounce_ms = 300
"#;

/// Configuration baked in at build time through `STOREFRONT_CONFIG`
/// (a complete TOML document), falling back to the embedded default.
pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    if let Some(contents) = option_env!("STOREFRONT_CONFIG") {
        match toml::from_str::<Config>(contents) {
            Ok(config) => {
                log::info!("Using configuration from STOREFRONT_CONFIG");
                return config;
            }
            Err(e) => log::warn!("STOREFRONT_CONFIG is invalid, using default: {}", e),
        }
    }
    load_default()
});

fn load_default() -> Config {
    match toml::from_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            // Only reachable if DEFAULT_CONFIG itself is broken.
            log::error!("Embedded configuration is invalid: {}", e);
            Config {
                api: ApiConfig {
                    base_url: String::new(),
                    port: default_port(),
                },
                media: MediaConfig {
                    upload_url: String::new(),
                    upload_preset: String::new(),
                },
                reports: ReportsConfig {
                    default_preset: default_preset(),
                    search_debounce_ms: default_debounce(),
                },
            }
        }
    }
}

pub fn config() -> &'static Config {
    &CONFIG
}

impl ReportsConfig {
    pub fn preset(&self) -> DateRangePreset {
        DateRangePreset::from_code(&self.default_preset).unwrap_or(DateRangePreset::Last30Days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.media.upload_preset, "game_uploads");
        assert_eq!(config.reports.preset(), DateRangePreset::Last30Days);
        assert_eq!(config.reports.search_debounce_ms, 300);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://api.example.vn"
            [media]
            upload_url = "https://media.example.vn/upload"
            upload_preset = "p"
            [reports]
            default_preset = "nonsense"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.reports.search_debounce_ms, 300);
        assert_eq!(config.reports.preset(), DateRangePreset::Last30Days);
    }
}
