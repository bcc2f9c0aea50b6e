//! Application configuration. Credits, catalog override, transport knobs.

use serde::Deserialize;

/// Initial credit counter when not configured.
pub const DEFAULT_CREDITS: u32 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Initial credit counter. Read from BLINK_CREDITS.
    #[serde(default)]
    pub credits: Option<u32>,

    /// Optional TOML file overriding the built-in domain catalog.
    /// Read from BLINK_CATALOG_PATH.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Use the mock gateway instead of HTTP (demo without a live endpoint).
    /// Read from BLINK_OFFLINE.
    #[serde(default)]
    pub offline: Option<bool>,

    /// Request timeout in seconds. Unset leaves requests unbounded.
    /// Read from BLINK_UPLOAD_TIMEOUT_SECS.
    #[serde(default)]
    pub upload_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("BLINK").try_parsing(true));
        if let Ok(path) = std::env::var("BLINK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        Ok(cfg)
    }

    /// Returns the initial credit counter. Defaults to DEFAULT_CREDITS.
    pub fn credits_or_default(&self) -> u32 {
        self.credits.unwrap_or(DEFAULT_CREDITS)
    }

    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unconfigured() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.credits_or_default(), DEFAULT_CREDITS);
        assert!(!cfg.is_offline());
        assert!(cfg.upload_timeout_secs.is_none());
        assert!(cfg.catalog_path.is_none());
    }
}
