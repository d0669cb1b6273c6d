use super::balance::WalletBalance;
use super::priority::PriorityTable;
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::{fs, path::PathBuf};
use tracing::debug;

pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com";
pub const DEFAULT_ICONS_URL: &str = "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PriceFeedConfig {
    pub base_url: String,
}

impl Default for PriceFeedConfig {
    fn default() -> Self {
        PriceFeedConfig {
            base_url: DEFAULT_PRICES_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub prices: PriceFeedConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IconConfig {
    pub base_url: String,
}

impl Default for IconConfig {
    fn default() -> Self {
        IconConfig {
            base_url: DEFAULT_ICONS_URL.to_string(),
        }
    }
}

impl IconConfig {
    /// Icon location for `currency` as `(svg, png fallback)`.
    pub fn icon_urls(&self, currency: &str) -> (String, String) {
        let base = self.base_url.trim_end_matches('/');
        (
            format!("{base}/{currency}.svg"),
            format!("{base}/{currency}.png"),
        )
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub icons: IconConfig,
    #[serde(default)]
    pub priorities: PriorityTable,
    #[serde(default)]
    pub balances: Vec<WalletBalance>,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to built-in
    /// defaults when no file has been created yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "tokenswap", "tokenswap")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Balances are keyed by currency, so each currency may appear once.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for balance in &self.balances {
            if !seen.insert(balance.currency.as_str()) {
                bail!("Duplicate balance for currency {}", balance.currency);
            }
        }
        Ok(())
    }
}
