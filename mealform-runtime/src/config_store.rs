use anyhow::{Context, anyhow};
use mealform_core::config::ClientConfig;
use mealform_core::locale::Locale;
use std::fs;
use std::path::PathBuf;

pub const ENV_ENDPOINT: &str = "MEALFORM_ENDPOINT";
pub const ENV_TIMEOUT_MS: &str = "MEALFORM_TIMEOUT_MS";
pub const ENV_LOCALE: &str = "MEALFORM_LOCALE";

/// Read-only handle on the JSON client config file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the config; a missing file yields the defaults.
    pub fn load(&self) -> anyhow::Result<ClientConfig> {
        if !self.path.exists() {
            log::debug!("no config at {}, using defaults", self.path.display());
            return Ok(ClientConfig::default());
        }
        let bytes =
            fs::read(&self.path).with_context(|| format!("read config: {}", self.path.display()))?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes).context("decode config JSON")?;
        Ok(cfg)
    }
}

/// Layers `MEALFORM_*` overrides from `lookup` (usually `std::env::var`) onto `cfg`.
/// Unset and blank variables leave the field alone.
pub fn apply_env_overrides<F>(cfg: &mut ClientConfig, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(endpoint) = var(ENV_ENDPOINT) {
        cfg.endpoint = endpoint;
    }
    if let Some(raw) = var(ENV_TIMEOUT_MS) {
        cfg.timeout_ms = raw
            .parse()
            .with_context(|| format!("{ENV_TIMEOUT_MS} must be a number of milliseconds"))?;
    }
    if let Some(raw) = var(ENV_LOCALE) {
        cfg.locale = Locale::from_code(&raw)
            .ok_or_else(|| anyhow!("{ENV_LOCALE}: unsupported locale `{raw}`"))?;
    }
    Ok(())
}
