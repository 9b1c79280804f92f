use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/gerar-cardapio";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_ms: u64,
    pub locale: Locale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            locale: Locale::default(),
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        // A zero timeout would fail every request immediately.
        Duration::from_millis(self.timeout_ms.max(1))
    }
}
