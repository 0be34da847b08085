//! Server configuration from environment variables
//!
//!   MAKTKART_BIND_ADDR   listen address (default: 0.0.0.0:3000)
//!   MAKTKART_DATASET     dataset YAML path (default: bundled sample)
//!   MAKTKART_STATIC_DIR  directory served at `/` (optional)
//!   BRREG_BASE_URL       registry API base (default: public Brreg API)
//!   BRREG_TIMEOUT_SECS   upstream request timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const BRREG_API_BASE: &str = "https://data.brreg.no/enhetsregisteret/api";
const DEFAULT_BRREG_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrregConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for BrregConfig {
    fn default() -> Self {
        Self {
            base_url: BRREG_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_BRREG_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub dataset_path: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
    pub brreg: BrregConfig,
}

impl ServerConfig {
    /// Read config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read config through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout_secs = match var("BRREG_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("BRREG_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"))?,
            None => DEFAULT_BRREG_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr: var("MAKTKART_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            dataset_path: var("MAKTKART_DATASET").map(PathBuf::from),
            static_dir: var("MAKTKART_STATIC_DIR").map(PathBuf::from),
            brreg: BrregConfig {
                base_url: var("BRREG_BASE_URL").unwrap_or_else(|| BRREG_API_BASE.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
