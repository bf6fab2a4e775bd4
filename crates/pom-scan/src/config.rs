//! Scanner configuration.
//!
//! Values come from an optional JSON file and are then overridden by
//! command-line flags. Every key is optional:
//!
//! ```json
//! {
//!   "concurrency": 8,
//!   "follow_links": false,
//!   "max_file_size": 10000000,
//!   "exclude": [".git", "target"],
//!   "log_level": "info"
//! }
//! ```

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Files above this size are skipped (10MB).
const DEFAULT_MAX_FILE_SIZE: u64 = 10_000_000;

const DEFAULT_CONCURRENCY: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Documents parsed at the same time.
    pub concurrency: usize,
    pub follow_links: bool,
    pub max_file_size: u64,
    /// Directory names never descended into.
    pub exclude: Vec<String>,
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            follow_links: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            exclude: vec![
                ".git".to_string(),
                "node_modules".to_string(),
                "target".to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl ScanConfig {
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Concurrency bound, never below one.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}
