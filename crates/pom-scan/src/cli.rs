//! Command-line interface.

use crate::config::ScanConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pom-scan", version)]
#[command(about = "Print package identities found in Maven POM files as JSON lines")]
pub struct Cli {
    /// Files or directories to scan
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Print each document's project metadata instead of its dependencies
    #[arg(long)]
    pub project: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of documents parsed at the same time
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Follow symbolic links while walking directories
    #[arg(long)]
    pub follow_links: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Config file values with flags applied on top.
    pub fn resolve_config(&self) -> anyhow::Result<ScanConfig> {
        let mut config = match &self.config {
            Some(path) => ScanConfig::load(path)?,
            None => ScanConfig::default(),
        };

        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
        if self.follow_links {
            config.follow_links = true;
        }
        if let Some(level) = &self.log_level {
            config.log_level.clone_from(level);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let cli = Cli::parse_from(["pom-scan"]);
        assert_eq!(cli.paths, vec![PathBuf::from(".")]);
        assert!(!cli.project);
        assert_eq!(cli.resolve_config().unwrap(), ScanConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.json");
        std::fs::write(&path, r#"{"concurrency": 3, "log_level": "warn"}"#).unwrap();

        let cli = Cli::parse_from([
            "pom-scan",
            "--config",
            path.to_str().unwrap(),
            "-j",
            "5",
            "--project",
            "a",
            "b",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.concurrency, 5);
        assert_eq!(config.log_level, "warn");
        assert!(cli.project);
        assert_eq!(cli.paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
