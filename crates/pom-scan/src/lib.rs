//! Batch driver around `pom-catalog`: discovery, concurrent parsing and
//! JSON-lines output.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod output;
pub mod scan;

pub use cli::Cli;
pub use config::ScanConfig;
pub use discovery::discover;
pub use output::{Summary, write_reports};
pub use scan::{Outcome, Report, ScanError, ScanMode, scan};
