//! Concurrent per-document cataloging.
//!
//! Each document is parsed on the blocking pool, bounded by the configured
//! concurrency. One failing document never affects the others; outcomes
//! come back in discovery order.

use crate::config::ScanConfig;
use pom_catalog::{Cataloger, Package, PomCataloger, PomError, PomProject};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// What to extract from each document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    #[default]
    Packages,
    Project,
}

#[derive(Debug)]
pub enum Report {
    Packages(Vec<Package>),
    Project(Box<PomProject>),
}

impl Report {
    /// Number of output records.
    pub fn len(&self) -> usize {
        match self {
            Self::Packages(packages) => packages.len(),
            Self::Project(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Error, Debug)]
pub enum ScanError {
    #[error(transparent)]
    Catalog(#[from] PomError),

    #[error("Cataloging task for '{path}' did not complete")]
    TaskFailed { path: String },
}

#[derive(Debug)]
pub struct Outcome {
    pub path: PathBuf,
    pub result: Result<Report, ScanError>,
}

/// Catalogs every file, returning one outcome per file in input order.
pub async fn scan(files: Vec<PathBuf>, config: &ScanConfig, mode: ScanMode) -> Vec<Outcome> {
    scan_with(files, config, move |path: &Path| catalog_file(path, mode)).await
}

async fn scan_with<F>(files: Vec<PathBuf>, config: &ScanConfig, catalog: F) -> Vec<Outcome>
where
    F: Fn(&Path) -> Result<Report, PomError> + Send + Sync + 'static,
{
    let catalog = Arc::new(catalog);
    let semaphore = Arc::new(Semaphore::new(config.effective_concurrency()));
    let mut tasks = JoinSet::new();

    for (index, path) in files.iter().cloned().enumerate() {
        let Ok(permit) = Arc::clone(&semaphore).acquire_owned().await else {
            break;
        };
        let catalog = Arc::clone(&catalog);
        tasks.spawn_blocking(move || {
            let result = catalog(&path);
            drop(permit);
            (index, result)
        });
    }

    let mut results: Vec<Option<Result<Report, PomError>>> =
        std::iter::repeat_with(|| None).take(files.len()).collect();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, result)) => results[index] = Some(result),
            Err(err) => tracing::error!(%err, "cataloging task failed"),
        }
    }

    // A task that panicked left no result; it still counts as a failure
    files
        .into_iter()
        .zip(results)
        .map(|(path, result)| {
            let result = match result {
                Some(result) => result.map_err(ScanError::from),
                None => Err(ScanError::TaskFailed {
                    path: path.display().to_string(),
                }),
            };
            Outcome { path, result }
        })
        .collect()
}

fn catalog_file(path: &Path, mode: ScanMode) -> Result<Report, PomError> {
    let label = path.display().to_string();
    let mut file = File::open(path).map_err(|source| PomError::SourceUnavailable {
        path: label.clone(),
        source,
    })?;

    let cataloger = PomCataloger::new();
    let report = match mode {
        ScanMode::Packages => {
            let (packages, _) = cataloger.catalog(&label, &mut file)?;
            Report::Packages(packages)
        }
        ScanMode::Project => Report::Project(Box::new(cataloger.project(&label, &mut file)?)),
    };

    tracing::debug!(path = %label, records = report.len(), "cataloged document");
    Ok(report)
}
