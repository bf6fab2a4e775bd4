//! JSON-lines rendering of scan outcomes.

use crate::scan::{Outcome, Report};
use anyhow::Context;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub documents: usize,
    pub records: usize,
    pub failures: usize,
}

/// Writes one JSON line per record; failed documents are logged and counted.
pub fn write_reports(out: &mut impl Write, outcomes: &[Outcome]) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for outcome in outcomes {
        summary.documents += 1;
        match &outcome.result {
            Ok(Report::Packages(packages)) => {
                for package in packages {
                    write_line(out, package)?;
                }
                summary.records += packages.len();
            }
            Ok(Report::Project(project)) => {
                write_line(out, project)?;
                summary.records += 1;
            }
            Err(err) => {
                tracing::warn!(path = %outcome.path.display(), error = %err, "skipping document");
                summary.failures += 1;
            }
        }
    }

    out.flush().context("failed to flush output")?;
    Ok(summary)
}

fn write_line(out: &mut impl Write, value: &impl serde::Serialize) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, value).context("failed to write record")?;
    out.write_all(b"\n").context("failed to write record")?;
    Ok(())
}
