//! Cataloger seam used by discovery drivers.

use crate::error::Result;
use crate::package::{CatalogOutput, parse_pom_xml, parse_pom_xml_project};
use crate::types::{POM_CATALOGER, PomProject};
use std::io::Read;
use std::path::Path;

/// Turns one discovered file into package records.
pub trait Cataloger: Send + Sync {
    /// Stable identifier, also used as the records' found-by tag.
    fn id(&self) -> &'static str;

    fn display_name(&self) -> &'static str;

    /// Exact file names this cataloger handles.
    fn manifest_filenames(&self) -> &[&'static str];

    /// File name suffixes this cataloger handles.
    fn manifest_suffixes(&self) -> &[&'static str] {
        &[]
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.manifest_filenames().contains(&file_name)
            || self
                .manifest_suffixes()
                .iter()
                .any(|suffix| file_name.len() > suffix.len() && file_name.ends_with(suffix))
    }

    fn catalog(&self, path: &str, source: &mut dyn Read) -> Result<CatalogOutput>;
}

/// Cataloger for Maven POM descriptors.
#[derive(Debug, Default, Clone, Copy)]
pub struct PomCataloger;

impl PomCataloger {
    pub fn new() -> Self {
        Self
    }

    /// Project metadata of the document instead of its dependencies.
    pub fn project(&self, path: &str, source: &mut dyn Read) -> Result<PomProject> {
        parse_pom_xml_project(path, source)
    }
}

impl Cataloger for PomCataloger {
    fn id(&self) -> &'static str {
        POM_CATALOGER
    }

    fn display_name(&self) -> &'static str {
        "Maven POM"
    }

    fn manifest_filenames(&self) -> &[&'static str] {
        &["pom.xml"]
    }

    fn manifest_suffixes(&self) -> &[&'static str] {
        &[".pom", ".pom.xml"]
    }

    fn catalog(&self, path: &str, source: &mut dyn Read) -> Result<CatalogOutput> {
        parse_pom_xml(path, source)
    }
}
