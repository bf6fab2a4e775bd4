//! Package identity records built from a parsed POM document.
//!
//! Two entry points share the same loader output:
//! - [`parse_pom_xml`] emits one record per declared dependency
//! - [`parse_pom_xml_project`] returns the document's own descriptive metadata
//!
//! Missing groupId/version values are taken from the document's parent
//! reference, one level deep. artifactId is never inherited.

use crate::description::clean_description;
use crate::error::Result;
use crate::parent::{non_empty, resolve_parent};
use crate::parser::parse_project;
use crate::purl::package_url;
use crate::types::{
    JavaMetadata, Language, Location, MetadataType, POM_CATALOGER, Package, PackageType,
    PomDocument, PomParent, PomProject, Relationship,
};
use std::io::Read;

/// Packages plus the relationships among them.
pub type CatalogOutput = (Vec<Package>, Option<Vec<Relationship>>);

/// Effective coordinates after parent fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Coordinates {
    group_id: String,
    artifact_id: String,
    version: String,
}

impl Coordinates {
    /// Returns `None` when the artifactId is missing or empty.
    fn resolve(
        group_id: Option<&str>,
        artifact_id: Option<&str>,
        version: Option<&str>,
        parent: Option<&PomParent>,
    ) -> Option<Self> {
        let artifact_id = non_empty(artifact_id)?;
        Some(Self {
            group_id: inherit(group_id, parent.and_then(|p| p.group_id.as_deref())),
            artifact_id,
            version: inherit(version, parent.and_then(|p| p.version.as_deref())),
        })
    }

    fn into_package(self, path: &str, pom_project: Option<PomProject>) -> Package {
        let purl = package_url(&self.group_id, &self.artifact_id, &self.version);
        Package {
            name: self.artifact_id,
            version: self.version,
            found_by: POM_CATALOGER,
            locations: vec![Location {
                path: path.to_string(),
            }],
            language: Language::Java,
            package_type: PackageType::JavaArchive,
            metadata_type: MetadataType::JavaMetadata,
            metadata: JavaMetadata { purl, pom_project },
        }
    }
}

fn inherit(own: Option<&str>, from_parent: Option<&str>) -> String {
    non_empty(own)
        .or_else(|| non_empty(from_parent))
        .unwrap_or_default()
}

/// Builds one package record per declared dependency, in document order.
///
/// Dependencies without an artifactId are skipped. Relationships are never
/// produced here; the second element is always `None`.
pub fn build_packages(path: &str, doc: &PomDocument) -> CatalogOutput {
    let parent = doc.parent.as_ref().and_then(resolve_parent);

    let packages = doc
        .dependencies
        .iter()
        .filter_map(|dep| {
            let coordinates = Coordinates::resolve(
                dep.group_id.as_deref(),
                dep.artifact_id.as_deref(),
                dep.version.as_deref(),
                parent.as_ref(),
            );
            if coordinates.is_none() {
                tracing::trace!(
                    path,
                    group_id = ?dep.group_id,
                    "skipping dependency without artifactId"
                );
            }
            coordinates
        })
        .map(|coordinates| coordinates.into_package(path, None))
        .collect();

    (packages, None)
}

/// Builds the record for the document's own identity.
///
/// Returns `None` for documents without an artifactId (parent-only
/// metadata). The record carries the project metadata.
pub fn project_package(path: &str, doc: &PomDocument) -> Option<Package> {
    let project = pom_project(path, doc);
    let coordinates = Coordinates::resolve(
        doc.group_id.as_deref(),
        doc.artifact_id.as_deref(),
        doc.version.as_deref(),
        project.parent.as_ref(),
    )?;
    Some(coordinates.into_package(path, Some(project)))
}

/// Descriptive metadata exactly as the document declares it.
///
/// No parent fallback is applied; only the description is normalized.
pub fn pom_project(path: &str, doc: &PomDocument) -> PomProject {
    PomProject {
        path: path.to_string(),
        parent: doc.parent.as_ref().and_then(resolve_parent),
        group_id: doc.group_id.clone(),
        artifact_id: doc.artifact_id.clone(),
        version: doc.version.clone(),
        name: doc.name.clone(),
        description: doc
            .description
            .as_deref()
            .map(clean_description)
            .filter(|d| !d.is_empty()),
        url: doc.url.clone(),
    }
}

/// Loads `source` and returns the dependency package records.
pub fn parse_pom_xml(path: &str, source: impl Read) -> Result<CatalogOutput> {
    let doc = parse_project(path, source)?;
    Ok(build_packages(path, &doc))
}

/// Loads `source` and returns its project metadata.
pub fn parse_pom_xml_project(path: &str, source: impl Read) -> Result<PomProject> {
    let doc = parse_project(path, source)?;
    Ok(pom_project(path, &doc))
}
