//! Domain types for POM documents and the package records built from them.

use serde::Serialize;

/// Provenance tag attached to every record this crate emits.
///
/// Downstream merge logic keys on this value; changing it needs a
/// compatibility note.
pub const POM_CATALOGER: &str = "java-pom-cataloger";

/// One decoded POM descriptor.
///
/// `None` means the element was not declared; `Some("")` means it was
/// declared empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PomDocument {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub name: Option<String>,
    /// Raw text, indentation and line breaks included.
    pub description: Option<String>,
    pub url: Option<String>,
    pub parent: Option<RawParent>,
    /// Project-level `<dependencies>` in document order.
    pub dependencies: Vec<PomDependency>,
}

/// The `<parent>` element exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawParent {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub relative_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PomDependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub scope: MavenScope,
    /// Packaging type (`<type>`), e.g. `jar` or `pom`.
    pub packaging: Option<String>,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MavenScope {
    #[default]
    Compile,
    Test,
    Runtime,
    Provided,
    System,
    Import,
}

impl std::str::FromStr for MavenScope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "test" => Self::Test,
            "runtime" => Self::Runtime,
            "provided" => Self::Provided,
            "system" => Self::System,
            "import" => Self::Import,
            _ => Self::Compile,
        })
    }
}

/// Parent coordinates that survived presence resolution.
///
/// Only non-empty fields are populated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PomParent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Descriptive metadata of a POM, as declared by the document itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PomProject {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<PomParent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Single-line form produced by [`crate::clean_description`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Java,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PackageType {
    #[default]
    #[serde(rename = "java-archive")]
    JavaArchive,
}

/// Names the shape of [`Package::metadata`] for consumers of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MetadataType {
    #[default]
    JavaMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaMetadata {
    pub purl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pom_project: Option<PomProject>,
}

/// A package identity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub name: String,
    /// Empty when neither the declaration nor its parent supplies one.
    pub version: String,
    pub found_by: &'static str,
    pub locations: Vec<Location>,
    pub language: Language,
    #[serde(rename = "type")]
    pub package_type: PackageType,
    pub metadata_type: MetadataType,
    pub metadata: JavaMetadata,
}

/// Directed edge between two packages, identified by PURL.
///
/// POM cataloging never produces these; the type exists for the
/// [`crate::Cataloger`] contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub from: String,
    pub to: String,
}
