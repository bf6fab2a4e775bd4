//! Package identity extraction from Maven POM descriptors.
//!
//! This crate decodes pom.xml documents, resolves parent references,
//! normalizes descriptions and builds package records carrying a stable
//! package URL. Discovery and output encoding belong to the caller.

pub mod cataloger;
pub mod description;
pub mod error;
pub mod package;
pub mod parent;
pub mod parser;
pub mod purl;
pub mod types;

pub use cataloger::{Cataloger, PomCataloger};
pub use description::clean_description;
pub use error::{PomError, Result};
pub use package::{
    CatalogOutput, build_packages, parse_pom_xml, parse_pom_xml_project, pom_project,
    project_package,
};
pub use parent::resolve_parent;
pub use parser::{parse_pom_str, parse_project};
pub use purl::package_url;
pub use types::{
    JavaMetadata, Language, Location, MavenScope, MetadataType, POM_CATALOGER, Package,
    PackageType, PomDependency, PomDocument, PomParent, PomProject, RawParent, Relationship,
};
