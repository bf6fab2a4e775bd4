//! Integration tests using fixture files.

use pom_catalog::{
    Cataloger, Language, POM_CATALOGER, PackageType, PomCataloger, PomError, PomParent,
    PomProject, parse_pom_xml, parse_pom_xml_project, parse_project, project_package,
};
use std::fs::File;

const CODEC_DESCRIPTION: &str = "The Apache Commons Codec package contains simple encoder and decoders for various formats such as Base64 and Hexadecimal.  In addition to these widely used encoders and decoders, the codec package also maintains a collection of phonetic encoding utilities.";

fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn open_fixture(name: &str) -> File {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    File::open(&path).unwrap_or_else(|e| panic!("failed to open {name}: {e}"))
}

#[test]
fn test_fixture_pom_packages() {
    let path = fixture_path("pom.xml");
    let (packages, relationships) = parse_pom_xml(&path, open_fixture("pom.xml")).unwrap();

    assert!(relationships.is_none());
    assert_eq!(packages.len(), 2);

    assert_eq!(packages[0].name, "joda-time");
    assert_eq!(packages[0].version, "2.9.2");
    assert_eq!(packages[0].found_by, POM_CATALOGER);
    assert_eq!(packages[0].language, Language::Java);
    assert_eq!(packages[0].package_type, PackageType::JavaArchive);
    assert_eq!(
        packages[0].metadata.purl,
        "pkg:maven/joda-time/joda-time@2.9.2"
    );

    assert_eq!(packages[1].name, "junit");
    assert_eq!(packages[1].version, "4.12");
    assert_eq!(packages[1].found_by, "java-pom-cataloger");
    assert_eq!(packages[1].metadata.purl, "pkg:maven/junit/junit@4.12");
}

#[test]
fn test_fixture_pom_record_shape() {
    let (packages, _) = parse_pom_xml("pom.xml", open_fixture("pom.xml")).unwrap();

    insta::assert_json_snapshot!(packages[0], @r#"
    {
      "name": "joda-time",
      "version": "2.9.2",
      "foundBy": "java-pom-cataloger",
      "locations": [
        {
          "path": "pom.xml"
        }
      ],
      "language": "java",
      "type": "java-archive",
      "metadataType": "JavaMetadata",
      "metadata": {
        "purl": "pkg:maven/joda-time/joda-time@2.9.2"
      }
    }
    "#);
}

#[test]
fn test_fixture_commons_codec_project() {
    let path = fixture_path("commons-codec.pom.xml");
    let project = parse_pom_xml_project(&path, open_fixture("commons-codec.pom.xml")).unwrap();

    let expected = PomProject {
        path: path.clone(),
        parent: Some(PomParent {
            group_id: Some("org.apache.commons".into()),
            artifact_id: Some("commons-parent".into()),
            version: Some("42".into()),
        }),
        group_id: Some("commons-codec".into()),
        artifact_id: Some("commons-codec".into()),
        version: Some("1.11".into()),
        name: Some("Apache Commons Codec".into()),
        description: Some(CODEC_DESCRIPTION.into()),
        url: Some("http://commons.apache.org/proper/commons-codec/".into()),
    };
    assert_eq!(project, expected);
}

#[test]
fn test_fixture_commons_codec_packages_skip_build_plugins() {
    let (packages, _) = parse_pom_xml(
        "commons-codec.pom.xml",
        open_fixture("commons-codec.pom.xml"),
    )
    .unwrap();

    let purls: Vec<_> = packages.iter().map(|p| p.metadata.purl.as_str()).collect();
    assert_eq!(
        purls,
        [
            "pkg:maven/junit/junit@4.12",
            "pkg:maven/org.apache.commons/commons-lang3@3.5",
        ]
    );
}

#[test]
fn test_fixture_commons_codec_project_package() {
    let path = fixture_path("commons-codec.pom.xml");
    let doc = parse_project(&path, open_fixture("commons-codec.pom.xml")).unwrap();

    let package = project_package(&path, &doc).unwrap();
    assert_eq!(package.name, "commons-codec");
    assert_eq!(package.version, "1.11");
    assert_eq!(
        package.metadata.purl,
        "pkg:maven/commons-codec/commons-codec@1.11"
    );
    let project = package.metadata.pom_project.unwrap();
    assert_eq!(project.description.as_deref(), Some(CODEC_DESCRIPTION));
}

#[test]
fn test_fixture_parent_only_pom() {
    let path = fixture_path("parent-only.pom.xml");
    let doc = parse_project(&path, open_fixture("parent-only.pom.xml")).unwrap();

    // No artifactId of its own: no identity record, and not an error
    assert!(project_package(&path, &doc).is_none());

    let (packages, relationships) =
        parse_pom_xml(&path, open_fixture("parent-only.pom.xml")).unwrap();
    assert!(relationships.is_none());
    assert_eq!(packages.len(), 2);
    assert_eq!(
        packages[0].metadata.purl,
        "pkg:maven/org.example/example-core@7"
    );
    assert_eq!(
        packages[1].metadata.purl,
        "pkg:maven/org.example/example-util@7.1"
    );
}

#[test]
fn test_fixture_wrong_root() {
    let path = fixture_path("not-a-pom.xml");
    let err = parse_pom_xml(&path, open_fixture("not-a-pom.xml")).unwrap_err();
    assert!(matches!(err, PomError::MalformedDocument { .. }));
    assert_eq!(err.path(), path);
}

#[test]
fn test_fixture_through_cataloger() {
    let cataloger = PomCataloger::new();
    let path = fixture_path("pom.xml");
    assert!(cataloger.matches(std::path::Path::new(&path)));

    let mut file = open_fixture("pom.xml");
    let (packages, _) = cataloger.catalog(&path, &mut file).unwrap();
    assert_eq!(packages.len(), 2);
    assert!(packages.iter().all(|p| p.locations[0].path == path));
}
