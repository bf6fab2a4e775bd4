//! Package URL construction for Maven coordinates.

/// Builds `pkg:maven/<groupId>/<artifactId>@<version>`.
///
/// An empty version drops the `@<version>` suffix and an empty group drops
/// its path segment. Segments are percent-encoded.
pub fn package_url(group_id: &str, artifact_id: &str, version: &str) -> String {
    let mut purl = String::from("pkg:maven/");
    if !group_id.is_empty() {
        purl.push_str(&urlencoding::encode(group_id));
        purl.push('/');
    }
    purl.push_str(&urlencoding::encode(artifact_id));
    if !version.is_empty() {
        purl.push('@');
        purl.push_str(&urlencoding::encode(version));
    }
    purl
}
