//! Parent reference presence resolution.

use crate::types::{PomParent, RawParent};

/// Decides whether `raw` names a parent at all.
///
/// Returns `None` when groupId, artifactId and version are all empty. Any
/// other declared field (`relativePath`) has no say. The returned parent
/// holds exactly the non-empty fields, verbatim.
pub fn resolve_parent(raw: &RawParent) -> Option<PomParent> {
    let parent = PomParent {
        group_id: non_empty(raw.group_id.as_deref()),
        artifact_id: non_empty(raw.artifact_id.as_deref()),
        version: non_empty(raw.version.as_deref()),
    };

    if parent.group_id.is_none() && parent.artifact_id.is_none() && parent.version.is_none() {
        return None;
    }
    Some(parent)
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
