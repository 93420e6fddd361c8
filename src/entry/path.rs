// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::entry::EntryKind;

/// Normalises an entry path into the form stored in the archive.
///
/// Backslashes become forward slashes, leading slashes as well as empty and `.` segments are dropped, and
/// directories gain a trailing slash. `..` segments are kept verbatim. A directory which normalises to the empty
/// string is the archive root and returns an empty path.
pub(crate) fn normalize(path: &str, kind: EntryKind) -> String {
    let path = path.replace('\\', "/");
    let mut normalized = String::with_capacity(path.len() + 1);

    for segment in path.split('/').filter(|segment| !segment.is_empty() && *segment != ".") {
        if !normalized.is_empty() {
            normalized.push('/');
        }
        normalized.push_str(segment);
    }

    if matches!(kind, EntryKind::Directory) && !normalized.is_empty() {
        normalized.push('/');
    }

    normalized
}

/// Returns the parent directory of a normalised path (with its trailing slash), or `None` at the top level.
///
/// ```text
/// "a/b/c.txt" -> Some("a/b/")
/// "a/b/"      -> Some("a/")
/// "a/"        -> None
/// ```
pub(crate) fn parent(path: &str) -> Option<&str> {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    trimmed.rfind('/').map(|index| &trimmed[..=index])
}
