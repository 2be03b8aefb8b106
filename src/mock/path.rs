//! URL path normalization.
//!
//! Purely lexical: the filesystem is never consulted, so the result only depends
//! on the input string. `..` can never climb above the root.

/// Collapse `raw` into a path relative to a domain root.
///
/// Empty and `.` segments are dropped, `..` removes the previous kept segment
/// (or nothing, at the root). The result never starts with `/` and never
/// contains a `..` segment.
pub fn normalize(raw: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}
