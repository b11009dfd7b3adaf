// crates/shared-kernel/src/path.rs
//! Separator normalization for descriptor directories.
//!
//! These helpers only rewrite strings; nothing here consults the filesystem.

/// Replace every non-overlapping occurrence of `target`, scanning left to right.
///
/// An empty `target` matches nothing and returns `input` unchanged.
pub fn replace_all(input: &str, target: &str, replacement: &str) -> String {
    if target.is_empty() {
        return input.to_string();
    }
    input.split(target).collect::<Vec<_>>().join(replacement)
}

/// Strip at most one trailing `/`.
pub fn trim_trailing_slash(input: &str) -> &str {
    input.strip_suffix('/').unwrap_or(input)
}

/// Convert backslashes to forward slashes, then drop trailing slashes.
///
/// `C:\Users\Maestro\` becomes `C:/Users/Maestro`. Repeated separators at the
/// end (`/tmp//`) are all removed so the result never ends in `/`; the root `/`
/// normalizes to the empty string.
pub fn normalize_directory(input: &str) -> String {
    let forward = replace_all(input, "\\", "/");
    let mut trimmed = forward.as_str();
    while trimmed.ends_with('/') {
        trimmed = trim_trailing_slash(trimmed);
    }
    trimmed.to_string()
}
