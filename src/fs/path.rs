//! Path Resolution
//!
//! Turns `..`, absolute and relative targets into normalized directory paths
//! (root, or a path with exactly one trailing `/`). Resolution never checks
//! existence; callers validate against the entry store.

/// Resolve `target` against `current_dir`.
///
/// `current_dir` must already be normalized (`/` or ending in a single `/`).
/// Only a bare `..` is treated specially; `.`, `~` and embedded `..`
/// segments pass through literally.
pub fn resolve(current_dir: &str, target: &str) -> String {
    if target == ".." {
        return parent_of(current_dir);
    }

    let joined = if target.starts_with('/') {
        if target == "/" {
            return "/".to_string();
        }
        target.to_string()
    } else {
        format!("{}/{}", current_dir.trim_end_matches('/'), target)
    };

    with_trailing_slash(joined.trim_end_matches('/'))
}

/// Drop the last segment of a normalized directory path.
fn parent_of(current_dir: &str) -> String {
    if current_dir == "/" {
        return current_dir.to_string();
    }
    let segments: Vec<&str> = current_dir.split('/').filter(|s| !s.is_empty()).collect();
    match segments.split_last() {
        Some((_, rest)) if !rest.is_empty() => format!("/{}/", rest.join("/")),
        _ => "/".to_string(),
    }
}

fn with_trailing_slash(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        format!("{}/", path)
    }
}

/// Store key for a resolved directory path: trailing `/` stripped, root stays `/`.
pub fn store_key(resolved: &str) -> &str {
    let trimmed = resolved.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Full path of a file argument relative to `current_dir`.
///
/// Backslashes are normalized to `/` and a leading `/` is enforced. An
/// absolute argument replaces the current directory.
pub fn join_file_path(current_dir: &str, arg: &str) -> String {
    let arg = arg.replace('\\', "/");
    let joined = if arg.starts_with('/') {
        arg
    } else if current_dir.ends_with('/') {
        format!("{}{}", current_dir, arg)
    } else {
        format!("{}/{}", current_dir, arg)
    };
    if joined.starts_with('/') {
        joined
    } else {
        format!("/{}", joined)
    }
}
