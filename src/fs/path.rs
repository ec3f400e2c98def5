//! Path utilities
//!
//! Pure string manipulation over `/`-separated paths. Nothing here looks at
//! the tree, so a normalized path may still point to nothing.

/// Normalize a path by dropping empty and `.` segments and resolving `..`.
///
/// Popping past the root is a no-op, so the result is always absolute.
pub fn normalize_path(path: &str) -> String {
    let mut resolved: Vec<&str> = Vec::new();
    for part in path.split('/').filter(|p| !p.is_empty() && *p != ".") {
        if part == ".." {
            resolved.pop();
        } else {
            resolved.push(part);
        }
    }
    if resolved.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", resolved.join("/"))
    }
}

/// Resolve `path` against `base` (an absolute directory) and a home directory.
///
/// - empty input resolves to `base`
/// - `~` and `~/rest` expand to `home`
/// - anything starting with `/` is already absolute
/// - everything else is appended to `base`
pub fn resolve_path(base: &str, home: &str, path: &str) -> String {
    if path.is_empty() {
        return normalize_path(base);
    }
    if path == "~" {
        return normalize_path(home);
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return normalize_path(&format!("{}/{}", home, rest));
    }
    if path.starts_with('/') {
        normalize_path(path)
    } else {
        normalize_path(&format!("{}/{}", base, path))
    }
}

/// Parent of a normalized path. The root is its own parent.
pub fn dirname(path: &str) -> String {
    let normalized = normalize_path(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(pos) => normalized[..pos].to_string(),
    }
}

/// Last segment of a path, or the empty string for the root.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').find(|p| !p.is_empty()).unwrap_or("")
}

/// Join a directory and a single name.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), name)
    }
}

/// Split a normalized path into its segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|p| !p.is_empty())
}

/// Render an absolute path with the home directory collapsed to `~`.
pub fn display_path(path: &str, home: &str) -> String {
    if path == home {
        return "~".to_string();
    }
    match path.strip_prefix(home) {
        Some(rest) if rest.starts_with('/') && home != "/" => format!("~{}", rest),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/foo/bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/bar/"), "/foo/bar");
        assert_eq!(normalize_path("foo/bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/./bar"), "/foo/bar");
        assert_eq!(normalize_path("/foo/../bar"), "/bar");
        assert_eq!(normalize_path("/foo/bar/.."), "/foo");
        assert_eq!(normalize_path("//foo///bar"), "/foo/bar");
    }

    #[test]
    fn test_normalize_never_climbs_above_root() {
        assert_eq!(normalize_path("/../.."), "/");
        assert_eq!(normalize_path("/../../etc"), "/etc");
        assert_eq!(normalize_path("a/../../b"), "/b");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "", "/", ".", "..", "a/b/../c", "/x/./y//z/..", "../../q", "/home/user/",
            "~", "a/./././b", "/.../a",
        ];
        for p in samples {
            let once = normalize_path(p);
            assert_eq!(normalize_path(&once), once, "not idempotent for {:?}", p);
        }
    }

    #[test]
    fn test_resolve_path() {
        let home = "/home/visitor";
        assert_eq!(resolve_path("/tmp", home, ""), "/tmp");
        assert_eq!(resolve_path("/tmp", home, "~"), "/home/visitor");
        assert_eq!(resolve_path("/tmp", home, "~/notes.txt"), "/home/visitor/notes.txt");
        assert_eq!(resolve_path("/tmp", home, "/etc/motd"), "/etc/motd");
        assert_eq!(resolve_path("/tmp", home, "a/../b"), "/tmp/b");
        assert_eq!(resolve_path("/", home, ".."), "/");
        assert_eq!(resolve_path("/tmp", home, "~user"), "/tmp/~user");
    }

    #[test]
    fn test_dirname_and_basename() {
        assert_eq!(dirname("/"), "/");
        assert_eq!(dirname("/foo"), "/");
        assert_eq!(dirname("/foo/bar"), "/foo");
        assert_eq!(basename("/foo/bar"), "bar");
        assert_eq!(basename("/foo/bar/"), "bar");
        assert_eq!(basename("/"), "");
        assert_eq!(basename("file.txt"), "file.txt");
    }

    #[test]
    fn test_display_path() {
        assert_eq!(display_path("/home/visitor", "/home/visitor"), "~");
        assert_eq!(display_path("/home/visitor/src", "/home/visitor"), "~/src");
        assert_eq!(display_path("/home/visitors", "/home/visitor"), "/home/visitors");
        assert_eq!(display_path("/etc", "/home/visitor"), "/etc");
    }
}
