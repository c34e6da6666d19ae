//! Unix-style path handling
//!
//! These functions never fail: any input produces an absolute, normalized
//! path. Whether that path exists is a separate question for the map.

/// Normalize `path` into an absolute path.
///
/// Repeated separators collapse, `.` segments vanish and `..` removes the
/// previous segment. `..` at the root stays at the root. Relative input is
/// treated as relative to `/`.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }
    join(&segments)
}

/// Resolve `path` against `current`; absolute paths ignore `current`.
pub fn resolve(current: &str, path: &str) -> String {
    if path.starts_with('/') {
        normalize(path)
    } else {
        normalize(&format!("{current}/{path}"))
    }
}

/// Normalized path of the containing directory; the parent of `/` is `/`.
pub fn parent(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => normalized[..idx].to_string(),
    }
}

/// Last segment of the normalized path; empty for the root.
pub fn base_name(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind('/') {
        Some(idx) => normalized[idx + 1..].to_string(),
        None => normalized,
    }
}

/// Number of segments below the root: `/` is 0, `/a/b` is 2.
pub fn depth(path: &str) -> usize {
    path.split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .count()
}

/// Join a child name onto a normalized directory path.
pub fn join_child(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{name}")
    } else {
        format!("{dir}/{name}")
    }
}

fn join(segments: &[&str]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let mut out = String::with_capacity(segments.iter().map(|s| s.len() + 1).sum());
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize("//a//b/../c/"), "/a/c");
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("///"), "/");
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/./a/./b/."), "/a/b");
        assert_eq!(normalize("a/b"), "/a/b");
    }

    #[test]
    fn test_normalize_never_escapes_root() {
        assert_eq!(normalize("/.."), "/");
        assert_eq!(normalize("/../../etc"), "/etc");
        assert_eq!(normalize("/a/../../b"), "/b");
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(resolve("/home/user", "docs"), "/home/user/docs");
        assert_eq!(resolve("/home/user", "./docs/../music"), "/home/user/music");
        assert_eq!(resolve("/home/user", ".."), "/home");
        assert_eq!(resolve("/home/user", "../../.."), "/");
        assert_eq!(resolve("/home/user", "."), "/home/user");
        assert_eq!(resolve("/home/user", ""), "/home/user");
        assert_eq!(resolve("/", "etc"), "/etc");
    }

    #[test]
    fn test_resolve_absolute_ignores_current() {
        assert_eq!(resolve("/home/user", "/etc//init.d"), "/etc/init.d");
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent("/"), "/");
        assert_eq!(parent("/etc"), "/");
        assert_eq!(parent("/etc/init.d/"), "/etc");
        assert_eq!(parent("/a/b/../c"), "/a");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("/"), "");
        assert_eq!(base_name("/etc/passwd"), "passwd");
        assert_eq!(base_name("/etc/init.d/"), "init.d");
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth("/"), 0);
        assert_eq!(depth("/a"), 1);
        assert_eq!(depth("/a/b/c.txt"), 3);
    }

    #[test]
    fn test_join_child() {
        assert_eq!(join_child("/", "bin"), "/bin");
        assert_eq!(join_child("/usr", "bin"), "/usr/bin");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(path in "[a-c./]{0,24}") {
            let once = normalize(&path);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert!(once.starts_with('/'));
            prop_assert!(once == "/" || !once.ends_with('/'));
            prop_assert!(!once.contains("//"));
        }

        #[test]
        fn prop_parent_is_shallower(path in "(/[a-c]{1,3}){0,6}") {
            let p = parent(&path);
            let normalized = normalize(&path);
            if normalized == "/" {
                prop_assert_eq!(p, "/");
            } else {
                prop_assert_eq!(depth(&p) + 1, depth(&normalized));
            }
        }
    }
}
