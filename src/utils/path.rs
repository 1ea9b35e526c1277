//! Lexical path checks
//!
//! Paths are slash separated and never touch the filesystem.

/// Lexically clean a slash-separated path
///
/// Collapses repeated separators, drops `.` elements, folds `..` into the
/// preceding element and drops `..` directly after a root. An empty result
/// becomes `.`.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut elements: Vec<&str> = Vec::new();

    for element in path.split('/') {
        match element {
            "" | "." => {}
            ".." => match elements.last() {
                Some(&last) if last != ".." => {
                    elements.pop();
                }
                _ if rooted => {}
                _ => elements.push(".."),
            },
            _ => elements.push(element),
        }
    }

    let joined = elements.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Check that a path is usable as a file location
///
/// After cleaning (and stripping a leading `/`), the path must be `.` or a
/// sequence of non-empty elements without `.` or `..`.
pub fn is_valid(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    let cleaned = clean(path);
    let relative = cleaned.strip_prefix('/').unwrap_or(&cleaned);

    if relative == "." {
        return true;
    }

    relative
        .split('/')
        .all(|element| !element.is_empty() && element != "." && element != "..")
}
