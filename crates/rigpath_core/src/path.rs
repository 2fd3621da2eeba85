//! Slash-separated binding paths.
//!
//! A binding path names a node relative to its animated root: the root
//! itself is excluded, direct children are addressed by their bare name, and
//! deeper nodes join every ancestor name below the root with `/`.

/// Separator between path segments.
pub const SEPARATOR: char = '/';

/// Builds the path of a child from its parent's path.
///
/// `parent` is `None` for direct children of the animated root.
#[inline]
#[must_use]
pub fn join(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => {
            let mut path = String::with_capacity(parent.len() + 1 + name.len());
            path.push_str(parent);
            path.push(SEPARATOR);
            path.push_str(name);
            path
        }
        None => name.to_owned(),
    }
}

/// Iterates the segments of a path.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR)
}
