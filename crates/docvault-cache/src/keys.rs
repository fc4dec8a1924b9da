//! Cache key builders.

use std::fmt::Display;

/// Key of a cached document.
pub fn document(id: impl Display) -> String {
    format!("doc:{id}")
}

/// Pattern covering every cached listing of `login`.
pub fn listings_pattern(login: &str) -> String {
    format!("docs:{login}:*")
}

/// Match `key` against a glob pattern where `*` matches any run of characters.
pub fn glob_match(pattern: &str, key: &str) -> bool {
    let mut parts = pattern.split('*');
    let Some(first) = parts.next() else {
        return key.is_empty();
    };
    let Some(mut rest) = key.strip_prefix(first) else {
        return false;
    };

    let segments: Vec<&str> = parts.collect();
    let Some((last, middle)) = segments.split_last() else {
        return rest.is_empty();
    };

    for segment in middle {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}
