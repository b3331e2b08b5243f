/// Normalize the path of an object within a container.
///
/// `path` is the wildcard fragment captured by the HTTP layer (already
/// percent-decoded, possibly empty, possibly missing its leading `/`);
/// `request_path` is the complete request path, consulted only for its
/// trailing slash on root requests.
///
/// The result is either empty or starts with `/`, which is the invariant
/// the router's index-substitution logic relies on.
pub fn normalize(path: &str, request_path: &str) -> String {
    if path.is_empty() && request_path.ends_with('/') {
        "/".to_string()
    } else if path.is_empty() {
        String::new()
    } else if !path.starts_with('/') {
        format!("/{path}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_with_trailing_slash_request_is_root() {
        assert_eq!(normalize("", "/"), "/");
        assert_eq!(normalize("", "/site/"), "/");
    }

    #[test]
    fn empty_path_without_trailing_slash_stays_empty() {
        assert_eq!(normalize("", ""), "");
        assert_eq!(normalize("", "/site"), "");
    }

    #[test]
    fn missing_leading_separator_is_added() {
        assert_eq!(normalize("docs/a.html", "/docs/a.html"), "/docs/a.html");
    }

    #[test]
    fn already_normalized_path_is_unchanged() {
        assert_eq!(normalize("/docs/a.html", "/docs/a.html"), "/docs/a.html");
        assert_eq!(normalize("/docs/", "/docs/"), "/docs/");
    }

    #[test]
    fn non_empty_results_always_start_with_separator() {
        for (path, request) in [("a", "/a"), ("/b", "/b"), ("", "/")] {
            let normalized = normalize(path, request);
            assert!(normalized.is_empty() || normalized.starts_with('/'));
        }
    }
}
