//! URL normalization for route comparison.
//!
//! Normalized URLs are comparison keys only; they are computed on demand and
//! never persisted. Normalization is deliberately lossy: query strings and
//! fragments are dropped, so two calls differing only in query parameters
//! collapse to the same key. That is an accepted limitation of the audit.

/// Canonicalizes a URL string for comparison.
///
/// Steps, in order: strip scheme and host, strip the query string, strip the
/// fragment, collapse repeated slashes, strip one trailing slash (unless the
/// whole path is `/`). Idempotent: normalizing an already-normalized value
/// returns it unchanged.
///
/// Non-URL inputs (e.g. raw environment-variable matches) pass through mostly
/// untouched and simply never collide with real route keys.
pub fn normalize_url(raw: &str) -> String {
    let mut s = raw;

    // Strip scheme + host ("http://host/p" and protocol-relative "//host/p").
    // A "://" appearing after a path, query, or fragment delimiter belongs to
    // the data (e.g. a redirect URL in a query parameter), not to a scheme.
    let scheme = s
        .find("://")
        .filter(|&idx| !s[..idx].contains(['/', '?', '#']));
    if let Some(idx) = scheme {
        let rest = &s[idx + 3..];
        s = match rest.find('/') {
            Some(slash) => &rest[slash..],
            None => "/",
        };
    } else if let Some(rest) = s.strip_prefix("//") {
        s = match rest.find('/') {
            Some(slash) => &rest[slash..],
            None => "/",
        };
    }

    // Strip query string and fragment
    let end = s.find(['?', '#']).unwrap_or(s.len());
    let s = &s[..end];

    // Collapse repeated slashes
    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }

    // Strip one trailing slash unless the whole path is "/"
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_scheme_and_host() {
        assert_eq!(normalize_url("http://localhost:5000/api/v1/anime"), "/api/v1/anime");
        assert_eq!(normalize_url("https://example.com/api/v1/users"), "/api/v1/users");
    }

    #[test]
    fn test_strips_protocol_relative_host() {
        assert_eq!(normalize_url("//cdn.example.com/api/v1/anime"), "/api/v1/anime");
    }

    #[test]
    fn test_host_without_path_becomes_root() {
        assert_eq!(normalize_url("http://localhost:5000"), "/");
        assert_eq!(normalize_url("//example.com"), "/");
    }

    #[test]
    fn test_strips_query_and_fragment() {
        assert_eq!(normalize_url("/api/v1/anime?page=2&limit=10"), "/api/v1/anime");
        assert_eq!(normalize_url("/api/v1/anime#section"), "/api/v1/anime");
        assert_eq!(normalize_url("/api/v1/anime?page=2#top"), "/api/v1/anime");
    }

    #[test]
    fn test_scheme_inside_query_is_not_stripped_as_host() {
        assert_eq!(
            normalize_url("/api/v1/track?next=https://cdn.example.com/img"),
            "/api/v1/track"
        );
        assert_eq!(
            normalize_url("/api/v1/share#https://example.com/page"),
            "/api/v1/share"
        );
    }

    #[test]
    fn test_collapses_repeated_slashes() {
        assert_eq!(normalize_url("/api//v1///anime"), "/api/v1/anime");
    }

    #[test]
    fn test_strips_one_trailing_slash() {
        assert_eq!(normalize_url("/api/v1/anime/"), "/api/v1/anime");
        assert_eq!(normalize_url("/"), "/");
    }

    #[test]
    fn test_host_and_plain_path_share_a_key() {
        assert_eq!(
            normalize_url("http://host/api/v1/anime/"),
            normalize_url("/api/v1/anime")
        );
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "http://localhost:5000/api/v1/anime?sort=asc",
            "/api/v1/track?next=https://cdn.example.com/img",
            "//host/api//v1/episodes/",
            "/api/v1/studios",
            "/",
            "",
            "REACT_APP_API_URL",
            "relative/path",
        ];
        for input in inputs {
            let once = normalize_url(input);
            assert_eq!(normalize_url(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_non_url_text_passes_through() {
        assert_eq!(normalize_url("REACT_APP_API_URL"), "REACT_APP_API_URL");
        assert_eq!(normalize_url("relative/path"), "relative/path");
    }
}
