//! Username resolution from a bare handle or a profile URL.

/// Path markers that introduce a username in a Reddit profile URL.
const PROFILE_MARKERS: [&str; 2] = ["reddit.com/user/", "reddit.com/u/"];

/// Resolves a handle from either a bare username or a profile URL.
///
/// `https://www.reddit.com/user/alice/` and `alice` both resolve to `alice`.
/// For URLs only the first path segment after the marker is kept, so
/// `reddit.com/u/alice/comments?sort=new` also resolves to `alice`.
#[must_use]
pub fn resolve_username(input: &str) -> String {
    let input = input.trim();

    let Some(rest) = PROFILE_MARKERS
        .iter()
        .find_map(|marker| input.find(marker).map(|idx| &input[idx + marker.len()..]))
    else {
        return input.to_owned();
    };

    let rest = rest.trim_end_matches('/');
    rest.split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_username_is_returned_unchanged() {
        assert_eq!(resolve_username("alice"), "alice");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(resolve_username("  alice\n"), "alice");
    }

    #[test]
    fn profile_url_with_trailing_slash() {
        assert_eq!(resolve_username("https://reddit.com/user/alice/"), "alice");
    }

    #[test]
    fn profile_url_without_trailing_slash() {
        assert_eq!(resolve_username("https://www.reddit.com/user/alice"), "alice");
    }

    #[test]
    fn short_profile_url() {
        assert_eq!(resolve_username("https://old.reddit.com/u/Bob_42/"), "Bob_42");
    }

    #[test]
    fn profile_url_keeps_only_first_segment() {
        assert_eq!(
            resolve_username("https://reddit.com/user/alice/comments/?sort=new"),
            "alice"
        );
        assert_eq!(resolve_username("reddit.com/user/alice?utm=x"), "alice");
    }

    #[test]
    fn marker_without_username_resolves_to_empty() {
        assert_eq!(resolve_username("https://reddit.com/user/"), "");
    }

    #[test]
    fn non_profile_url_is_treated_as_username() {
        assert_eq!(
            resolve_username("https://example.com/alice"),
            "https://example.com/alice"
        );
    }
}
