//! Section fragments shared by the template persona and the model prompt.

use redpersona_core::{ProfileComment, ProfilePost};

/// Posts and comments each contribute at most this many citation lines.
pub(crate) const CITATIONS_PER_KIND: usize = 3;

/// Subreddits named in the "Most active in" line.
pub(crate) const MOST_ACTIVE_COUNT: usize = 3;

/// `- Interest in r/<sub>` per subreddit.
pub(crate) fn interest_lines(subreddits: &[String]) -> String {
    subreddits
        .iter()
        .map(|sub| format!("- Interest in r/{sub}\n"))
        .collect()
}

/// `r/a, r/b, r/c` from the first [`MOST_ACTIVE_COUNT`] subreddits.
pub(crate) fn most_active(subreddits: &[String]) -> String {
    subreddits
        .iter()
        .take(MOST_ACTIVE_COUNT)
        .map(|sub| format!("r/{sub}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Numbered citations: the first posts, then the first comments, with one
/// contiguous numbering starting at 1.
pub(crate) fn citation_lines(posts: &[ProfilePost], comments: &[ProfileComment]) -> String {
    let posts = posts.iter().take(CITATIONS_PER_KIND).map(|post| {
        format!("Posted in r/{}: \"{}\"", post.subreddit, post.title)
    });
    let comments = comments
        .iter()
        .take(CITATIONS_PER_KIND)
        .map(|comment| format!("Commented in r/{}", comment.subreddit));

    posts
        .chain(comments)
        .enumerate()
        .map(|(idx, line)| format!("{}. {line}\n", idx + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn most_active_takes_first_three() {
        assert_eq!(
            most_active(&subs(&["a", "b", "c", "d"])),
            "r/a, r/b, r/c"
        );
        assert_eq!(most_active(&subs(&["a"])), "r/a");
        assert_eq!(most_active(&[]), "");
    }

    #[test]
    fn citations_number_comments_after_shown_posts() {
        let posts: Vec<ProfilePost> = (0..5)
            .map(|i| ProfilePost::new(&i.to_string(), "rust", &format!("post {i}"), ""))
            .collect();
        let comments = vec![ProfileComment::new("c", "linux", "hi")];
        let lines = citation_lines(&posts, &comments);
        let lines: Vec<&str> = lines.lines().collect();
        assert_eq!(
            lines,
            vec![
                "1. Posted in r/rust: \"post 0\"",
                "2. Posted in r/rust: \"post 1\"",
                "3. Posted in r/rust: \"post 2\"",
                "4. Commented in r/linux",
            ]
        );
    }

    #[test]
    fn citations_with_no_posts_start_comments_at_one() {
        let comments = vec![
            ProfileComment::new("c1", "a", ""),
            ProfileComment::new("c2", "b", ""),
        ];
        assert_eq!(
            citation_lines(&[], &comments),
            "1. Commented in r/a\n2. Commented in r/b\n"
        );
    }
}
