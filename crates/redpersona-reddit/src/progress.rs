//! Progress reporting while listings are paged in.

/// Which listing a progress update refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Posts,
    Comments,
}

impl std::fmt::Display for ListingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingKind::Posts => write!(f, "Posts"),
            ListingKind::Comments => write!(f, "Comments"),
        }
    }
}

/// Observer for fetch progress. One bounded counter per [`ListingKind`].
pub trait FetchProgress: Send {
    /// Called after each page with the running total for `kind`.
    fn advance(&mut self, kind: ListingKind, fetched: usize, limit: usize);

    /// Called once when `kind` has finished paging, successfully or not.
    fn finish(&mut self, _kind: ListingKind) {}
}

/// Discards all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl FetchProgress for NoProgress {
    fn advance(&mut self, _kind: ListingKind, _fetched: usize, _limit: usize) {}
}
