//! Defines the [`Post`] type. Posts are owned by the host site builder;
//! the expander only reads them, orders them, and drops references to
//! them into page payloads.

use chrono::NaiveDate;
use std::cmp::Ordering;
use url::Url;

/// A reference to a single post: the minimal view the expander needs to
/// list a post on a category page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    /// The post's identifier (typically the source file stem).
    pub id: String,

    /// The post's display title.
    pub title: String,

    /// The post's publication date.
    pub date: NaiveDate,

    /// The post's public URL, already resolved by the host.
    pub url: Url,
}

impl Ord for Post {
    /// Orders posts by date, then by `id` to break ties, so that a sort
    /// is total and reproducible.
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for Post {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sorts posts ascending and reverses the result, yielding newest-first
/// order for category listings.
pub fn sort_newest_first(posts: &[Post]) -> Vec<Post> {
    let mut sorted = posts.to_vec();
    sorted.sort();
    sorted.reverse();
    sorted
}
