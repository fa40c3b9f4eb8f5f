//! Partitioning fetched entries by destination.
//!
//! The provider returns entries newest-first. The site lists them
//! oldest-first within each destination, so the fetched order is reversed
//! before bucketing. Groups appear in the order their key is first
//! encountered after the reversal, which keeps overview pages stable across
//! builds as long as the provider order is stable.

use super::record::BlogPost;
use std::fmt;

/// Grouping key for a blog entry.
///
/// Entries published without a destination (missing or empty `location`
/// field) are kept and bucketed under [`DestinationKey::Unlabeled`] rather
/// than dropped or rejected. `Unlabeled` displays as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DestinationKey {
    Named(String),
    Unlabeled,
}

impl DestinationKey {
    /// Build a key from an entry's `location` field.
    pub fn from_location(location: Option<&str>) -> Self {
        match location {
            Some(name) if !name.is_empty() => Self::Named(name.to_owned()),
            _ => Self::Unlabeled,
        }
    }

    /// The key as a display string; empty for [`DestinationKey::Unlabeled`].
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::Unlabeled => "",
        }
    }
}

impl fmt::Display for DestinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blog entries partitioned by destination, in key-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedPosts {
    groups: Vec<(DestinationKey, Vec<BlogPost>)>,
}

impl GroupedPosts {
    /// Append a post to its key's group, creating the group on first use.
    fn push(&mut self, key: DestinationKey, post: BlogPost) {
        match self.groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, posts)) => posts.push(post),
            None => self.groups.push((key, vec![post])),
        }
    }

    /// Iterate groups in key-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&DestinationKey, &[BlogPost])> {
        self.groups.iter().map(|(key, posts)| (key, posts.as_slice()))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &DestinationKey> {
        self.groups.iter().map(|(key, _)| key)
    }

    /// Posts for one key.
    pub fn get(&self, key: &DestinationKey) -> Option<&[BlogPost]> {
        self.groups
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, posts)| posts.as_slice())
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of posts across all groups.
    pub fn post_count(&self) -> usize {
        self.groups.iter().map(|(_, posts)| posts.len()).sum()
    }

    /// Iterate all posts in group order.
    pub fn posts(&self) -> impl Iterator<Item = &BlogPost> {
        self.groups.iter().flat_map(|(_, posts)| posts.iter())
    }
}

/// Partition fetched entries by destination.
///
/// Reverses the fetched order first, then buckets each entry under its
/// [`DestinationKey`]. Every input entry lands in exactly one group;
/// duplicates are kept distinct. Entries without a usable `location` are
/// grouped under `Unlabeled` - an inherited behavior of the site, kept
/// deliberately instead of being turned into an error.
pub fn group_posts(mut posts: Vec<BlogPost>) -> GroupedPosts {
    posts.reverse();

    let mut grouped = GroupedPosts::default();
    for post in posts {
        let key = DestinationKey::from_location(post.location.as_deref());
        grouped.push(key, post);
    }
    grouped
}
