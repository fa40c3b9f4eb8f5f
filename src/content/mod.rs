//! Blog content: provider records, the delivery API client and the
//! destination grouping applied to fetched entries.

pub mod client;
pub mod group;
pub mod record;

pub use client::{ApiError, ContentClient};
pub use group::{DestinationKey, GroupedPosts, group_posts};
pub use record::{BlogPost, BodySection, ImageRef};
