//! Local structured data: accommodation listings and per-path page
//! metadata, loaded once per build from JSON files in the data directory.

pub mod accommodations;
pub mod metadata;

pub use accommodations::{Accommodation, AccommodationIndex, Picture, PriceRange};
pub use metadata::{MetadataStore, PageMetadata, SocialImage};

/// File name of the per-path page metadata store.
pub const METADATA_FILE: &str = "meta_data.json";

/// File name of the accommodation listings.
pub const ACCOMMODATIONS_FILE: &str = "accommodations.json";
