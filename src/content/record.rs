//! Blog entry records and the provider's JSON envelope.
//!
//! The delivery API wraps every entry and every linked asset in a `fields`
//! object, and image URLs arrive protocol-relative (`//images…`). The raw
//! envelope types below mirror that wire shape; [`BlogPost`] is the
//! flattened form the rest of the pipeline works with.

use crate::utils::slug::slugify;
use serde::Deserialize;

/// An image reference: resolved URL plus alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
    pub alt: String,
}

/// One body section of a blog entry: optional image, heading, running text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodySection {
    pub image: Option<ImageRef>,
    pub heading: String,
    pub text: String,
}

/// A single fetched blog entry, flattened out of the provider envelope.
///
/// Immutable once constructed; the build pass owns the full list and hands
/// out references to the render layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    /// Destination this entry belongs to. `None` or empty means the entry
    /// was published without one; grouping keeps such entries (see
    /// [`crate::content::group::group_posts`]).
    pub location: Option<String>,
    pub title: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    /// Publication date as an ISO 8601 string, as delivered.
    pub date: Option<String>,
    /// Provider-supplied path segment for the entry page.
    pub slug: Option<String>,
    pub cover: Option<ImageRef>,
    /// Section headings, in document order.
    pub headers: Vec<String>,
    pub sections: Vec<BodySection>,
    pub gallery: Vec<ImageRef>,
    pub featured: bool,
    pub carousel: bool,
}

impl BlogPost {
    /// Path segment for this entry's page: the provider slug, or a slug
    /// derived from the title when none was supplied.
    pub fn route_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => slug.trim_matches('/').to_owned(),
            _ => slugify(&self.title),
        }
    }
}

// ============================================================================
// Wire Envelope
// ============================================================================

/// Top-level response of the entries query.
#[derive(Debug, Deserialize)]
pub struct EntryCollection {
    #[serde(default)]
    pub items: Vec<Entry>,
}

/// One entry in the collection.
#[derive(Debug, Deserialize)]
pub struct Entry {
    pub fields: PostFields,
}

/// The `fields` object of a blog entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFields {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_title: Option<String>,
    #[serde(default)]
    pub meta_desc: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub cover_image: Option<ImageLink>,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub content: Vec<SectionLink>,
    #[serde(default)]
    pub images: Vec<ImageLink>,
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub carousel: Option<bool>,
}

/// A linked image asset (`{ fields: { title, file: { url } } }`).
#[derive(Debug, Deserialize)]
pub struct ImageLink {
    pub fields: ImageFields,
}

#[derive(Debug, Deserialize)]
pub struct ImageFields {
    #[serde(default)]
    pub title: String,
    pub file: FileRef,
}

#[derive(Debug, Deserialize)]
pub struct FileRef {
    pub url: String,
}

/// A linked body section (`{ fields: { image?, section, text } }`).
#[derive(Debug, Deserialize)]
pub struct SectionLink {
    pub fields: SectionFields,
}

#[derive(Debug, Deserialize)]
pub struct SectionFields {
    #[serde(default)]
    pub image: Option<ImageLink>,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Flattening
// ============================================================================

/// Complete a protocol-relative asset URL with `https:`.
fn complete_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_owned()
    }
}

impl From<ImageLink> for ImageRef {
    fn from(link: ImageLink) -> Self {
        Self {
            url: complete_url(&link.fields.file.url),
            alt: link.fields.title,
        }
    }
}

impl From<Entry> for BlogPost {
    fn from(entry: Entry) -> Self {
        let fields = entry.fields;
        Self {
            location: fields.location,
            title: fields.title,
            meta_title: fields.meta_title,
            meta_description: fields.meta_desc,
            date: fields.date,
            slug: fields.href,
            cover: fields.cover_image.map(ImageRef::from),
            headers: fields.headers,
            sections: fields
                .content
                .into_iter()
                .map(|section| BodySection {
                    image: section.fields.image.map(ImageRef::from),
                    heading: section.fields.section,
                    text: section.fields.text,
                })
                .collect(),
            gallery: fields.images.into_iter().map(ImageRef::from).collect(),
            featured: fields.featured.is_some_and(|s| !s.is_empty()),
            carousel: fields.carousel.unwrap_or(false),
        }
    }
}

/// Decode a full entries response into flattened posts, preserving the
/// provider's order.
pub fn parse_collection(json: &str) -> Result<Vec<BlogPost>, serde_json::Error> {
    let collection: EntryCollection = serde_json::from_str(json)?;
    Ok(collection.items.into_iter().map(BlogPost::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRY: &str = r#"{
        "items": [
            {
                "fields": {
                    "location": "Bali",
                    "title": "Three days in Ubud",
                    "metaTitle": "Ubud travel guide",
                    "metaDesc": "What to do in Ubud",
                    "date": "2024-03-02",
                    "href": "three-days-in-ubud",
                    "coverImage": {
                        "fields": {
                            "title": "Rice terraces",
                            "file": { "url": "//images.example.net/ubud.jpg" }
                        }
                    },
                    "headers": ["Getting there", "Where to eat"],
                    "content": [
                        {
                            "fields": {
                                "image": {
                                    "fields": {
                                        "title": "Scooter ride",
                                        "file": { "url": "https://images.example.net/scooter.jpg" }
                                    }
                                },
                                "section": "Getting there",
                                "text": "Rent a scooter at the airport."
                            }
                        }
                    ],
                    "images": [],
                    "featured": "home",
                    "carousel": true
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_full_entry() {
        let posts = parse_collection(ENTRY).unwrap();
        assert_eq!(posts.len(), 1);

        let post = &posts[0];
        assert_eq!(post.location.as_deref(), Some("Bali"));
        assert_eq!(post.title, "Three days in Ubud");
        assert_eq!(post.meta_title.as_deref(), Some("Ubud travel guide"));
        assert_eq!(post.date.as_deref(), Some("2024-03-02"));
        assert_eq!(post.slug.as_deref(), Some("three-days-in-ubud"));
        assert!(post.featured);
        assert!(post.carousel);
    }

    #[test]
    fn test_protocol_relative_url_completed() {
        let posts = parse_collection(ENTRY).unwrap();
        let cover = posts[0].cover.as_ref().unwrap();
        assert_eq!(cover.url, "https://images.example.net/ubud.jpg");
        assert_eq!(cover.alt, "Rice terraces");
    }

    #[test]
    fn test_absolute_url_untouched() {
        let posts = parse_collection(ENTRY).unwrap();
        let section = &posts[0].sections[0];
        assert_eq!(
            section.image.as_ref().unwrap().url,
            "https://images.example.net/scooter.jpg"
        );
        assert_eq!(section.heading, "Getting there");
        assert_eq!(section.text, "Rent a scooter at the airport.");
    }

    #[test]
    fn test_minimal_entry() {
        let json = r#"{"items": [{"fields": {"title": "Untitled trip"}}]}"#;
        let posts = parse_collection(json).unwrap();

        let post = &posts[0];
        assert_eq!(post.title, "Untitled trip");
        assert_eq!(post.location, None);
        assert_eq!(post.cover, None);
        assert!(post.sections.is_empty());
        assert!(!post.featured);
        assert!(!post.carousel);
    }

    #[test]
    fn test_empty_collection() {
        let posts = parse_collection(r#"{"items": []}"#).unwrap();
        assert!(posts.is_empty());

        // The items key itself may be absent
        let posts = parse_collection("{}").unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let json = r#"{"items": [
            {"fields": {"title": "Newest"}},
            {"fields": {"title": "Middle"}},
            {"fields": {"title": "Oldest"}}
        ]}"#;
        let posts = parse_collection(json).unwrap();
        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test]
    fn test_route_slug_prefers_provider_slug() {
        let json = r#"{"items": [{"fields": {"title": "Three Days", "href": "three-days"}}]}"#;
        let posts = parse_collection(json).unwrap();
        assert_eq!(posts[0].route_slug(), "three-days");
    }

    #[test]
    fn test_route_slug_falls_back_to_title() {
        let json = r#"{"items": [{"fields": {"title": "Nusa Penida"}}]}"#;
        let posts = parse_collection(json).unwrap();
        assert_eq!(posts[0].route_slug(), "nusa-penida");
    }

    #[test]
    fn test_featured_empty_string_is_not_featured() {
        let json = r#"{"items": [{"fields": {"title": "T", "featured": ""}}]}"#;
        let posts = parse_collection(json).unwrap();
        assert!(!posts[0].featured);
    }
}
