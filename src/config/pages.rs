//! Page copy configuration: the destination index and the accommodations
//! listing. All user-facing text on those pages comes from here, so the
//! generator itself stays language-neutral.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// One fact tag on the destination index (icon + label + value).
///
/// # Example
/// ```toml
/// [[destination.facts]]
/// icon = "thermostat"
/// title = "Beste reistijd"
/// value = "April - Oktober"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactTag {
    pub icon: String,
    pub title: String,
    pub value: String,
}

/// `[destination]` section - the destination index page.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct DestinationConfig {
    /// Destination name shown as the page title (e.g. "Indonesië").
    pub name: String,

    /// Route of the index page, with leading slash.
    #[serde(default = "defaults::destination::path")]
    #[educe(Default = defaults::destination::path())]
    pub path: String,

    /// Subtitle under the hero title.
    #[serde(default)]
    pub subtitle: String,

    /// Site-absolute hero image path.
    #[serde(default)]
    pub hero: Option<String>,

    /// Alt text for the hero image.
    #[serde(default)]
    pub hero_alt: String,

    /// Heading of the intro section.
    #[serde(default)]
    pub intro_title: String,

    /// Intro paragraphs.
    #[serde(default)]
    pub intro: Vec<String>,

    /// Heading prefix of each per-destination blog list; the destination
    /// name is appended (e.g. "Blogs over Bali").
    #[serde(default = "defaults::destination::list_title")]
    #[educe(Default = defaults::destination::list_title())]
    pub list_title: String,

    /// Fact tags rendered above the intro.
    #[serde(default)]
    pub facts: Vec<FactTag>,
}

/// `[accommodations]` section - the accommodations listing page.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct AccommodationsConfig {
    /// Route of the listing page, with leading slash.
    #[serde(default = "defaults::accommodations::path")]
    #[educe(Default = defaults::accommodations::path())]
    pub path: String,

    /// Hero title.
    #[serde(default = "defaults::accommodations::title")]
    #[educe(Default = defaults::accommodations::title())]
    pub title: String,

    /// Site-absolute hero image path.
    #[serde(default)]
    pub hero: Option<String>,

    /// Alt text for the hero image.
    #[serde(default)]
    pub hero_alt: String,

    /// Heading of the intro section.
    #[serde(default)]
    pub intro_title: String,

    /// Intro paragraphs.
    #[serde(default)]
    pub intro: Vec<String>,

    /// Label of the outbound booking link on each card.
    #[serde(default)]
    pub link_label: String,
}
