//! `[base]` section configuration.
//!
//! Contains basic site information like title, author, description, etc.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in travelog.toml - basic site metadata.
///
/// # Example
/// ```toml
/// [base]
/// title = "Reisfeeld"
/// description = "Travel stories and tips"
/// author = "Sanne"
/// url = "https://www.reisfeeld.nl"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title displayed in browser tab and headers.
    pub title: String,

    /// Author name for meta tags.
    #[serde(default = "defaults::base::author")]
    #[educe(Default = defaults::base::author())]
    pub author: String,

    /// Site description for SEO meta tags, used when a page has no
    /// metadata entry of its own.
    pub description: String,

    /// Base URL for absolute links in social sharing tags.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// BCP 47 language code (e.g., "nl-NL", "en-US").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,

    /// Copyright notice for site footer.
    #[serde(default)]
    pub copyright: String,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;

    #[test]
    fn test_base_config_full() {
        let config = r#"
            [base]
            title = "Reisfeeld"
            description = "Travel stories"
            url = "https://www.reisfeeld.nl"
            language = "nl-NL"
            copyright = "2025 Reisfeeld"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Reisfeeld");
        assert_eq!(config.base.description, "Travel stories");
        assert_eq!(config.base.url, Some("https://www.reisfeeld.nl".to_string()));
        assert_eq!(config.base.language, "nl-NL");
        assert_eq!(config.base.copyright, "2025 Reisfeeld");
    }

    #[test]
    fn test_base_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.author, "<YOUR_NAME>");
        assert_eq!(config.base.language, "nl-NL");
        assert_eq!(config.base.url, None);
        assert_eq!(config.base.copyright, "");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"
            unknown_field = "should_fail"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);

        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn test_base_config_unicode() {
        let config = r#"
            [base]
            title = "Reisfeeld ✈"
            description = "Onderweg in Indonesië"
            author = "Sanne"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Reisfeeld ✈");
        assert_eq!(config.base.description, "Onderweg in Indonesië");
    }
}
