//! `[build]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in travelog.toml - output paths and rendering knobs.
///
/// # Example
/// ```toml
/// [build]
/// output = "public"
/// data = "data"
/// assets = "assets"
/// minify = true
/// viewport = 1440
/// styles = ["/assets/styles/main.css"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root (set from the CLI, not the config file).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Output directory for generated pages.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Directory holding the JSON data files.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Directory of static assets, copied into the output as-is.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: PathBuf,

    /// Minify generated HTML.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// Clear the output directory before building.
    #[serde(default = "defaults::r#false")]
    pub clean: bool,

    /// Viewport width (CSS pixels) pages are rendered for.
    #[serde(default = "defaults::build::viewport")]
    #[educe(Default = defaults::build::viewport())]
    pub viewport: u32,

    /// Site-absolute stylesheet hrefs linked from every page head.
    #[serde(default)]
    pub styles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_build_config_defaults() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.data, PathBuf::from("data"));
        assert_eq!(config.build.assets, PathBuf::from("assets"));
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert_eq!(config.build.viewport, 1440);
        assert!(config.build.styles.is_empty());
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [build]
            output = "dist"
            minify = false
            viewport = 390
            styles = ["/assets/styles/main.css"]
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert!(!config.build.minify);
        assert_eq!(config.build.viewport, 390);
        assert_eq!(config.build.styles, vec!["/assets/styles/main.css"]);
    }
}
