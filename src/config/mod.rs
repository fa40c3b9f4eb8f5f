//! Site configuration management for `travelog.toml`.
//!
//! # Sections
//!
//! | Section            | Purpose                                       |
//! |--------------------|-----------------------------------------------|
//! | `[base]`           | Site metadata (title, author, url)            |
//! | `[api]`            | Content delivery API (url, token, type)       |
//! | `[build]`          | Paths, minify, render viewport                |
//! | `[destination]`    | Destination index page copy                   |
//! | `[accommodations]` | Accommodations listing page copy              |
//! | `[serve]`          | Development server (interface, port)          |
//! | `[extra]`          | User-defined custom fields                    |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "Reisfeeld"
//! description = "Travel stories and tips"
//! url = "https://www.reisfeeld.nl"
//!
//! [api]
//! url = "https://cdn.contentful.com/spaces/abc123/environments/master"
//!
//! [destination]
//! name = "Indonesië"
//! path = "/indonesie"
//!
//! [serve]
//! port = 4280
//! ```

mod api;
mod base;
mod build;
pub mod defaults;
mod error;
mod pages;
mod serve;

// Re-export public types used by other modules
pub use api::ApiConfig;
pub use base::BaseConfig;
pub use build::BuildConfig;
pub use pages::{AccommodationsConfig, DestinationConfig, FactTag};
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use error::ConfigError;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing travelog.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Content delivery API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,

    /// Destination index page
    #[serde(default)]
    pub destination: DestinationConfig,

    /// Accommodations listing page
    #[serde(default)]
    pub accommodations: AccommodationsConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf());
    }

    /// Apply CLI arguments on top of the loaded configuration.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        // Determine the final root path based on command
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                let base = cli
                    .root
                    .as_ref()
                    .cloned()
                    .unwrap_or_else(|| self.get_root().to_owned());
                base.join(name)
            }
            _ => cli
                .root
                .as_ref()
                .cloned()
                .unwrap_or_else(|| self.get_root().to_owned()),
        };

        self.set_root(&root);
        self.update_path_with_root(cli, &root);

        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Init { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &crate::cli::BuildArgs) {
        if args.clean {
            self.build.clean = true;
        }
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.viewport, args.viewport.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Update all paths relative to root directory and normalize to absolute paths
    fn update_path_with_root(&mut self, cli: &Cli, root: &Path) {
        // Apply CLI overrides first
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        Self::update_option(&mut self.build.data, cli.data.as_ref());
        Self::update_option(&mut self.build.assets, cli.assets.as_ref());

        // Normalize root to absolute path
        let root = Self::normalize_path(root);
        self.set_root(&root);

        // Normalize config path
        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Normalize all directory paths
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.build.data = Self::normalize_path(&root.join(&self.build.data));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for the current command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if self.api.url.is_empty() {
            bail!(ConfigError::Validation("[api].url must be set".into()));
        }
        if !self.api.url.starts_with("http") {
            bail!(ConfigError::Validation(
                "[api].url must start with http:// or https://".into()
            ));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base].url must start with http:// or https://".into()
            ));
        }

        for (field, path) in [
            ("[destination].path", &self.destination.path),
            ("[accommodations].path", &self.accommodations.path),
        ] {
            if !path.starts_with('/') {
                bail!(ConfigError::Validation(format!(
                    "{field} must start with `/`"
                )));
            }
        }

        if self.build.viewport == 0 {
            bail!(ConfigError::Validation(
                "[build].viewport must be greater than 0".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "Reisfeeld"
            description = "A travel blog"
            author = "Sanne"
        "#;
        let result = SiteConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base.title, "Reisfeeld");
        assert_eq!(config.base.author, "Sanne");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "Broken"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test site"

            [extra]
            analytics_id = "UA-12345"
            show_footer = true
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("analytics_id").and_then(|v| v.as_str()),
            Some("UA-12345")
        );
        assert_eq!(
            config.extra.get("show_footer").and_then(|v| v.as_bool()),
            Some(true)
        );
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"
            description = "Test"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.base.title, "");
        assert!(config.build.minify);
        assert!(!config.build.clean);
        assert_eq!(config.serve.port, 4280);
        assert_eq!(config.api.content_type, "blog");
    }

    #[test]
    fn test_validate_requires_api_url() {
        let mut config = SiteConfig::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"
        "#,
        )
        .unwrap();

        // Point config_path at an existing file so only [api].url fails
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("travelog.toml");
        std::fs::write(&path, "").unwrap();
        config.config_path = path;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[api].url"));
    }

    #[test]
    fn test_validate_page_paths() {
        let mut config = SiteConfig::from_str(
            r#"
            [base]
            title = "Test"
            description = "Test"

            [api]
            url = "https://cdn.example.com"

            [destination]
            name = "Indonesië"
            path = "indonesie"
        "#,
        )
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("travelog.toml");
        std::fs::write(&path, "").unwrap();
        config.config_path = path;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[destination].path"));
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [base]
            title = "Reisfeeld"
            description = "Travel stories"
            author = "Sanne"
            url = "https://www.reisfeeld.nl"
            language = "nl-NL"
            copyright = "2025 Reisfeeld"

            [api]
            url = "https://cdn.example.com/spaces/abc"
            content_type = "blog"

            [build]
            output = "dist"
            minify = true
            clean = false
            viewport = 1280

            [destination]
            name = "Indonesië"
            path = "/indonesie"

            [accommodations]
            path = "/accommodaties"

            [serve]
            interface = "127.0.0.1"
            port = 3000

            [extra]
            analytics_id = "UA-12345"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "Reisfeeld");
        assert_eq!(config.api.url, "https://cdn.example.com/spaces/abc");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.destination.name, "Indonesië");
        assert_eq!(config.serve.port, 3000);
        assert!(config.extra.contains_key("analytics_id"));
    }
}
