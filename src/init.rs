//! Site initialization module.
//!
//! Creates new site structure with default configuration and empty data
//! skeletons.

use crate::{config::SiteConfig, data, log};
use anyhow::{Context, Result, bail};
use serde_json::json;
use std::{fs, path::Path};

/// Default config filename
const CONFIG_FILE: &str = "travelog.toml";

/// Default site directory structure
const SITE_DIRS: &[&str] = &[
    "data",
    "assets/header",
    "assets/images",
    "assets/styles",
];

/// Create a new site with default structure
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    init_site_structure(root)?;
    init_default_config(root)?;
    init_data_skeletons(root)?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

/// Create site directory structure
fn init_site_structure(root: &Path) -> Result<()> {
    for dir in SITE_DIRS {
        let path = root.join(dir);
        if path.exists() {
            bail!(
                "Path `{}` already exists. Try `travelog init <SITE_NAME>` instead.",
                path.display()
            );
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    Ok(())
}

/// Write default configuration file
fn init_default_config(root: &Path) -> Result<()> {
    let content = toml::to_string_pretty(&SiteConfig::default())?;
    fs::write(root.join(CONFIG_FILE), content)?;
    Ok(())
}

/// Write empty data store skeletons
fn init_data_skeletons(root: &Path) -> Result<()> {
    let metadata = json!({
        "/": {
            "title": "",
            "description": ""
        }
    });
    fs::write(
        root.join("data").join(data::METADATA_FILE),
        serde_json::to_string_pretty(&metadata)?,
    )?;

    let accommodations = json!({ "accommodations": {} });
    fs::write(
        root.join("data").join(data::ACCOMMODATIONS_FILE),
        serde_json::to_string_pretty(&accommodations)?,
    )?;

    Ok(())
}
