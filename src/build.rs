//! Site building orchestration.
//!
//! # Pipeline
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()      clear/create the output directory
//!     ├── load data stores      meta_data.json + accommodations.json
//!     ├── assemble_site()       one API query, grouping, metadata lookups
//!     ├── render_pages()        every route in parallel, minified
//!     └── copy_assets()         assets tree copied verbatim
//! ```
//!
//! The assembled [`Site`] is returned so the dev server can re-render pages
//! without fetching again.

use crate::assemble::{Site, assemble_site};
use crate::config::SiteConfig;
use crate::content::ContentClient;
use crate::data::{ACCOMMODATIONS_FILE, AccommodationIndex, METADATA_FILE, MetadataStore};
use crate::log;
use crate::render::{RenderContext, render_route};
use crate::responsive::Viewport;
use crate::utils::minify::minify_page;
use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Build the entire site.
pub fn build_site(config: &SiteConfig) -> Result<Site> {
    prepare_output(&config.build.output, config.build.clean)?;

    let data_dir = &config.build.data;
    let metadata = MetadataStore::load(&data_dir.join(METADATA_FILE))?;
    let accommodations = AccommodationIndex::load(&data_dir.join(ACCOMMODATIONS_FILE))?;

    log!(
        "fetch";
        "querying `{}` entries from {}",
        config.api.content_type,
        config.api.url
    );
    let client = ContentClient::from_config(&config.api)?;
    let site = assemble_site(
        &client,
        &metadata,
        accommodations,
        &config.destination.path,
        &config.accommodations.path,
    )?;
    log!(
        "assemble";
        "{} entries across {} destinations",
        site.overview.grouped.post_count(),
        site.overview.grouped.len()
    );

    let viewport = Viewport::new(config.build.viewport);
    render_pages(&site, config, &viewport)?;
    copy_assets(config)?;

    log!("build"; "done");
    Ok(site)
}

/// Render every page of the site for the viewport's classification.
pub fn render_pages(site: &Site, config: &SiteConfig, viewport: &Viewport) -> Result<()> {
    let ctx = RenderContext::new(config, viewport.screen_class());
    let routes = site.routes();

    routes.par_iter().try_for_each(|route| {
        let html = render_route(site, route, &ctx)
            .ok_or_else(|| anyhow!("No page registered for route {route}"))??;
        write_page(&config.build.output, route, &html, config.build.minify)
    })?;

    log!(
        "render";
        "{} pages at {}px ({})",
        routes.len(),
        viewport.width(),
        viewport.screen_class().name()
    );
    Ok(())
}

/// Write one rendered page as `<route>/index.html` under the output root.
fn write_page(output: &Path, route: &str, html: &[u8], minify: bool) -> Result<()> {
    let dir = output.join(route.trim_start_matches('/'));
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join("index.html");
    let bytes = minify_page(html, minify);
    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Copy the assets tree into `<output>/assets`, keeping relative paths.
fn copy_assets(config: &SiteConfig) -> Result<()> {
    let assets = &config.build.assets;
    if !assets.is_dir() {
        return Ok(());
    }

    let dest_root = config.build.output.join("assets");
    let mut count = 0usize;

    for entry in WalkDir::new(assets).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(assets)
            .with_context(|| format!("File is not in assets directory: {}", entry.path().display()))?;
        let dest = dest_root.join(relative);

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::copy(entry.path(), &dest)
            .with_context(|| format!("Failed to copy {}", entry.path().display()))?;
        count += 1;
    }

    if count > 0 {
        log!("assets"; "copied {count} files");
    }
    Ok(())
}

/// Ensure the output directory exists, optionally clearing it first.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clear output directory: {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    Ok(())
}
