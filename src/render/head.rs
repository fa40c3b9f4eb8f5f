//! `<head>` generation: title, description and social sharing tags.
//!
//! Pages without a metadata entry fall back to their own title and the
//! site description; social tags are simply omitted. Absent fields never
//! fail a render.

use super::markup::{XmlWriter, write_empty_elem, write_elem, write_text_element};
use crate::config::SiteConfig;
use crate::data::PageMetadata;
use anyhow::Result;

/// Head inputs for one page.
pub struct HeadProps<'a> {
    /// Fallback title when the metadata record has none.
    pub title: &'a str,
    /// Fallback description; `None` falls through to the site description.
    pub description: Option<&'a str>,
    pub metadata: Option<&'a PageMetadata>,
}

/// Write the full `<head>` element.
pub fn write_head(writer: &mut XmlWriter, config: &SiteConfig, props: &HeadProps) -> Result<()> {
    write_elem(writer, "head", &[], |w| {
        write_empty_elem(w, "meta", &[("charset", "utf-8")])?;
        write_empty_elem(
            w,
            "meta",
            &[
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1"),
            ],
        )?;

        let title = props
            .metadata
            .and_then(|m| m.title.as_deref())
            .unwrap_or(props.title);
        if !title.is_empty() {
            write_text_element(w, "title", title)?;
        }

        let description = props
            .metadata
            .and_then(|m| m.description.as_deref())
            .or(props.description)
            .unwrap_or(&config.base.description);
        if !description.is_empty() {
            write_empty_elem(
                w,
                "meta",
                &[("name", "description"), ("content", description)],
            )?;
        }

        if let Some(metadata) = props.metadata {
            write_social_tags(w, config, metadata)?;
        }

        for style in &config.build.styles {
            write_empty_elem(w, "link", &[("rel", "stylesheet"), ("href", style.as_str())])?;
        }

        Ok(())
    })
}

/// Write Open Graph tags for the fields that are present.
fn write_social_tags(
    writer: &mut XmlWriter,
    config: &SiteConfig,
    metadata: &PageMetadata,
) -> Result<()> {
    if let Some(title) = metadata.og_title.as_deref() {
        write_property(writer, "og:title", title)?;
    }
    if let Some(description) = metadata.og_desc.as_deref() {
        write_property(writer, "og:description", description)?;
    }
    if let Some(url) = metadata.og_url.as_deref() {
        write_property(writer, "og:url", url)?;
    }

    if let Some(image) = &metadata.og_image {
        write_property(writer, "og:image", &social_image_url(config, &image.src))?;
        if let Some(width) = image.width {
            write_property(writer, "og:image:width", &width.to_string())?;
        }
        if let Some(height) = image.height {
            write_property(writer, "og:image:height", &height.to_string())?;
        }
        if let Some(mime_type) = image.mime_type.as_deref() {
            write_property(writer, "og:image:type", mime_type)?;
        }
    }

    Ok(())
}

fn write_property(writer: &mut XmlWriter, property: &str, content: &str) -> Result<()> {
    write_empty_elem(
        writer,
        "meta",
        &[("property", property), ("content", content)],
    )
}

/// Make a social image URL absolute using the site base URL.
fn social_image_url(config: &SiteConfig, src: &str) -> String {
    if src.starts_with("http") {
        return src.to_owned();
    }
    match &config.base.url {
        Some(base) => format!("{}{src}", base.trim_end_matches('/')),
        None => src.to_owned(),
    }
}
