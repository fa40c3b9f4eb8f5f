//! Page rendering: pure functions from assembled page models and a screen
//! classification to HTML bytes.
//!
//! Rendering is deterministic: the same page model and the same
//! [`ScreenClass`] always produce identical bytes, so pages can be rendered
//! in parallel at build time and re-rendered on demand by the dev server.

pub mod accommodations;
pub mod head;
pub mod header;
pub mod markup;
pub mod overview;
pub mod post;
pub mod tags;
pub mod typography;

use crate::assemble::{AccommodationsPage, BlogOverviewPage, PageRef, PostPage, Site};
use crate::config::SiteConfig;
use crate::responsive::ScreenClass;
use anyhow::Result;
use head::{HeadProps, write_head};
use header::{HeroProps, write_hero};
use markup::{XmlWriter, into_html, new_writer, write_elem, write_raw, write_text_element};

/// Everything a component needs to render: the screen classification and
/// the site configuration. Content components never mutate it.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub screen: ScreenClass,
    pub config: &'a SiteConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, screen: ScreenClass) -> Self {
        Self { screen, config }
    }
}

/// Render the page registered for a route, if any.
pub fn render_route(site: &Site, route: &str, ctx: &RenderContext) -> Option<Result<Vec<u8>>> {
    site.get(route).map(|page| match page {
        PageRef::Overview(page) => render_overview(ctx, page),
        PageRef::Post(page) => render_post(ctx, page),
        PageRef::Accommodations(page) => render_accommodations(ctx, page),
    })
}

/// Render the destination index.
pub fn render_overview(ctx: &RenderContext, page: &BlogOverviewPage) -> Result<Vec<u8>> {
    let destination = &ctx.config.destination;
    let title = if destination.name.is_empty() {
        ctx.config.base.title.as_str()
    } else {
        destination.name.as_str()
    };

    render_document(
        ctx,
        &HeadProps {
            title,
            description: None,
            metadata: page.metadata.as_ref(),
        },
        |w| {
            write_hero(
                w,
                ctx.screen,
                &HeroProps {
                    image: destination.hero.as_deref(),
                    image_alt: &destination.hero_alt,
                    title,
                    subtitle: Some(destination.subtitle.as_str()),
                    compact: false,
                },
            )?;

            let destinations: Vec<&str> =
                page.grouped.keys().map(|key| key.as_str()).collect();
            overview::write_overview(w, ctx.screen, &destinations, |w| {
                write_elem(w, "section", &[("class", "max-w-[1000px] mx-auto")], |w| {
                    tags::write_fact_tags(w, ctx.screen, &destination.facts)
                })?;
                overview::write_intro(
                    w,
                    ctx.screen,
                    &destination.intro_title,
                    &destination.intro,
                )?;
                overview::write_blog_lists(
                    w,
                    ctx.screen,
                    &page.grouped,
                    &page.route,
                    &destination.list_title,
                )
            })
        },
    )
}

/// Render one blog entry page.
pub fn render_post(ctx: &RenderContext, page: &PostPage) -> Result<Vec<u8>> {
    let entry = &page.post;
    let title = entry.meta_title.as_deref().unwrap_or(&entry.title);

    render_document(
        ctx,
        &HeadProps {
            title,
            description: entry.meta_description.as_deref(),
            metadata: page.metadata.as_ref(),
        },
        |w| {
            write_hero(
                w,
                ctx.screen,
                &HeroProps {
                    image: entry.cover.as_ref().map(|c| c.url.as_str()),
                    image_alt: entry
                        .cover
                        .as_ref()
                        .map(|c| c.alt.as_str())
                        .unwrap_or_default(),
                    title: &entry.title,
                    subtitle: None,
                    compact: false,
                },
            )?;
            write_elem(w, "main", &[], |w| {
                post::write_post_body(w, ctx.screen, entry)
            })
        },
    )
}

/// Render the accommodations listing.
pub fn render_accommodations(ctx: &RenderContext, page: &AccommodationsPage) -> Result<Vec<u8>> {
    let listing = &ctx.config.accommodations;

    render_document(
        ctx,
        &HeadProps {
            title: &listing.title,
            description: None,
            metadata: page.metadata.as_ref(),
        },
        |w| {
            write_hero(
                w,
                ctx.screen,
                &HeroProps {
                    image: listing.hero.as_deref(),
                    image_alt: &listing.hero_alt,
                    title: &listing.title,
                    subtitle: None,
                    compact: true,
                },
            )?;

            let destinations: Vec<&str> = page.index.destinations().collect();
            overview::write_overview(w, ctx.screen, &destinations, |w| {
                overview::write_intro(w, ctx.screen, &listing.intro_title, &listing.intro)?;
                accommodations::write_accommodation_lists(
                    w,
                    ctx.screen,
                    &page.index,
                    &listing.link_label,
                )
            })
        },
    )
}

/// Write the document shell shared by every page.
fn render_document<F>(ctx: &RenderContext, head: &HeadProps, body: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut XmlWriter) -> Result<()>,
{
    let mut writer = new_writer();
    write_raw(&mut writer, "<!DOCTYPE html>")?;
    write_elem(
        &mut writer,
        "html",
        &[("lang", ctx.config.base.language.as_str())],
        |w| {
            write_head(w, ctx.config, head)?;
            write_elem(w, "body", &[], |w| {
                body(w)?;
                write_footer(w, ctx)
            })
        },
    )?;
    Ok(into_html(writer))
}

fn write_footer(writer: &mut XmlWriter, ctx: &RenderContext) -> Result<()> {
    write_elem(
        writer,
        "footer",
        &[("class", "mt-16 py-8 text-center opacity-70")],
        |w| {
            let copyright = &ctx.config.base.copyright;
            if !copyright.is_empty() {
                write_text_element(w, "p", copyright)?;
            }
            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{assemble_accommodations, derive_post_pages, overview_from_records};
    use crate::content::BlogPost;
    use crate::data::{AccommodationIndex, MetadataStore};

    fn config() -> SiteConfig {
        SiteConfig::from_str(
            r#"
            [base]
            title = "Reisfeeld"
            description = "Travel stories"
            url = "https://www.reisfeeld.nl"
            language = "nl-NL"
            copyright = "2025 Reisfeeld"

            [destination]
            name = "Indonesië"
            path = "/indonesie"
            subtitle = "Waar cultuur en natuur samenkomen."
            intro_title = "Reizen naar Indonesië"
            intro = ["Onze favoriete bestemming."]

            [[destination.facts]]
            icon = "thermostat"
            title = "Beste reistijd"
            value = "April - Oktober"
        "#,
        )
        .unwrap()
    }

    fn sample_post(title: &str) -> BlogPost {
        BlogPost {
            location: Some("Bali".to_owned()),
            title: title.to_owned(),
            meta_title: None,
            meta_description: None,
            date: Some("2024-03-02".to_owned()),
            slug: None,
            cover: None,
            headers: Vec::new(),
            sections: Vec::new(),
            gallery: Vec::new(),
            featured: false,
            carousel: false,
        }
    }

    #[test]
    fn test_overview_document_structure() {
        let config = config();
        let store = MetadataStore::default();
        let page = overview_from_records(vec![sample_post("Ubud")], &store, "/indonesie");
        let ctx = RenderContext::new(&config, ScreenClass::Wide);

        let html = String::from_utf8(render_overview(&ctx, &page).unwrap()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="nl-NL">"#));
        assert!(html.contains("<title>Indonesië</title>"));
        assert!(html.contains("Reizen naar Indonesië"));
        assert!(html.contains("Blogs over Bali"));
        assert!(html.contains("2025 Reisfeeld"));
    }

    #[test]
    fn test_overview_render_idempotent() {
        let config = config();
        let store = MetadataStore::default();
        let page = overview_from_records(vec![sample_post("Ubud")], &store, "/indonesie");
        let ctx = RenderContext::new(&config, ScreenClass::Desktop);

        assert_eq!(
            render_overview(&ctx, &page).unwrap(),
            render_overview(&ctx, &page).unwrap()
        );
    }

    #[test]
    fn test_overview_varies_by_screen_class() {
        let config = config();
        let store = MetadataStore::default();
        let page = overview_from_records(vec![sample_post("Ubud")], &store, "/indonesie");

        let phone = render_overview(&RenderContext::new(&config, ScreenClass::Phone), &page);
        let wide = render_overview(&RenderContext::new(&config, ScreenClass::Wide), &page);
        assert_ne!(phone.unwrap(), wide.unwrap());
    }

    #[test]
    fn test_post_page_head_falls_back_to_entry_title() {
        let config = config();
        let store = MetadataStore::default();
        let overview = overview_from_records(vec![sample_post("Ubud")], &store, "/indonesie");
        let posts = derive_post_pages(&overview, &store);
        let ctx = RenderContext::new(&config, ScreenClass::Wide);

        let html = String::from_utf8(render_post(&ctx, &posts[0]).unwrap()).unwrap();
        assert!(html.contains("<title>Ubud</title>"));
        // No metadata entry for the route: no social tags
        assert!(!html.contains("og:"));
    }

    #[test]
    fn test_accommodations_page_renders() {
        let config = config();
        let store = MetadataStore::default();
        let index = AccommodationIndex::from_str(
            r#"{"accommodations": {"Bali": [{
                "image": {"src": "/a.jpg", "alt": "A"},
                "name": "Guesthouse",
                "description": "Nice",
                "prices": {"low": 20, "high": 40},
                "link": "https://example.com"
            }]}}"#,
        )
        .unwrap();
        let page = assemble_accommodations(index, &store, "/accommodaties");
        let ctx = RenderContext::new(&config, ScreenClass::Wide);

        let html = String::from_utf8(render_accommodations(&ctx, &page).unwrap()).unwrap();
        assert!(html.contains("<title>Accommodaties</title>"));
        assert!(html.contains("Guesthouse"));
        assert!(html.contains("€20 - €40"));
    }

    #[test]
    fn test_render_route_dispatch() {
        let config = config();
        let store = MetadataStore::default();
        let overview = overview_from_records(vec![sample_post("Ubud")], &store, "/indonesie");
        let posts = derive_post_pages(&overview, &store);
        let accommodations = assemble_accommodations(
            AccommodationIndex::from_str(r#"{"accommodations": {}}"#).unwrap(),
            &store,
            "/accommodaties",
        );
        let site = crate::assemble::Site {
            overview,
            posts,
            accommodations,
        };
        let ctx = RenderContext::new(&config, ScreenClass::Wide);

        assert!(render_route(&site, "/indonesie", &ctx).is_some());
        assert!(render_route(&site, "/indonesie/ubud", &ctx).is_some());
        assert!(render_route(&site, "/accommodaties", &ctx).is_some());
        assert!(render_route(&site, "/missing", &ctx).is_none());
    }
}
