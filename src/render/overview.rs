//! Overview scaffolding: the main container with destination quick-nav,
//! intro sections and the per-destination blog card lists.

use super::markup::{XmlWriter, write_empty_elem, write_elem};
use super::typography::{write_h2, write_h3, write_paragraph};
use crate::content::GroupedPosts;
use crate::responsive::ScreenClass;
use crate::utils::slug::slugify;
use anyhow::Result;
use quick_xml::events::{BytesText, Event};

/// Write the overview container: a quick-nav of destination anchors
/// followed by the page content.
pub fn write_overview<F>(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    destinations: &[&str],
    body: F,
) -> Result<()>
where
    F: FnOnce(&mut XmlWriter) -> Result<()>,
{
    write_elem(writer, "main", &[], |w| {
        if !destinations.is_empty() {
            let nav_class = if screen < ScreenClass::Tablet {
                "flex gap-3 overflow-x-auto px-4 py-3"
            } else {
                "flex gap-4 justify-center py-4"
            };
            write_elem(w, "nav", &[("class", nav_class)], |w| {
                for destination in destinations {
                    let href = format!("#{}", slugify(destination));
                    write_elem(w, "a", &[("href", href.as_str())], |w| {
                        w.write_event(Event::Text(BytesText::new(destination)))?;
                        Ok(())
                    })?;
                }
                Ok(())
            })?;
        }
        body(w)
    })
}

/// Write an intro section: centered heading plus paragraphs.
pub fn write_intro(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    title: &str,
    paragraphs: &[String],
) -> Result<()> {
    if title.is_empty() && paragraphs.is_empty() {
        return Ok(());
    }

    write_elem(writer, "section", &[("class", "max-w-[1000px] mx-auto")], |w| {
        if !title.is_empty() {
            let margin = if screen < ScreenClass::Wide {
                "text-center mb-4"
            } else {
                "text-center mb-6"
            };
            write_h2(w, screen, None, margin, title)?;
        }

        let spacing = if screen < ScreenClass::Wide {
            "text-center [&>*:not(:last-child)]:mb-3"
        } else {
            "text-center [&>*:not(:last-child)]:mb-4"
        };
        write_elem(w, "article", &[("class", spacing)], |w| {
            for paragraph in paragraphs {
                write_paragraph(w, screen, "", paragraph)?;
            }
            Ok(())
        })
    })
}

/// Blog card sizing per band: full-width stacked cards on small screens,
/// viewport-relative cards from 900px up.
fn card_class(screen: ScreenClass) -> String {
    if screen < ScreenClass::Laptop {
        "relative w-full max-w-[550px] h-[56vw] max-h-[325px] mt-5".to_owned()
    } else {
        let spacing = if screen < ScreenClass::Wide {
            "mt-2.5"
        } else {
            "mt-3"
        };
        format!("relative w-[36vw] max-w-[650px] h-[24vw] max-h-[375px] mx-auto {spacing}")
    }
}

/// Write one blog list section per destination group.
///
/// Each section carries an anchor id matching the quick-nav, a heading like
/// "Blogs over Bali" and one linked card per entry. A group keyed by the
/// empty string renders the same way with a bare heading.
pub fn write_blog_lists(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    grouped: &GroupedPosts,
    base_route: &str,
    list_title: &str,
) -> Result<()> {
    write_elem(writer, "section", &[], |w| {
        for (key, posts) in grouped.iter() {
            let destination = key.as_str();
            let anchor = slugify(destination);
            let heading = format!("{list_title} {destination}");

            write_elem(w, "div", &[("class", "mt-10")], |w| {
                write_h2(
                    w,
                    screen,
                    Some(anchor.as_str()),
                    "text-center",
                    heading.trim_end(),
                )?;

                for post in posts {
                    let href = format!(
                        "{}/{}",
                        base_route.trim_end_matches('/'),
                        post.route_slug()
                    );
                    let mut class = card_class(screen);
                    if post.featured {
                        class.push_str(" ring-2 ring-primary");
                    }

                    write_elem(
                        w,
                        "a",
                        &[("href", href.as_str()), ("class", class.as_str())],
                        |w| {
                            // Darkening gradient behind the title
                            write_elem(
                                w,
                                "div",
                                &[(
                                    "class",
                                    "absolute bottom-0 w-full rounded-2xl h-full opacity-60 bg-gradient-to-t from-gray-700 via-transparent to-gray-400",
                                )],
                                |_| Ok(()),
                            )?;

                            if let Some(cover) = &post.cover {
                                write_empty_elem(
                                    w,
                                    "img",
                                    &[
                                        ("width", "500"),
                                        ("height", "500"),
                                        ("src", cover.url.as_str()),
                                        ("alt", cover.alt.as_str()),
                                        (
                                            "class",
                                            "w-full h-full object-cover object-center rounded-2xl shadow-subtle",
                                        ),
                                    ],
                                )?;
                            }

                            write_h3(
                                w,
                                screen,
                                "absolute w-[90%] left-[5%] text-primary bottom-4",
                                &post.title,
                            )
                        },
                    )?;
                }
                Ok(())
            })?;
        }
        Ok(())
    })
}
