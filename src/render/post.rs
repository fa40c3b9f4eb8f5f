//! Blog entry body: dated sections of image, heading and text, plus an
//! optional photo gallery.

use super::markup::{XmlWriter, write_empty_elem, write_elem};
use super::typography::{write_h2, write_paragraph};
use crate::content::BlogPost;
use crate::responsive::ScreenClass;
use crate::utils::slug::slugify;
use anyhow::Result;
use quick_xml::events::{BytesText, Event};

fn section_class(screen: ScreenClass) -> &'static str {
    if screen < ScreenClass::Laptop {
        "max-w-[650px] mx-auto mt-8 px-4"
    } else {
        "max-w-[1000px] mx-auto mt-10"
    }
}

/// Write the article body of one blog entry.
pub fn write_post_body(writer: &mut XmlWriter, screen: ScreenClass, post: &BlogPost) -> Result<()> {
    write_elem(writer, "article", &[], |w| {
        if let Some(date) = post.date.as_deref() {
            write_paragraph(w, screen, "text-center mt-4 opacity-70", date)?;
        }

        if !post.headers.is_empty() {
            write_contents_nav(w, screen, &post.headers)?;
        }

        for section in &post.sections {
            write_elem(w, "section", &[("class", section_class(screen))], |w| {
                if let Some(image) = &section.image {
                    write_empty_elem(
                        w,
                        "img",
                        &[
                            ("width", "1000"),
                            ("height", "667"),
                            ("src", image.url.as_str()),
                            ("alt", image.alt.as_str()),
                            ("class", "w-full rounded-2xl object-cover"),
                        ],
                    )?;
                }
                let anchor = slugify(&section.heading);
                write_h2(w, screen, Some(anchor.as_str()), "mt-4", &section.heading)?;
                write_paragraph(w, screen, "mt-3", &section.text)
            })?;
        }

        if !post.gallery.is_empty() {
            // Carousel entries scroll horizontally instead of wrapping
            let gallery_class = if post.carousel {
                "flex gap-3 overflow-x-auto max-w-[1000px] mx-auto mt-10"
            } else if screen < ScreenClass::Laptop {
                "grid grid-cols-1 gap-2 max-w-[650px] mx-auto mt-8 px-4"
            } else {
                "grid grid-cols-2 gap-3 max-w-[1000px] mx-auto mt-10"
            };
            write_elem(w, "div", &[("class", gallery_class)], |w| {
                for image in &post.gallery {
                    write_empty_elem(
                        w,
                        "img",
                        &[
                            ("width", "500"),
                            ("height", "500"),
                            ("src", image.url.as_str()),
                            ("alt", image.alt.as_str()),
                            ("class", "w-full h-full object-cover rounded-2xl"),
                        ],
                    )?;
                }
                Ok(())
            })?;
        }

        Ok(())
    })
}

/// In-page navigation over the section headings.
fn write_contents_nav(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    headers: &[String],
) -> Result<()> {
    let nav_class = if screen < ScreenClass::Tablet {
        "flex gap-3 overflow-x-auto px-4 mt-6"
    } else {
        "flex gap-4 justify-center mt-8"
    };

    write_elem(writer, "nav", &[("class", nav_class)], |w| {
        for header in headers {
            let href = format!("#{}", slugify(header));
            write_elem(w, "a", &[("href", href.as_str())], |w| {
                w.write_event(Event::Text(BytesText::new(header)))?;
                Ok(())
            })?;
        }
        Ok(())
    })
}
