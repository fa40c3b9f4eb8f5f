//! Hero header: full-width image with title and subtitle overlay.

use super::markup::{XmlWriter, write_empty_elem, write_elem};
use super::typography::{write_h1, write_paragraph};
use crate::responsive::ScreenClass;
use anyhow::Result;

/// Inputs for the hero header.
pub struct HeroProps<'a> {
    /// Site-absolute or remote image URL.
    pub image: Option<&'a str>,
    pub image_alt: &'a str,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    /// Reduced height variant, used on listing pages.
    pub compact: bool,
}

fn hero_height(screen: ScreenClass, compact: bool) -> &'static str {
    match (compact, screen < ScreenClass::Laptop) {
        (true, true) => "h-[40vh]",
        (true, false) => "h-[50vh]",
        (false, true) => "h-[60vh]",
        (false, false) => "h-[80vh]",
    }
}

/// Write the hero header.
pub fn write_hero(writer: &mut XmlWriter, screen: ScreenClass, props: &HeroProps) -> Result<()> {
    let class = format!(
        "relative w-full overflow-hidden {}",
        hero_height(screen, props.compact)
    );

    write_elem(writer, "header", &[("class", &class)], |w| {
        if let Some(image) = props.image {
            write_empty_elem(
                w,
                "img",
                &[
                    ("width", "2000"),
                    ("height", "1300"),
                    ("src", image),
                    ("alt", props.image_alt),
                    ("class", "w-full h-full object-cover object-center"),
                ],
            )?;
        }

        let overlay = if props.compact {
            "absolute bottom-6 left-0 w-full text-center text-primary"
        } else {
            "absolute inset-0 flex flex-col items-center justify-center text-center text-primary"
        };
        write_elem(w, "div", &[("class", overlay)], |w| {
            write_h1(w, screen, "", props.title)?;
            if let Some(subtitle) = props.subtitle.filter(|s| !s.is_empty()) {
                write_paragraph(w, screen, "mt-3 max-w-[650px] mx-auto", subtitle)?;
            }
            Ok(())
        })
    })
}
