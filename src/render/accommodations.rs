//! Accommodation cards, listed per destination.

use super::markup::{XmlWriter, write_empty_elem, write_elem};
use super::typography::{write_h2, write_h3, write_paragraph};
use crate::data::AccommodationIndex;
use crate::responsive::ScreenClass;
use crate::utils::slug::slugify;
use anyhow::Result;
use quick_xml::events::{BytesText, Event};

fn list_class(screen: ScreenClass) -> &'static str {
    if screen < ScreenClass::Laptop {
        "flex flex-col items-center gap-6 mt-6"
    } else {
        "grid grid-cols-2 gap-6 mt-8 max-w-[1250px] mx-auto"
    }
}

/// Write one section per destination with its accommodation cards.
pub fn write_accommodation_lists(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    index: &AccommodationIndex,
    link_label: &str,
) -> Result<()> {
    let link_label = if link_label.is_empty() {
        "Bekijk accommodatie"
    } else {
        link_label
    };

    write_elem(writer, "section", &[], |w| {
        for (destination, entries) in index.iter() {
            let anchor = slugify(destination);

            write_elem(w, "div", &[("class", "mt-10")], |w| {
                write_h2(w, screen, Some(anchor.as_str()), "text-center", destination)?;

                write_elem(w, "div", &[("class", list_class(screen))], |w| {
                    for entry in entries {
                        write_accommodation_card(w, screen, entry, link_label)?;
                    }
                    Ok(())
                })
            })?;
        }
        Ok(())
    })
}

fn write_accommodation_card(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    entry: &crate::data::Accommodation,
    link_label: &str,
) -> Result<()> {
    let price = format!("€{} - €{}", entry.prices.low, entry.prices.high);

    write_elem(
        writer,
        "article",
        &[("class", "rounded-2xl shadow-subtle overflow-hidden max-w-[550px] w-full")],
        |w| {
            write_empty_elem(
                w,
                "img",
                &[
                    ("width", "500"),
                    ("height", "500"),
                    ("src", entry.image.src.as_str()),
                    ("alt", entry.image.alt.as_str()),
                    ("class", "w-full h-[220px] object-cover object-center"),
                ],
            )?;

            write_elem(w, "div", &[("class", "p-4")], |w| {
                write_h3(w, screen, "", &entry.name)?;
                write_paragraph(w, screen, "mt-2", &entry.description)?;
                write_paragraph(w, screen, "mt-2 font-semibold", &price)?;
                write_elem(
                    w,
                    "a",
                    &[
                        ("href", entry.link.as_str()),
                        ("target", "_blank"),
                        ("rel", "noopener noreferrer"),
                        ("class", "inline-block mt-3 underline"),
                    ],
                    |w| {
                        w.write_event(Event::Text(BytesText::new(link_label)))?;
                        Ok(())
                    },
                )
            })
        },
    )
}
