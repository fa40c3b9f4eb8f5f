//! Fact tags on the destination index (best season, currency, and so on).
//!
//! Under 1000px the tags form a two-column grid; from 1000px up a single
//! flex row whose bottom margin grows once more at 1250px.

use super::markup::{XmlWriter, write_elem};
use super::typography::body_class;
use crate::config::FactTag;
use crate::responsive::ScreenClass;
use anyhow::Result;
use quick_xml::events::{BytesText, Event};

fn container_class(screen: ScreenClass) -> &'static str {
    if screen < ScreenClass::Desktop {
        "grid grid-cols-2 gap-x-2 gap-y-6 text-center max-w-[650px] mx-auto mb-7"
    } else if screen < ScreenClass::Wide {
        "flex mb-10"
    } else {
        "flex mb-14"
    }
}

/// Write the fact tag row. Writes nothing when there are no facts.
pub fn write_fact_tags(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    facts: &[FactTag],
) -> Result<()> {
    if facts.is_empty() {
        return Ok(());
    }

    write_elem(writer, "div", &[("class", container_class(screen))], |w| {
        for fact in facts {
            write_fact_tag(w, screen, fact)?;
        }
        Ok(())
    })
}

fn write_fact_tag(writer: &mut XmlWriter, screen: ScreenClass, fact: &FactTag) -> Result<()> {
    let icon_class = format!("icon icon-{}", fact.icon);

    write_elem(writer, "div", &[("class", "flex-1")], |w| {
        write_elem(
            w,
            "span",
            &[("class", icon_class.as_str()), ("aria-hidden", "true")],
            |_| Ok(()),
        )?;
        write_elem(w, "h3", &[("class", "font-semibold")], |w| {
            w.write_event(Event::Text(BytesText::new(&fact.title)))?;
            Ok(())
        })?;
        write_elem(w, "p", &[("class", body_class(screen))], |w| {
            w.write_event(Event::Text(BytesText::new(&fact.value)))?;
            Ok(())
        })
    })
}
