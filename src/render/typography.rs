//! Typographic elements with screen-class-dependent sizing.
//!
//! Class strings follow the site stylesheet: headings step down one size
//! per band boundary they care about, body text switches once.

use super::markup::{XmlWriter, join_classes, write_elem};
use crate::responsive::ScreenClass;
use anyhow::Result;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

/// Page title size.
pub fn h1_class(screen: ScreenClass) -> &'static str {
    if screen < ScreenClass::Tablet {
        "text-3xl"
    } else if screen < ScreenClass::Wide {
        "text-4xl"
    } else {
        "text-5xl"
    }
}

/// Section heading size.
pub fn h2_class(screen: ScreenClass) -> &'static str {
    if screen < ScreenClass::Tablet {
        "text-xl"
    } else if screen < ScreenClass::Wide {
        "text-2xl"
    } else {
        "text-3xl"
    }
}

/// Card / sub-section heading size.
pub fn h3_class(screen: ScreenClass) -> &'static str {
    if screen < ScreenClass::Tablet {
        "text-lg"
    } else if screen < ScreenClass::Wide {
        "text-xl"
    } else {
        "text-2xl"
    }
}

/// Body text size.
pub fn body_class(screen: ScreenClass) -> &'static str {
    if screen < ScreenClass::Tablet {
        "text-sm"
    } else {
        "text-base"
    }
}

pub fn write_h1(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    extra: &str,
    text: &str,
) -> Result<()> {
    let class = join_classes(&["font-bold", extra, h1_class(screen)]);
    write_elem(writer, "h1", &[("class", &class)], |w| {
        w.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    })
}

/// Write an `<h2>`, optionally carrying an anchor id.
pub fn write_h2(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    id: Option<&str>,
    extra: &str,
    text: &str,
) -> Result<()> {
    let class = join_classes(&["font-semibold", extra, h2_class(screen)]);
    let mut elem = BytesStart::new("h2");
    if let Some(id) = id {
        elem.push_attribute(("id", id));
    }
    elem.push_attribute(("class", class.as_str()));
    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new("h2")))?;
    Ok(())
}

pub fn write_h3(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    extra: &str,
    text: &str,
) -> Result<()> {
    let class = join_classes(&["font-semibold", extra, h3_class(screen)]);
    write_elem(writer, "h3", &[("class", &class)], |w| {
        w.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    })
}

/// Write a body text paragraph.
pub fn write_paragraph(
    writer: &mut XmlWriter,
    screen: ScreenClass,
    extra: &str,
    text: &str,
) -> Result<()> {
    let class = join_classes(&[extra, body_class(screen)]);
    write_elem(writer, "p", &[("class", &class)], |w| {
        w.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::markup::{into_html, new_writer};

    fn render(f: impl FnOnce(&mut XmlWriter) -> Result<()>) -> String {
        let mut writer = new_writer();
        f(&mut writer).unwrap();
        String::from_utf8(into_html(writer)).unwrap()
    }

    #[test]
    fn test_h2_class_per_band() {
        assert_eq!(h2_class(ScreenClass::of(749)), "text-xl");
        assert_eq!(h2_class(ScreenClass::of(750)), "text-2xl");
        assert_eq!(h2_class(ScreenClass::of(1249)), "text-2xl");
        assert_eq!(h2_class(ScreenClass::of(1250)), "text-3xl");
    }

    #[test]
    fn test_body_class_switch() {
        assert_eq!(body_class(ScreenClass::Phone), "text-sm");
        assert_eq!(body_class(ScreenClass::Tablet), "text-base");
        assert_eq!(body_class(ScreenClass::Wide), "text-base");
    }

    #[test]
    fn test_write_h2_with_anchor() {
        let html = render(|w| write_h2(w, ScreenClass::Wide, Some("bali"), "text-center", "Bali"));
        assert_eq!(
            html,
            r#"<h2 id="bali" class="font-semibold text-center text-3xl">Bali</h2>"#
        );
    }

    #[test]
    fn test_write_h2_without_anchor() {
        let html = render(|w| write_h2(w, ScreenClass::Phone, None, "", "Titel"));
        assert_eq!(html, r#"<h2 class="font-semibold text-xl">Titel</h2>"#);
    }

    #[test]
    fn test_paragraph_escapes_text() {
        let html = render(|w| write_paragraph(w, ScreenClass::Wide, "", "a & b"));
        assert_eq!(html, r#"<p class="text-base">a &amp; b</p>"#);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let once = render(|w| write_h1(w, ScreenClass::Desktop, "", "Indonesië"));
        let twice = render(|w| write_h1(w, ScreenClass::Desktop, "", "Indonesië"));
        assert_eq!(once, twice);
    }
}
