//! Low-level HTML writing helpers on top of quick-xml.
//!
//! Components write into a shared [`XmlWriter`]; text content is escaped by
//! the writer, attribute values by `push_attribute`.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Create a writer backed by an in-memory buffer.
pub fn new_writer() -> XmlWriter {
    Writer::new(Cursor::new(Vec::new()))
}

/// Consume the writer, returning the written bytes.
pub fn into_html(writer: XmlWriter) -> Vec<u8> {
    writer.into_inner().into_inner()
}

/// Write raw bytes without escaping (doctype, trusted fragments).
pub fn write_raw(writer: &mut XmlWriter, raw: &str) -> Result<()> {
    writer.get_mut().write_all(raw.as_bytes())?;
    Ok(())
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write an element with attributes and nested content.
///
/// Always emits an explicit closing tag, so it is safe for non-void HTML
/// elements even when `body` writes nothing.
pub fn write_elem<F>(
    writer: &mut XmlWriter,
    tag: &str,
    attrs: &[(&str, &str)],
    body: F,
) -> Result<()>
where
    F: FnOnce(&mut XmlWriter) -> Result<()>,
{
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Start(elem))?;
    body(writer)?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Join class fragments into one attribute value, skipping empties.
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
