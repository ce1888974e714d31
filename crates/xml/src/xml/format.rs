//! Canonical formatting of XML markup.
//!
//! Markup is read back with quick-xml and written again through an indenting writer:
//!
//! - a fresh `<?xml version="1.0"?>` declaration replaces whatever was there
//! - whitespace-only text between elements is dropped; the text of a leaf element is kept
//!   verbatim
//! - text, CDATA sections and entity references inside one element are merged into a single
//!   text run and escaped again on output
//! - elements without content collapse to `<name/>`
//! - comments, processing instructions and doctypes are kept in place
//!
//! Reading the output again yields the same events, so formatting is idempotent.

use crate::config::AugmentOptions;
use crate::error::{Result, XmlError};
use crate::xml::tree::{XmlElement, to_xml_string};
use quick_xml::events::{BytesDecl, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// Formats an element tree with the default layout.
pub fn format(element: &XmlElement) -> Result<String> {
    Formatter::default().format(element)
}

/// Re-formats existing markup with the default layout.
pub fn format_str(xml: &str) -> Result<String> {
    Formatter::default().format_str(xml)
}

/// Output layout for formatted markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    declaration: bool,
    indent: usize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            declaration: true,
            indent: 2,
        }
    }
}

impl From<&AugmentOptions> for Formatter {
    fn from(options: &AugmentOptions) -> Self {
        Self {
            declaration: options.declaration,
            indent: options.indent,
        }
    }
}

impl Formatter {
    pub fn new(declaration: bool, indent: usize) -> Self {
        Self { declaration, indent }
    }

    /// Serializes `element` and formats the result.
    pub fn format(&self, element: &XmlElement) -> Result<String> {
        self.format_str(&to_xml_string(element)?)
    }

    /// Re-formats `xml`.
    pub fn format_str(&self, xml: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml);
        let mut writer = if self.indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', self.indent)
        } else {
            Writer::new(Vec::new())
        };

        if self.declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        }

        // A start tag is held back until we know whether the element has content.
        let mut pending: Option<BytesStart<'static>> = None;
        let mut text = String::new();

        loop {
            match reader.read_event()? {
                Event::Eof => break,
                Event::Text(e) => text.push_str(&String::from_utf8_lossy(e.as_ref())),
                Event::CData(e) => text.push_str(&String::from_utf8_lossy(e.as_ref())),
                Event::GeneralRef(e) => match e.resolve_char_ref()? {
                    Some(ch) => text.push(ch),
                    None => text.push_str(resolve_entity(&String::from_utf8_lossy(e.as_ref()))?),
                },
                Event::Decl(_) => {}
                Event::Start(e) => {
                    flush(&mut writer, &mut pending, &mut text)?;
                    pending = Some(e.into_owned());
                }
                Event::End(e) => {
                    match pending.take() {
                        Some(start) if text.is_empty() => writer.write_event(Event::Empty(start))?,
                        // a leaf keeps its text as is, even when it is only whitespace
                        Some(start) => {
                            writer.write_event(Event::Start(start))?;
                            writer.write_event(Event::Text(BytesText::new(&text)))?;
                            writer.write_event(Event::End(e.into_owned()))?;
                        }
                        None => {
                            flush(&mut writer, &mut pending, &mut text)?;
                            writer.write_event(Event::End(e.into_owned()))?;
                        }
                    }
                    text.clear();
                }
                event => {
                    flush(&mut writer, &mut pending, &mut text)?;
                    writer.write_event(event.into_owned())?;
                }
            }
        }
        flush(&mut writer, &mut pending, &mut text)?;

        let mut formatted = String::from_utf8(writer.into_inner())?;
        formatted.push('\n');
        Ok(formatted)
    }
}

/// Writes the held-back start tag and any non-blank text collected since.
fn flush(
    writer: &mut Writer<Vec<u8>>,
    pending: &mut Option<BytesStart<'static>>,
    text: &mut String,
) -> Result<()> {
    if let Some(start) = pending.take() {
        writer.write_event(Event::Start(start))?;
    }
    if !is_xml_whitespace(text) {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    text.clear();
    Ok(())
}

fn is_xml_whitespace(text: &str) -> bool {
    text.bytes()
        .all(|b| matches!(b, b' ' | b'\n' | b'\r' | b'\t'))
}

/// Resolves one of the five predefined entities (`amp`, `lt`, ...).
fn resolve_entity(name: &str) -> Result<&'static str> {
    quick_xml::escape::resolve_predefined_entity(name)
        .ok_or_else(|| XmlError::UnknownEntity(name.to_string()))
}
