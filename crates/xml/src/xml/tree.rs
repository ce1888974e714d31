//! The XML element tree produced by the synthesizer, and its serialization to markup.
//!
//! The tree only models what rendered examples need: named elements holding either text or
//! child elements. Text is escaped when written, never when stored.

use crate::error::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Content of an element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Content {
    /// No content; written as `<name/>`.
    #[default]
    Empty,
    /// Character data, unescaped.
    Text(String),
    /// Child elements, in document order.
    Children(Vec<XmlElement>),
}

/// An XML element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub content: Content,
}

impl XmlElement {
    /// Creates an element without content.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Content::Empty,
        }
    }

    /// Creates an element holding `text`.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: Content::Text(text.into()),
        }
    }

    /// Creates an element holding `children`. No children means no content.
    pub fn with_children(name: impl Into<String>, children: Vec<XmlElement>) -> Self {
        let content = if children.is_empty() {
            Content::Empty
        } else {
            Content::Children(children)
        };
        Self {
            name: name.into(),
            content,
        }
    }

    /// Child elements; empty for text or empty elements.
    pub fn children(&self) -> &[XmlElement] {
        match &self.content {
            Content::Children(children) => children,
            Content::Empty | Content::Text(_) => &[],
        }
    }

    /// Text content, if this is a text element.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            Content::Empty | Content::Children(_) => None,
        }
    }
}

/// Serialize an element tree to a compact XML string (no declaration, no indentation).
pub fn to_xml_string(element: &XmlElement) -> Result<String> {
    Ok(String::from_utf8(to_xml_vec(element)?)?)
}

/// Serialize an element tree to an XML byte vector.
pub fn to_xml_vec(element: &XmlElement) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer(element, &mut buffer)?;
    Ok(buffer)
}

/// Serialize an element tree to an XML writer.
pub fn to_xml_writer<W: Write>(element: &XmlElement, writer: W) -> Result<()> {
    let mut writer = Writer::new(writer);
    write_element(&mut writer, element)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let start = BytesStart::new(element.name.as_str());
    match &element.content {
        Content::Empty => {
            writer.write_event(Event::Empty(start))?;
        }
        Content::Text(text) => {
            writer.write_event(Event::Start(start))?;
            // BytesText::new escapes the five markup characters
            writer.write_event(Event::Text(BytesText::new(text)))?;
            writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
        }
        Content::Children(children) => {
            writer.write_event(Event::Start(start))?;
            for child in children {
                write_element(writer, child)?;
            }
            writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
        }
    }
    Ok(())
}
