//! Paragraph style table from `word/styles.xml`.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::get_attr;
use crate::error::Result;

/// Maps paragraph style IDs (`w:styleId`) to their display names (`w:name`).
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleTable {
    /// Create an empty style table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the contents of `styles.xml`.
    ///
    /// Only paragraph styles are kept; character, table and numbering styles
    /// never name a paragraph.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut table = Self::new();
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut current: Option<PendingStyle> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) if e.name().as_ref() == b"w:style" => {
                    current = PendingStyle::from_element(&e);
                }
                Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"w:name" => {
                    if let (Some(style), Some(name)) = (current.as_mut(), get_attr(&e, b"w:val")) {
                        style.name = Some(name);
                    }
                }
                Event::End(e) if e.name().as_ref() == b"w:style" => {
                    if let Some(style) = current.take() {
                        table.insert(style);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        log::debug!(
            "Loaded {} paragraph styles (default: {:?})",
            table.names.len(),
            table.default_paragraph
        );
        Ok(table)
    }

    /// Register a style by ID.
    pub fn add(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    /// Set the name used for paragraphs without an explicit style.
    pub fn set_default(&mut self, name: impl Into<String>) {
        self.default_paragraph = Some(name.into());
    }

    /// Name of the default paragraph style, usually "Normal".
    pub fn default_name(&self) -> Option<&str> {
        self.default_paragraph.as_deref()
    }

    /// Number of known paragraph styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no styles are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve a `w:pStyle` value to a style name.
    ///
    /// Missing or unknown IDs fall back to the default paragraph style.
    pub fn resolve(&self, style_id: Option<&str>) -> Option<String> {
        match style_id {
            Some(id) => match self.names.get(id) {
                Some(name) => Some(name.clone()),
                None => {
                    log::warn!("Unknown paragraph style '{}', using default", id);
                    self.default_paragraph.clone()
                }
            },
            None => self.default_paragraph.clone(),
        }
    }

    fn insert(&mut self, style: PendingStyle) {
        let name = style.name.unwrap_or_else(|| style.id.clone());
        if style.is_default {
            self.default_paragraph = Some(name.clone());
        }
        self.names.insert(style.id, name);
    }
}

/// A `w:style` element being read.
struct PendingStyle {
    id: String,
    name: Option<String>,
    is_default: bool,
}

impl PendingStyle {
    fn from_element(e: &BytesStart<'_>) -> Option<Self> {
        let style_type = get_attr(e, b"w:type");
        if style_type.as_deref().is_some_and(|t| t != "paragraph") {
            return None;
        }
        let id = get_attr(e, b"w:styleId")?;
        let is_default = matches!(get_attr(e, b"w:default").as_deref(), Some("1" | "true"));
        Some(Self {
            id,
            name: None,
            is_default,
        })
    }
}
