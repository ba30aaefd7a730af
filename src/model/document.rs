//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A top-level element of the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyElement {
    /// A paragraph of styled runs
    Paragraph(Paragraph),

    /// A table of plain-text cells
    Table(Table),
}

/// A parsed Word document.
///
/// Elements keep the order in which they appear in the source body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Body elements in source order
    pub elements: Vec<BodyElement>,
}

impl DocumentModel {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.elements.push(BodyElement::Paragraph(paragraph));
    }

    /// Append a table.
    pub fn add_table(&mut self, table: Table) {
        self.elements.push(BodyElement::Table(table));
    }

    /// Number of body elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the body has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterate over the paragraphs only.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.elements.iter().filter_map(|e| match e {
            BodyElement::Paragraph(p) => Some(p),
            BodyElement::Table(_) => None,
        })
    }

    /// Iterate over the tables only.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.elements.iter().filter_map(|e| match e {
            BodyElement::Table(t) => Some(t),
            BodyElement::Paragraph(_) => None,
        })
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .map(|e| match e {
                BodyElement::Paragraph(p) => p.text.clone(),
                BodyElement::Table(t) => t.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<BodyElement> for DocumentModel {
    fn from_iter<I: IntoIterator<Item = BodyElement>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
