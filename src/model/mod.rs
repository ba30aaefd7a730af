//! Document model types for Word content representation.
//!
//! This module defines the intermediate representation that bridges DOCX
//! reading and Markdown rendering. Body elements are handed over already
//! resolved into an ordered union of paragraphs and tables.

mod document;
mod paragraph;
mod table;

pub use document::{BodyElement, DocumentModel};
pub use paragraph::{Paragraph, Run};
pub use table::{Table, TableRow};
