//! Markdown assembly for Word documents.

use chrono::NaiveDate;

use crate::category::Category;
use crate::model::{BodyElement, DocumentModel, Paragraph, Table};

use super::header::{category_banner, metadata_header};
use super::paragraph::{classify_style, convert_paragraph, ParagraphKind};
use super::table::convert_table;
use super::{ExtractionStats, RenderResult};

/// Convert a document to Markdown.
///
/// `source_file` is the original file name (with extension) recorded in the
/// front matter.
pub fn to_markdown(
    doc: &DocumentModel,
    source_file: &str,
    category: Category,
    created_date: NaiveDate,
) -> String {
    MarkdownRenderer::new(category, created_date)
        .render(doc, source_file)
        .content
}

/// Markdown renderer.
///
/// Output is the front matter, the category banner and the body fragments,
/// joined by newlines. Given the same document, category and date the
/// output is byte-for-byte identical.
pub struct MarkdownRenderer {
    category: Category,
    created_date: NaiveDate,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(category: Category, created_date: NaiveDate) -> Self {
        Self {
            category,
            created_date,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a document, collecting statistics.
    pub fn render(mut self, doc: &DocumentModel, source_file: &str) -> RenderResult {
        let mut fragments = Vec::with_capacity(doc.len() + 2);
        fragments.push(metadata_header(source_file, self.category, self.created_date));
        fragments.push(category_banner(self.category));

        for element in &doc.elements {
            match element {
                BodyElement::Paragraph(p) => self.render_paragraph(&mut fragments, p),
                BodyElement::Table(t) => self.render_table(&mut fragments, t),
            }
        }

        log::debug!(
            "Rendered {} of {} body elements ({} empty paragraphs dropped)",
            self.stats.rendered_elements(),
            doc.len(),
            self.stats.empty_paragraph_count
        );

        RenderResult::new(fragments.join("\n"), self.stats)
    }

    fn render_paragraph(&mut self, fragments: &mut Vec<String>, para: &Paragraph) {
        let converted = convert_paragraph(para);
        if converted.is_empty() {
            self.stats.add_empty_paragraph();
            return;
        }

        match classify_style(para.style()) {
            ParagraphKind::Heading(_) => self.stats.add_heading(),
            ParagraphKind::BulletItem | ParagraphKind::NumberedItem => {
                self.stats.add_list_item()
            }
            ParagraphKind::Body => self.stats.add_paragraph(),
        }
        self.stats.count_text(&para.text);
        fragments.push(converted);
    }

    fn render_table(&mut self, fragments: &mut Vec<String>, table: &Table) {
        self.stats.add_table();
        self.stats.count_text(&table.plain_text());
        fragments.push("\n".to_string());
        fragments.push(convert_table(table));
        fragments.push("\n".to_string());
    }
}
