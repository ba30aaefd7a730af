//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Conversion statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ExtractionStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of body paragraphs rendered as plain text
    pub paragraph_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of list items (bulleted and numbered)
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Paragraphs dropped because they had no visible text
    pub empty_paragraph_count: u32,

    /// Approximate word count of the body (whitespace-separated tokens)
    pub word_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment table count.
    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    /// Increment dropped paragraph count.
    pub fn add_empty_paragraph(&mut self) {
        self.empty_paragraph_count += 1;
    }

    /// Add the word count of a text fragment.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
    }

    /// Total number of body elements that produced output.
    pub fn rendered_elements(&self) -> u32 {
        self.paragraph_count + self.heading_count + self.list_item_count + self.table_count
    }
}
