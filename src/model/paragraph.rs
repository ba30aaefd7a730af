//! Paragraph and run types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Name of the paragraph style (e.g. "Heading 1"), if any
    #[serde(default)]
    pub style_name: Option<String>,

    /// Formatting runs in source order
    #[serde(default)]
    pub runs: Vec<Run>,

    /// Plain text of the whole paragraph
    #[serde(default)]
    pub text: String,
}

impl Paragraph {
    /// Create a paragraph from runs; the plain text is their concatenation.
    pub fn new(style_name: Option<String>, runs: Vec<Run>) -> Self {
        let text = runs.iter().map(|r| r.text.as_str()).collect();
        Self {
            style_name,
            runs,
            text,
        }
    }

    /// Create an unstyled paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(None, vec![Run::new(text)])
    }

    /// Create a paragraph with the given style and a single plain run.
    pub fn styled(style_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Some(style_name.into()), vec![Run::new(text)])
    }

    /// Override the plain text.
    ///
    /// Readers use this when the paragraph carries text outside its runs,
    /// such as hyperlink content.
    pub fn with_plain_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Style name, or `""` if the paragraph has none.
    pub fn style(&self) -> &str {
        self.style_name.as_deref().unwrap_or("")
    }

    /// Add a run, extending the plain text.
    pub fn add_run(&mut self, run: Run) {
        self.text.push_str(&run.text);
        self.runs.push(run);
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A run of text sharing one formatting set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    #[serde(default)]
    pub text: String,

    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Italic text
    #[serde(default)]
    pub italic: bool,

    /// Font name (e.g. "Courier New")
    #[serde(default)]
    pub font_name: Option<String>,
}

impl Run {
    /// Create a new run without formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text).with_bold(true)
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text).with_italic(true)
    }

    /// Set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set the font name.
    pub fn with_font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = Some(font_name.into());
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the run uses a Courier (monospace) font.
    pub fn is_monospace(&self) -> bool {
        self.font_name
            .as_deref()
            .is_some_and(|f| f.to_lowercase().contains("courier"))
    }
}
