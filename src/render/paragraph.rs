//! Paragraph conversion driven by style names.

use crate::model::Paragraph;

use super::inline::apply_inline_formatting;

/// Semantic role inferred from a paragraph's style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    /// `#` .. `######`
    Heading(u8),
    /// `- item`
    BulletItem,
    /// `1. item`
    NumberedItem,
    /// Body text with inline formatting
    Body,
}

/// A prioritized style-name rule: if the lowercased style name contains any
/// of `patterns`, the paragraph is rendered as `kind`.
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    /// Substrings to look for (lowercase)
    pub patterns: &'static [&'static str],
    /// Role assigned on match
    pub kind: ParagraphKind,
}

impl StyleRule {
    const fn new(patterns: &'static [&'static str], kind: ParagraphKind) -> Self {
        Self { patterns, kind }
    }

    /// Check the rule against a lowercased style name.
    pub fn matches(&self, style: &str) -> bool {
        self.patterns.iter().any(|p| style.contains(p))
    }
}

/// Style rules, evaluated top to bottom; the first match wins.
///
/// A pattern that contains an earlier-listed pattern as a substring must
/// come first ("subtitle" before "title", "number" before "list"), otherwise
/// "Subtitle" and "List Number" would never reach their own rule.
pub const STYLE_RULES: &[StyleRule] = &[
    StyleRule::new(&["heading 1"], ParagraphKind::Heading(1)),
    StyleRule::new(&["heading 2"], ParagraphKind::Heading(2)),
    StyleRule::new(&["heading 3"], ParagraphKind::Heading(3)),
    StyleRule::new(&["heading 4"], ParagraphKind::Heading(4)),
    StyleRule::new(&["heading 5"], ParagraphKind::Heading(5)),
    StyleRule::new(&["heading 6"], ParagraphKind::Heading(6)),
    StyleRule::new(&["subtitle"], ParagraphKind::Heading(2)),
    StyleRule::new(&["title"], ParagraphKind::Heading(1)),
    StyleRule::new(&["number"], ParagraphKind::NumberedItem),
    StyleRule::new(&["list", "bullet"], ParagraphKind::BulletItem),
];

/// Classify a style name (case-insensitive substring match).
pub fn classify_style(style_name: &str) -> ParagraphKind {
    let style = style_name.to_lowercase();
    STYLE_RULES
        .iter()
        .find(|rule| rule.matches(&style))
        .map(|rule| rule.kind)
        .unwrap_or(ParagraphKind::Body)
}

/// Convert a paragraph to Markdown.
///
/// Returns an empty string for paragraphs without visible text; every other
/// result ends with exactly one newline. Headings and list items use the
/// trimmed plain text, body paragraphs keep run formatting.
pub fn convert_paragraph(paragraph: &Paragraph) -> String {
    let text = paragraph.text.trim();
    if text.is_empty() {
        return String::new();
    }

    match classify_style(paragraph.style()) {
        ParagraphKind::Heading(level) => {
            format!("{} {}\n", "#".repeat(level as usize), text)
        }
        ParagraphKind::BulletItem => format!("- {}\n", text),
        // Always "1."; Markdown renderers renumber consecutive items
        ParagraphKind::NumberedItem => format!("1. {}\n", text),
        ParagraphKind::Body => format!("{}\n", apply_inline_formatting(paragraph)),
    }
}
