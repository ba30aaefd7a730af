//! DOCX package reader.
//!
//! Reads the main document part of a WordprocessingML package and turns its
//! body into a [`DocumentModel`]. Only top-level paragraphs and tables are
//! kept; drawings, content controls and nested tables are skipped as whole
//! subtrees.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::ZipArchive;

use super::{check_val_off, get_attr, StyleTable};
use crate::error::{Error, Result};
use crate::model::{BodyElement, DocumentModel, Paragraph, Run, Table, TableRow};

const DEFAULT_MAIN_PART: &str = "word/document.xml";
const PACKAGE_RELS: &str = "_rels/.rels";
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";

/// DOCX document reader.
pub struct DocxReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl DocxReader<File> {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

impl<'a> DocxReader<Cursor<&'a [u8]>> {
    /// Read a DOCX package held in memory.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(data))
    }
}

impl<R: Read + Seek> DocxReader<R> {
    /// Read a DOCX package from any seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Parse the package into a document model.
    pub fn parse(mut self) -> Result<DocumentModel> {
        let main_part = self.main_part_name()?;
        let document_xml = self
            .read_part(&main_part)?
            .ok_or_else(|| Error::MissingPart(main_part.clone()))?;

        let styles_part = sibling_part(&main_part, "styles.xml");
        let styles = match self.read_part(&styles_part)? {
            Some(xml) => StyleTable::parse(&xml)?,
            None => {
                log::debug!("No {} in package, paragraphs stay unstyled", styles_part);
                StyleTable::new()
            }
        };

        let doc = parse_body(&document_xml, &styles)?;
        log::debug!(
            "Read {} body elements from {} ({} paragraphs, {} tables)",
            doc.len(),
            main_part,
            doc.paragraphs().count(),
            doc.tables().count()
        );
        Ok(doc)
    }

    /// Locate the main document part through the package relationships.
    fn main_part_name(&mut self) -> Result<String> {
        let Some(rels) = self.read_part(PACKAGE_RELS)? else {
            return Ok(DEFAULT_MAIN_PART.to_string());
        };

        let mut reader = Reader::from_str(&rels);
        reader.trim_text(true);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"Relationship" => {
                    let is_main = get_attr(&e, b"Type")
                        .is_some_and(|t| t.ends_with(OFFICE_DOCUMENT_REL));
                    if let (true, Some(target)) = (is_main, get_attr(&e, b"Target")) {
                        return Ok(target.trim_start_matches('/').to_string());
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(DEFAULT_MAIN_PART.to_string())
    }

    /// Read a part as UTF-8 text, `None` if the package has no such entry.
    fn read_part(&mut self, name: &str) -> Result<Option<String>> {
        let mut entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut content = String::new();
        entry.read_to_string(&mut content)?;
        Ok(Some(content))
    }
}

/// Resolve `file` relative to the directory of `part`.
fn sibling_part(part: &str, file: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, _)) => format!("{}/{}", dir, file),
        None => file.to_string(),
    }
}

/// Walk the `w:body` of a main document part.
pub fn parse_body(xml: &str, styles: &StyleTable) -> Result<DocumentModel> {
    let mut walker = BodyWalker::new(styles);

    let mut reader = Reader::from_str(xml);
    // xml:space="preserve" runs carry meaningful leading/trailing spaces
    reader.trim_text(false);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => walker.start(&e),
            Event::Empty(e) => walker.empty(&e),
            Event::Text(t) => {
                if walker.wants_text() {
                    walker.text(&t.unescape()?);
                }
            }
            Event::End(e) => walker.end(e.name().as_ref()),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(walker.finish())
}

/// Paragraph being collected; `depth` is the element depth of its `w:p`.
struct ParagraphBuilder {
    depth: usize,
    style_id: Option<String>,
    runs: Vec<Run>,
    text: String,
}

/// Run being collected. Only runs that are direct children of the
/// paragraph become model runs; the rest (hyperlinks, insertions)
/// contribute their text only.
struct RunBuilder {
    depth: usize,
    direct: bool,
    run: Run,
}

struct TableBuilder {
    depth: usize,
    rows: Vec<TableRow>,
    /// Grid-expanded cell texts of the previous row, for vertical merges
    previous_row: Vec<String>,
}

struct RowBuilder {
    depth: usize,
    cells: Vec<String>,
}

struct CellBuilder {
    depth: usize,
    paragraphs: Vec<String>,
    grid_span: usize,
    continues_merge: bool,
}

struct BodyWalker<'s> {
    styles: &'s StyleTable,
    elements: Vec<BodyElement>,
    depth: usize,
    body_depth: Option<usize>,
    skip_until: Option<usize>,
    table: Option<TableBuilder>,
    row: Option<RowBuilder>,
    cell: Option<CellBuilder>,
    paragraph: Option<ParagraphBuilder>,
    run: Option<RunBuilder>,
    in_run_props: bool,
    in_text: bool,
}

impl<'s> BodyWalker<'s> {
    fn new(styles: &'s StyleTable) -> Self {
        Self {
            styles,
            elements: Vec::new(),
            depth: 0,
            body_depth: None,
            skip_until: None,
            table: None,
            row: None,
            cell: None,
            paragraph: None,
            run: None,
            in_run_props: false,
            in_text: false,
        }
    }

    fn finish(self) -> DocumentModel {
        DocumentModel {
            elements: self.elements,
        }
    }

    fn wants_text(&self) -> bool {
        self.skip_until.is_none() && self.in_text && self.run.is_some()
    }

    fn skip_subtree(&mut self) {
        self.skip_until = Some(self.depth);
    }

    fn is_child_of(&self, parent_depth: Option<usize>) -> bool {
        parent_depth.is_some_and(|d| self.depth == d + 1)
    }

    fn start(&mut self, e: &BytesStart<'_>) {
        self.depth += 1;
        if self.skip_until.is_some() {
            return;
        }

        match e.name().as_ref() {
            b"w:body" => self.body_depth = Some(self.depth),
            b"w:tbl" => {
                if self.table.is_none() && self.is_child_of(self.body_depth) {
                    self.table = Some(TableBuilder {
                        depth: self.depth,
                        rows: Vec::new(),
                        previous_row: Vec::new(),
                    });
                } else {
                    self.skip_subtree();
                }
            }
            b"w:tr" if self.is_child_of(self.table.as_ref().map(|t| t.depth)) => {
                self.row = Some(RowBuilder {
                    depth: self.depth,
                    cells: Vec::new(),
                });
            }
            b"w:tc" if self.is_child_of(self.row.as_ref().map(|r| r.depth)) => {
                self.cell = Some(CellBuilder {
                    depth: self.depth,
                    paragraphs: Vec::new(),
                    grid_span: 1,
                    continues_merge: false,
                });
            }
            b"w:p" => {
                let in_body = self.table.is_none() && self.is_child_of(self.body_depth);
                let in_cell = self.is_child_of(self.cell.as_ref().map(|c| c.depth));
                if self.paragraph.is_none() && (in_body || in_cell) {
                    self.paragraph = Some(ParagraphBuilder {
                        depth: self.depth,
                        style_id: None,
                        runs: Vec::new(),
                        text: String::new(),
                    });
                } else {
                    self.skip_subtree();
                }
            }
            b"w:r" if self.run.is_none() => {
                if let Some(ref para) = self.paragraph {
                    self.run = Some(RunBuilder {
                        depth: self.depth,
                        direct: self.depth == para.depth + 1,
                        run: Run::default(),
                    });
                }
            }
            b"w:rPr" if self.run.is_some() => self.in_run_props = true,
            b"w:t" if self.run.is_some() && !self.in_run_props => self.in_text = true,
            b"w:sdt" | b"w:drawing" | b"w:pict" | b"w:object" | b"mc:AlternateContent" => {
                self.skip_subtree();
            }
            _ => self.property(e),
        }
    }

    fn empty(&mut self, e: &BytesStart<'_>) {
        match e.name().as_ref() {
            // Self-closing containers such as an empty `<w:p/>`
            name @ (b"w:p" | b"w:tc" | b"w:tr" | b"w:tbl") => {
                self.start(e);
                self.end(name);
            }
            _ if self.skip_until.is_none() => self.property(e),
            _ => {}
        }
    }

    /// Handle attribute-carrying leaf elements.
    fn property(&mut self, e: &BytesStart<'_>) {
        match e.name().as_ref() {
            b"w:pStyle" if self.run.is_none() => {
                if let Some(ref mut para) = self.paragraph {
                    para.style_id = get_attr(e, b"w:val");
                }
            }
            b"w:b" if self.in_run_props => {
                if let Some(ref mut run) = self.run {
                    run.run.bold = !check_val_off(e);
                }
            }
            b"w:i" if self.in_run_props => {
                if let Some(ref mut run) = self.run {
                    run.run.italic = !check_val_off(e);
                }
            }
            b"w:rFonts" if self.in_run_props => {
                if let Some(ref mut run) = self.run {
                    let font = get_attr(e, b"w:ascii").or_else(|| get_attr(e, b"w:hAnsi"));
                    if font.is_some() {
                        run.run.font_name = font;
                    }
                }
            }
            b"w:tab" if !self.in_run_props => self.push_run_text("\t"),
            b"w:br" | b"w:cr" if !self.in_run_props => self.push_run_text("\n"),
            b"w:gridSpan" if self.paragraph.is_none() => {
                if let Some(ref mut cell) = self.cell {
                    cell.grid_span = get_attr(e, b"w:val")
                        .and_then(|v| v.parse().ok())
                        .filter(|span: &usize| *span > 0)
                        .unwrap_or(1);
                }
            }
            b"w:vMerge" if self.paragraph.is_none() => {
                if let Some(ref mut cell) = self.cell {
                    cell.continues_merge = get_attr(e, b"w:val").as_deref() != Some("restart");
                }
            }
            _ => {}
        }
    }

    fn push_run_text(&mut self, text: &str) {
        if let Some(ref mut run) = self.run {
            run.run.text.push_str(text);
        }
    }

    fn text(&mut self, text: &str) {
        self.push_run_text(text);
    }

    fn end(&mut self, name: &[u8]) {
        if let Some(depth) = self.skip_until {
            if self.depth == depth {
                self.skip_until = None;
            }
            self.depth -= 1;
            return;
        }

        match name {
            b"w:t" => self.in_text = false,
            b"w:rPr" => self.in_run_props = false,
            b"w:r" if self.run.as_ref().is_some_and(|r| r.depth == self.depth) => {
                self.finish_run();
            }
            b"w:p" if self.paragraph.as_ref().is_some_and(|p| p.depth == self.depth) => {
                self.finish_paragraph();
            }
            b"w:tc" if self.cell.as_ref().is_some_and(|c| c.depth == self.depth) => {
                self.finish_cell();
            }
            b"w:tr" if self.row.as_ref().is_some_and(|r| r.depth == self.depth) => {
                self.finish_row();
            }
            b"w:tbl" if self.table.as_ref().is_some_and(|t| t.depth == self.depth) => {
                if let Some(table) = self.table.take() {
                    self.elements
                        .push(BodyElement::Table(Table::from_rows(table.rows)));
                }
            }
            b"w:body" => self.body_depth = None,
            _ => {}
        }

        self.depth -= 1;
    }

    fn finish_run(&mut self) {
        self.in_run_props = false;
        self.in_text = false;
        let (Some(builder), Some(para)) = (self.run.take(), self.paragraph.as_mut()) else {
            return;
        };
        para.text.push_str(&builder.run.text);
        if builder.direct {
            para.runs.push(builder.run);
        }
    }

    fn finish_paragraph(&mut self) {
        let Some(para) = self.paragraph.take() else {
            return;
        };

        if let Some(ref mut cell) = self.cell {
            cell.paragraphs.push(para.text);
            return;
        }

        let style_name = self.styles.resolve(para.style_id.as_deref());
        let paragraph = Paragraph {
            style_name,
            runs: para.runs,
            text: para.text,
        };
        self.elements.push(BodyElement::Paragraph(paragraph));
    }

    fn finish_cell(&mut self) {
        let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) else {
            return;
        };

        let column = row.cells.len();
        let text = if cell.continues_merge {
            self.table
                .as_ref()
                .and_then(|t| t.previous_row.get(column).cloned())
                .unwrap_or_default()
        } else {
            cell.paragraphs.join("\n")
        };

        // A spanned cell occupies every grid column it covers
        for _ in 0..cell.grid_span {
            row.cells.push(text.clone());
        }
    }

    fn finish_row(&mut self) {
        let (Some(row), Some(table)) = (self.row.take(), self.table.as_mut()) else {
            return;
        };
        table.previous_row = row.cells.clone();
        table.rows.push(TableRow::new(row.cells));
    }
}
