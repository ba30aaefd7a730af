//! Integration tests for the converter.

mod common;

use chrono::NaiveDate;
use docx_md::{parse_bytes, parse_file, BodyElement, Category, ConvertOptions, Error, WordToMarkdown};

use common::{build_docx, para, table, write_docx, STYLES};

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn converter(category: Category, docs_root: &std::path::Path) -> WordToMarkdown {
    let options = ConvertOptions::new()
        .with_docs_root(docs_root)
        .with_created_date(fixed_date());
    WordToMarkdown::with_options(category, options)
}

#[test]
fn test_end_to_end_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let body = [
        para("Title", "Billing Service"),
        para("Heading1", "Overview"),
        r#"<w:p><w:r><w:t xml:space="preserve">Calls </w:t></w:r><w:r><w:rPr><w:rFonts w:ascii="Courier New"/><w:b/></w:rPr><w:t>charge()</w:t></w:r></w:p>"#.to_string(),
        para("Normal", "   "),
        table(&[&["Field", "Type"], &["id", "u64 | null"]]),
        para("ListNumber", "Validate"),
        para("ListNumber", "Persist"),
    ]
    .concat();
    let input = write_docx(dir.path(), "Billing Service.docx", &body);
    let docs = dir.path().join("docs");

    let result = converter(Category::Technical, &docs)
        .convert(&input, None)
        .unwrap();

    assert_eq!(
        result.output_path,
        docs.join("technical").join("Billing_Service.md")
    );

    let expected = concat!(
        "---\n",
        "title: \"Billing Service\"\n",
        "category: \"technical\"\n",
        "type: \"Technical Document\"\n",
        "created_date: \"2024-06-15\"\n",
        "source_file: \"Billing Service.docx\"\n",
        "---\n\n",
        "\n",
        "\n> **Document Type**: Technical Document\n>\n",
        "> This document describes the technical implementation, APIs, and configurations.\n\n",
        "---\n\n",
        "\n",
        "# Billing Service\n",
        "\n",
        "# Overview\n",
        "\n",
        "Calls `**charge()**`\n",
        "\n",
        "\n",
        "\n",
        "| Field | Type |\n| --- | --- |\n| id | u64 \\| null |\n",
        "\n",
        "\n",
        "\n",
        "1. Validate\n",
        "\n",
        "1. Persist\n",
    );
    assert_eq!(result.markdown, expected);
    assert_eq!(std::fs::read_to_string(&result.output_path).unwrap(), expected);
    assert_eq!(result.stats.empty_paragraph_count, 1);
    assert_eq!(result.stats.list_item_count, 2);
}

#[test]
fn test_custom_output_name_is_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_docx(dir.path(), "in.docx", &para("Normal", "text"));
    let docs = dir.path().join("docs");

    let result = converter(Category::Functional, &docs)
        .convert(&input, Some("My Report!"))
        .unwrap();

    assert_eq!(result.output_path, docs.join("functional").join("My_Report_.md"));
    assert!(result.output_path.exists());
}

#[test]
fn test_existing_output_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    let target = docs.join("architecture");
    std::fs::create_dir_all(&target).unwrap();
    std::fs::write(target.join("c4.md"), "stale").unwrap();

    let input = write_docx(dir.path(), "c4.docx", &para("Heading2", "Containers"));
    let result = converter(Category::Architecture, &docs)
        .convert(&input, None)
        .unwrap();

    let written = std::fs::read_to_string(result.output_path).unwrap();
    assert!(written.contains("## Containers\n"));
    assert!(!written.contains("stale"));
}

#[test]
fn test_missing_input_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");

    let err = converter(Category::Technical, &docs)
        .convert(dir.path().join("absent.docx"), None)
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
    assert!(err.to_string().contains("absent.docx"));
    assert!(!docs.exists());
}

#[test]
fn test_wrong_extension_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    let input = dir.path().join("notes.DOC");
    std::fs::write(&input, build_docx("", None)).unwrap();

    let err = converter(Category::Technical, &docs)
        .convert(&input, None)
        .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert_eq!(err.to_string(), "Input file must be a .docx file");
    assert!(!docs.exists());
}

#[test]
fn test_uppercase_extension_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_docx(dir.path(), "UPPER.DOCX", &para("Normal", "ok"));

    let result = converter(Category::Technical, &dir.path().join("docs"))
        .convert(&input, None)
        .unwrap();
    assert!(result.output_path.ends_with("UPPER.md"));
}

#[test]
fn test_malformed_package_is_conversion_failure() {
    let dir = tempfile::tempdir().unwrap();
    let docs = dir.path().join("docs");
    let input = dir.path().join("broken.docx");
    std::fs::write(&input, "this is not a zip archive").unwrap();

    let err = converter(Category::Functional, &docs)
        .convert(&input, None)
        .unwrap_err();

    assert!(matches!(err, Error::ConversionFailed(_)));
    assert!(!docs.exists());
}

#[test]
fn test_package_without_document_part() {
    let mut zip = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    zip.start_file("word/styles.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    std::io::Write::write_all(&mut zip, STYLES.as_bytes()).unwrap();
    let bytes = zip.finish().unwrap().into_inner();

    let err = parse_bytes(&bytes).unwrap_err();
    assert!(matches!(err, Error::MissingPart(ref p) if p == "word/document.xml"));
}

#[test]
fn test_conversion_is_deterministic_with_fixed_date() {
    let dir = tempfile::tempdir().unwrap();
    let body = [para("Heading1", "A"), table(&[&["x"]]), para("Normal", "b")].concat();
    let input = write_docx(dir.path(), "det.docx", &body);

    let first = converter(Category::Architecture, &dir.path().join("one"))
        .convert(&input, None)
        .unwrap();
    let second = converter(Category::Architecture, &dir.path().join("two"))
        .convert(&input, None)
        .unwrap();

    assert_eq!(first.markdown, second.markdown);
}

#[test]
fn test_parse_file_preserves_styles_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let body = [
        para("Subtitle", "Draft"),
        table(&[&["a", "b"]]),
        para("Unknown", "falls back"),
        "<w:p/>".to_string(),
    ]
    .concat();
    let input = write_docx(dir.path(), "order.docx", &body);

    let doc = parse_file(&input).unwrap();
    assert_eq!(doc.len(), 4);

    match &doc.elements[0] {
        BodyElement::Paragraph(p) => assert_eq!(p.style(), "Subtitle"),
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(doc.elements[1], BodyElement::Table(_)));
    match &doc.elements[2] {
        BodyElement::Paragraph(p) => {
            assert_eq!(p.style(), "Normal");
            assert_eq!(p.text, "falls back");
        }
        other => panic!("unexpected {:?}", other),
    }
    match &doc.elements[3] {
        BodyElement::Paragraph(p) => assert!(p.is_empty()),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_package_without_styles() {
    let bytes = build_docx(&para("Heading1", "Raw id"), None);
    let doc = parse_bytes(&bytes).unwrap();

    match &doc.elements[0] {
        BodyElement::Paragraph(p) => assert_eq!(p.style_name, None),
        other => panic!("unexpected {:?}", other),
    }
}
