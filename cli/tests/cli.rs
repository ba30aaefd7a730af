use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const DOCUMENT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Login</w:t></w:r></w:p>
    <w:p><w:r><w:t>Users sign in with email.</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>
</w:styles>"#;

fn write_docx(path: &Path) {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(DOCUMENT_XML.as_bytes()).unwrap();
    zip.start_file("word/styles.xml", options).unwrap();
    zip.write_all(STYLES_XML.as_bytes()).unwrap();
    fs::write(path, zip.finish().unwrap().into_inner()).unwrap();
}

#[test]
fn test_convert_success() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("Login Flow.docx");
    write_docx(&input);
    let docs = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.arg(&input)
        .arg("-c")
        .arg("functional")
        .arg("--docs-dir")
        .arg(&docs);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Successfully converted document!"))
        .stdout(predicate::str::contains("Output saved to:"))
        .stdout(predicate::str::contains("Login_Flow.md"));

    let markdown = fs::read_to_string(docs.join("functional").join("Login_Flow.md")).unwrap();
    assert!(markdown.starts_with("---\ntitle: \"Login Flow\"\n"));
    assert!(markdown.contains("# Login\n"));
    assert!(markdown.contains("Users sign in with email.\n"));
}

#[test]
fn test_output_name_and_default_docs_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_docx(&dir.path().join("in.docx"));

    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.current_dir(dir.path())
        .env_remove("DOCX_MD_DOCS_DIR")
        .args(["in.docx", "--category", "architecture", "-o", "overview"]);

    cmd.assert().success();
    assert!(dir.path().join("docs/architecture/overview.md").exists());
}

#[test]
fn test_docs_dir_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("api.docx");
    write_docx(&input);
    let docs = dir.path().join("from-env");

    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.env("DOCX_MD_DOCS_DIR", &docs)
        .arg(&input)
        .args(["-c", "technical"]);

    cmd.assert().success();
    assert!(docs.join("technical/api.md").exists());
}

#[test]
fn test_missing_input() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.current_dir(dir.path())
        .args(["missing.docx", "-c", "technical"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Input file not found"));
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "hello").unwrap();

    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.arg(&input).args(["-c", "technical"]);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Input file must be a .docx file"));
}

#[test]
fn test_corrupt_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.docx");
    fs::write(&input, "not a zip").unwrap();

    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.arg(&input)
        .args(["-c", "architecture", "--docs-dir"])
        .arg(dir.path().join("docs"));

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Conversion failed"));
}

#[test]
fn test_unknown_category_rejected() {
    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.args(["input.docx", "-c", "marketing"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("marketing"));
}

#[test]
fn test_category_required() {
    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.arg("input.docx");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--category"));
}

#[test]
fn test_help_lists_categories() {
    let mut cmd = cargo_bin_cmd!("docx-md");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Document Categories:"))
        .stdout(predicate::str::contains("Features, requirements, and user stories"));
}
