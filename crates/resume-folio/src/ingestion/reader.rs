//! Paragraph reader for .docx resume files

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::ParsedDocument;

/// Archive member holding the main document body
const DOCUMENT_XML: &str = "word/document.xml";

/// Reads body paragraphs from .docx files
pub struct DocumentReader;

impl DocumentReader {
    /// Read a resume file into its non-empty, trimmed paragraphs
    ///
    /// Never fails: an unreadable file yields [`ParsedDocument::unreadable`].
    pub fn read(path: &str) -> ParsedDocument {
        match Self::try_read(Path::new(path)) {
            Ok(paragraphs) => {
                tracing::debug!("Read {} paragraphs from {}", paragraphs.len(), path);
                ParsedDocument::from_paragraphs(paragraphs)
            }
            Err(e) => {
                tracing::warn!("Unable to read resume file {}: {}", path, e);
                ParsedDocument::unreadable(path)
            }
        }
    }

    fn try_read(path: &Path) -> Result<Vec<String>> {
        let data = std::fs::read(path)?;
        let filename = path.display().to_string();

        match Self::parse_docx(&filename, &data) {
            Ok(paragraphs) => Ok(paragraphs),
            Err(e) => {
                tracing::debug!("docx-rs rejected {}: {}, trying raw XML", filename, e);
                Self::parse_docx_xml(&filename, &data)
            }
        }
    }

    /// Parse DOCX document with the structured reader
    pub fn parse_docx(filename: &str, data: &[u8]) -> Result<Vec<String>> {
        let doc = docx_rs::read_docx(data)
            .map_err(|e| Error::file_parse(filename, e.to_string()))?;

        let mut paragraphs = Vec::new();

        for child in &doc.document.children {
            // Body paragraphs only; tables and section content are skipped
            if let docx_rs::DocumentChild::Paragraph(p) = child {
                let mut text = String::new();
                collect_paragraph_text(&p.children, &mut text);
                push_trimmed(&mut paragraphs, &text);
            }
        }

        Ok(paragraphs)
    }

    /// Fallback: stream `word/document.xml` straight out of the archive
    pub fn parse_docx_xml(filename: &str, data: &[u8]) -> Result<Vec<String>> {
        let cursor = std::io::Cursor::new(data);
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| Error::file_parse(filename, e.to_string()))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_XML)
            .map_err(|e| Error::file_parse(filename, e.to_string()))?
            .read_to_string(&mut xml)?;

        extract_paragraphs_from_xml(&xml).map_err(|message| Error::file_parse(filename, message))
    }
}

fn collect_paragraph_text(children: &[docx_rs::ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                for child in &run.children {
                    match child {
                        docx_rs::RunChild::Text(t) => out.push_str(&t.text),
                        docx_rs::RunChild::Tab(_) => out.push('\t'),
                        docx_rs::RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => collect_paragraph_text(&link.children, out),
            _ => {}
        }
    }
}

fn push_trimmed(paragraphs: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
}

/// Extract body paragraph text from WordprocessingML
///
/// Text is taken from `<w:t>` elements; `<w:tab/>` and `<w:br/>` become
/// whitespace. Paragraphs nested in tables are skipped.
fn extract_paragraphs_from_xml(xml: &str) -> std::result::Result<Vec<String>, String> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut table_depth = 0usize;
    let mut paragraph_depth = 0usize;
    let mut in_text_element = false;
    let mut current = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" => {
                    if paragraph_depth == 0 {
                        current.clear();
                    }
                    paragraph_depth += 1;
                }
                b"t" => in_text_element = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if paragraph_depth > 0 && table_depth == 0 {
                    match e.local_name().as_ref() {
                        b"tab" => current.push('\t'),
                        b"br" | b"cr" => current.push('\n'),
                        _ => {}
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_text_element && paragraph_depth > 0 && table_depth == 0 {
                    let text = e.unescape().map_err(|e| e.to_string())?;
                    current.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"p" => {
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                    if paragraph_depth == 0 && table_depth == 0 {
                        push_trimmed(&mut paragraphs, &current);
                    }
                }
                b"t" => in_text_element = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("Malformed document XML: {}", e)),
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use docx_rs::{
        BreakType, Docx, Hyperlink, HyperlinkType, Paragraph, Run, Table, TableCell, TableRow,
    };
    use std::io::Write;
    use std::path::PathBuf;

    /// Write a .docx with one paragraph per entry ("" gives an empty paragraph)
    pub(crate) fn write_docx(dir: &Path, name: &str, paragraphs: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let file = std::fs::File::create(&path).unwrap();
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        docx.build().pack(file).unwrap();
        path
    }

    #[test]
    fn test_read_docx_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_docx(
            dir.path(),
            "resume.docx",
            &["  Jane Doe  ", "", "   ", "Software engineer"],
        );

        let doc = DocumentReader::read(path.to_str().unwrap());
        assert_eq!(doc.title, "Jane Doe");
        assert_eq!(doc.paragraphs, vec!["Jane Doe", "Software engineer"]);
    }

    #[test]
    fn test_empty_docx_uses_fallback_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_docx(dir.path(), "empty.docx", &["", " "]);

        let doc = DocumentReader::read(path.to_str().unwrap());
        assert_eq!(doc.title, "Resume");
        assert!(doc.paragraphs.is_empty());
    }

    #[test]
    fn test_table_paragraphs_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.docx");
        let file = std::fs::File::create(&path).unwrap();
        let table = Table::new(vec![TableRow::new(vec![TableCell::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("In a cell")))])]);
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Body text")))
            .add_table(table)
            .build()
            .pack(file)
            .unwrap();

        let doc = DocumentReader::read(path.to_str().unwrap());
        assert_eq!(doc.paragraphs, vec!["Body text"]);
    }

    #[test]
    fn test_missing_file_yields_placeholder() {
        let doc = DocumentReader::read("/definitely/not/here.docx");
        assert_eq!(doc.title, "Resume");
        assert_eq!(doc.paragraphs.len(), 1);
        assert!(doc.paragraphs[0].contains("/definitely/not/here.docx"));
    }

    #[test]
    fn test_corrupt_file_yields_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let doc = DocumentReader::read(path.to_str().unwrap());
        assert_eq!(
            doc.paragraphs,
            vec![format!("Unable to read resume file: {}", path.display())]
        );
    }

    #[test]
    fn test_extract_paragraphs_from_xml() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space="preserve"> Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>   </w:t></w:r></w:p>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:p><w:r><w:t>Skills</w:t><w:tab/><w:t>Rust &amp; Go</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let paragraphs = extract_paragraphs_from_xml(xml).unwrap();
        assert_eq!(paragraphs, vec!["Jane Doe", "Skills\tRust & Go"]);
    }

    #[test]
    fn test_hyperlink_text_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("links.docx");
        let file = std::fs::File::create(&path).unwrap();
        let link = Hyperlink::new("https://github.com/jane", HyperlinkType::External)
            .add_run(Run::new().add_text("github.com/jane"));
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("GitHub: "))
                    .add_hyperlink(link),
            )
            .build()
            .pack(file)
            .unwrap();

        let doc = DocumentReader::read(path.to_str().unwrap());
        assert_eq!(doc.paragraphs, vec!["Jane Doe", "GitHub: github.com/jane"]);
    }

    #[test]
    fn test_tabs_and_breaks_become_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.docx");
        let file = std::fs::File::create(&path).unwrap();
        Docx::new()
            .add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("Skills").add_tab().add_text("Rust")),
            )
            .add_paragraph(
                Paragraph::new().add_run(
                    Run::new()
                        .add_text("Line one")
                        .add_break(BreakType::TextWrapping)
                        .add_text("Line two"),
                ),
            )
            .build()
            .pack(file)
            .unwrap();

        let doc = DocumentReader::read(path.to_str().unwrap());
        assert_eq!(doc.paragraphs, vec!["Skills\tRust", "Line one\nLine two"]);
    }

    #[test]
    fn test_bare_document_xml_archive_is_read() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p><w:r><w:t>Project: Folio</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bare.docx");
        let mut zip = zip::ZipWriter::new(std::fs::File::create(&path).unwrap());
        zip.start_file(DOCUMENT_XML, zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(xml.as_bytes()).unwrap();
        zip.finish().unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(
            DocumentReader::parse_docx_xml("bare.docx", &data).unwrap(),
            vec!["Jane Doe", "Project: Folio"]
        );

        let doc = DocumentReader::read(path.to_str().unwrap());
        assert_eq!(doc.title, "Jane Doe");
        assert_eq!(doc.paragraphs, vec!["Jane Doe", "Project: Folio"]);
    }
}
