//! Raw document bytes → plain text.
//!
//! No OCR and no layout reconstruction: PDF pages and DOCX paragraphs are
//! concatenated in document order.

use std::fmt;
use std::io::{Cursor, Read};
use std::str::FromStr;

use bytes::Bytes;
use lopdf::Document;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AnalysisError;

const DOCX_BODY_PART: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }

    /// Resolves the format from an upload filename's extension.
    pub fn from_filename(filename: &str) -> Result<Self, AnalysisError> {
        let (_, ext) = filename
            .rsplit_once('.')
            .ok_or_else(|| AnalysisError::UnsupportedFormat(filename.to_string()))?;
        ext.parse()
    }
}

impl FromStr for DocumentFormat {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            other => Err(AnalysisError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uploaded bytes plus their declared format. Lives for one extraction call.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub format: DocumentFormat,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Bytes>, format: DocumentFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }

    pub fn extract_text(&self) -> Result<String, AnalysisError> {
        extract_text(&self.bytes, self.format)
    }
}

/// Extracts plain text, failing with `UnreadableDocument` when the bytes are
/// not a valid container of the declared format.
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, AnalysisError> {
    match format {
        DocumentFormat::Pdf => extract_pdf_text(bytes),
        DocumentFormat::Docx => extract_docx_text(bytes),
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, AnalysisError> {
    let doc = Document::load_mem(bytes).map_err(|e| AnalysisError::unreadable("pdf", e))?;

    let mut text = String::new();
    for page_num in doc.get_pages().keys() {
        // A page without decodable text contributes nothing.
        match doc.extract_text(&[*page_num]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!(page = page_num, error = %e, "PDF page has no extractable text"),
        }
    }
    Ok(text)
}

fn extract_docx_text(bytes: &[u8]) -> Result<String, AnalysisError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| AnalysisError::unreadable("docx", e))?;

    let mut xml = String::new();
    let mut part = archive
        .by_name(DOCX_BODY_PART)
        .map_err(|e| AnalysisError::unreadable("docx", format!("missing {DOCX_BODY_PART}: {e}")))?;
    part.read_to_string(&mut xml)
        .map_err(|e| AnalysisError::unreadable("docx", e))?;

    Ok(docx_paragraphs(&xml)?.join("\n"))
}

/// Paragraph texts of a WordprocessingML body, in document order.
/// Paragraphs nested inside another paragraph (text boxes) fold into the outer one.
/// `mc:Fallback` repeats its `mc:Choice` sibling for older readers and is skipped.
fn docx_paragraphs(xml: &str) -> Result<Vec<String>, AnalysisError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => depth += 1,
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                b"mc:Fallback" => {
                    let end = e.to_end().into_owned();
                    reader
                        .read_to_end(end.name())
                        .map_err(|err| AnalysisError::unreadable("docx", err))?;
                }
                _ => {}
            },
            // Tab stops under w:pPr are also `w:tab`; only runs carry text.
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" if depth == 0 => paragraphs.push(String::new()),
                b"w:tab" if run_depth > 0 => current.push('\t'),
                b"w:br" | b"w:cr" if run_depth > 0 => current.push('\n'),
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(t)) if in_text && depth > 0 => {
                let text = t
                    .unescape()
                    .map_err(|e| AnalysisError::unreadable("docx", e))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(AnalysisError::unreadable("docx", e)),
            _ => {}
        }
    }

    Ok(paragraphs)
}
