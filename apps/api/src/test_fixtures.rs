//! In-memory document builders and sample texts shared by unit tests.

use std::io::{Cursor, Write};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use zip::write::SimpleFileOptions;

use crate::extraction::fields::extract_fields;
use crate::models::analysis::AnalysisPayload;
use crate::scoring::resume::score_resume;

/// A resume that exercises every field extractor.
pub const SAMPLE_RESUME: &str = "Jane Doe
Email: jane.doe@example.com
Phone: +1 555-123-4567

Summary
Backend engineer with 4 years of Python and 2 yrs of Docker experience.

Skills: Python, Django, PostgreSQL, Docker, AWS, Git

Education
Bachelor of Technology in Computer Science, State University, 2018
CGPA: 8.7
";

/// Zip archive with the given `(path, contents)` entries.
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (path, contents) in entries {
        writer
            .start_file(*path, SimpleFileOptions::default())
            .expect("start zip entry");
        writer
            .write_all(contents.as_bytes())
            .expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// Minimal DOCX whose `word/document.xml` body is `body_xml`.
pub fn build_docx(body_xml: &str) -> Vec<u8> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body_xml}</w:body></w:document>"#
    );
    build_zip(&[
        ("[Content_Types].xml", "<Types/>"),
        ("word/document.xml", &document),
    ])
}

/// One `<w:p>` per line; empty lines become self-closing paragraphs.
pub fn docx_body(lines: &[&str]) -> String {
    lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                "<w:p/>".to_string()
            } else {
                format!("<w:p><w:r><w:t>{line}</w:t></w:r></w:p>")
            }
        })
        .collect()
}

/// Single-font PDF with one page per entry; `None` yields a page with an
/// empty content stream.
pub fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let operations = match page {
            Some(text) => vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
            None => vec![],
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).expect("save pdf");
    out
}

/// A resume analysis payload built from `SAMPLE_RESUME`.
pub fn resume_payload(filename: &str) -> AnalysisPayload {
    let parsed_data = extract_fields(SAMPLE_RESUME.to_string());
    let analysis = score_resume(&parsed_data);
    AnalysisPayload::Resume {
        filename: filename.to_string(),
        parsed_data,
        analysis,
    }
}
