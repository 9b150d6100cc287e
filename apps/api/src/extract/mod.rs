//! Document Extractor — turns an uploaded resume file into plain text.
//!
//! Supported formats: PDF (`pdf-extract`), DOCX (`docx-rs`), plain text.
//! No OCR, no layout preservation. A malformed file never panics the request;
//! every failure surfaces as a typed `ExtractError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type '{0}'")]
    UnsupportedFormat(String),

    #[error("no readable text found in file")]
    Empty,

    #[error("failed to extract text: {0}")]
    Malformed(String),
}

/// Declared type of an uploaded file, resolved from its filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Docx,
    Txt,
}

impl FileKind {
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let lower = filename.to_ascii_lowercase();
        if lower.ends_with(".pdf") {
            Ok(FileKind::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(FileKind::Docx)
        } else if lower.ends_with(".txt") {
            Ok(FileKind::Txt)
        } else {
            let ext = lower.rsplit('.').next().unwrap_or("").to_string();
            Err(ExtractError::UnsupportedFormat(ext))
        }
    }
}

/// Extracts plain text from a file's bytes.
///
/// PDF pages and DOCX paragraphs are concatenated in document order.
/// Returns `ExtractError::Empty` when the input is empty or yields only
/// whitespace (a zero-byte upload lands here).
pub fn extract_text(bytes: &[u8], kind: FileKind) -> Result<String, ExtractError> {
    if bytes.is_empty() {
        return Err(ExtractError::Empty);
    }

    let text = match kind {
        FileKind::Pdf => extract_pdf(bytes)?,
        FileKind::Docx => extract_docx(bytes)?,
        FileKind::Txt => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract chokes badly on non-PDF input; reject it before handing over.
    if !bytes.starts_with(b"%PDF") {
        return Err(ExtractError::Malformed("missing PDF header".to_string()));
    }
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Malformed(e.to_string()))
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let doc = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Malformed(format!("{e:?}")))?;

    let mut lines = Vec::new();
    for child in doc.document.children {
        if let docx_rs::DocumentChild::Paragraph(para) = child {
            let mut line = String::new();
            for pc in para.children {
                if let docx_rs::ParagraphChild::Run(run) = pc {
                    for rc in run.children {
                        if let docx_rs::RunChild::Text(t) = rc {
                            line.push_str(&t.text);
                        }
                    }
                }
            }
            lines.push(line);
        }
    }
    Ok(lines.join("\n"))
}
