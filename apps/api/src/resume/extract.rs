//! Resume text extraction.
//!
//! PDF goes through `pdf-extract`, `.docx` through the `docx` module, plain
//! text is read as UTF-8. Legacy binary Word (`.doc`) is rejected.

use thiserror::Error;

use crate::resume::docx;

/// Fewer non-whitespace characters than this means nothing usable was extracted
/// (typically a scanned, image-only PDF).
const MIN_TEXT_CHARS: usize = 20;

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const DOC_MIME: &str = "application/msword";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Unreadable file: {0}")]
    Unreadable(String),

    #[error("Too little text extracted")]
    TooLittleText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Pdf,
    Docx,
    PlainText,
}

impl ResumeFormat {
    /// Picks the format from the declared content type, falling back to the
    /// file extension when the type is missing or generic.
    pub fn detect(
        content_type: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Self, ExtractError> {
        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

        if let Some(mime) = mime {
            return Self::from_mime(&mime);
        }

        let extension = file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("pdf") => Ok(ResumeFormat::Pdf),
            Some("docx") => Ok(ResumeFormat::Docx),
            Some("txt") | Some("text") => Ok(ResumeFormat::PlainText),
            Some("doc") => Err(legacy_word()),
            Some(other) => Err(ExtractError::UnsupportedType(format!(".{other}"))),
            None => Err(ExtractError::UnsupportedType("unknown".to_string())),
        }
    }

    pub fn from_mime(mime: &str) -> Result<Self, ExtractError> {
        match mime {
            "application/pdf" => Ok(ResumeFormat::Pdf),
            DOCX_MIME => Ok(ResumeFormat::Docx),
            "text/plain" => Ok(ResumeFormat::PlainText),
            DOC_MIME => Err(legacy_word()),
            other => Err(ExtractError::UnsupportedType(other.to_string())),
        }
    }
}

fn legacy_word() -> ExtractError {
    ExtractError::UnsupportedType("legacy .doc (save the resume as .docx or PDF)".to_string())
}

/// Extracts the text of an uploaded resume. CPU-bound for PDF and `.docx`;
/// call it from a blocking task.
pub fn extract_text(bytes: &[u8], format: ResumeFormat) -> Result<String, ExtractError> {
    let text = match format {
        ResumeFormat::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Unreadable(e.to_string()))?,
        ResumeFormat::Docx => docx::document_text(bytes)?,
        ResumeFormat::PlainText => std::str::from_utf8(bytes)
            .map_err(|_| ExtractError::Unreadable("text file is not valid UTF-8".to_string()))?
            .to_string(),
    };

    if meaningful_chars(&text) < MIN_TEXT_CHARS {
        return Err(ExtractError::TooLittleText);
    }
    Ok(text)
}

fn meaningful_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
