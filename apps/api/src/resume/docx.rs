//! Text of a `.docx` upload: the `word/document.xml` part of the zip package,
//! one line per paragraph. Formatting, headers and footers are ignored.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::resume::extract::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn document_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Unreadable(format!("not a .docx package: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Unreadable(format!("missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Unreadable(format!("{DOCUMENT_PART}: {e}")))?;

    paragraphs_text(&xml)
}

/// Collects `w:t` run text. `w:tab` and `w:br` inside a run become a tab and
/// a line break; every paragraph ends with a newline.
fn paragraphs_text(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" => in_text = in_run,
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" if in_run => text.push('\t'),
                b"br" | b"cr" if in_run => text.push('\n'),
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => text.push_str(&t.unescape().map_err(malformed)?),
            Ok(Event::Eof) => break,
            Err(e) => return Err(malformed(e)),
            _ => {}
        }
    }

    Ok(text)
}

fn malformed(e: quick_xml::Error) -> ExtractError {
    ExtractError::Unreadable(format!("malformed {DOCUMENT_PART}: {e}"))
}
