//! DOCX text extraction: open the OOXML zip container and walk
//! `word/document.xml`, keeping run text and paragraph breaks.

use std::io::{Cursor, Read};

use async_trait::async_trait;
use bytes::Bytes;
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::documents::{run_blocking, DocumentFormat, ExtractError, TextExtractor};

const DOCUMENT_PART: &str = "word/document.xml";

/// Cap on the decompressed `word/document.xml`. The declared entry size is
/// not trusted.
pub const MAX_DOCUMENT_XML_BYTES: u64 = 32 * 1024 * 1024;

pub struct DocxExtractor;

#[async_trait]
impl TextExtractor for DocxExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, ExtractError> {
        run_blocking(DocumentFormat::Docx, move || {
            extract_docx_text(&bytes, MAX_DOCUMENT_XML_BYTES)
        })
        .await
    }
}

pub fn extract_docx_text(bytes: &[u8], max_xml_bytes: u64) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let part = match archive.by_name(DOCUMENT_PART) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingDocumentPart),
        Err(e) => return Err(e.into()),
    };

    let mut xml = Vec::new();
    part.take(max_xml_bytes + 1).read_to_end(&mut xml)?;
    if xml.len() as u64 > max_xml_bytes {
        return Err(ExtractError::DocumentTooLarge {
            limit: max_xml_bytes,
        });
    }
    body_text(&xml)
}

/// Collects run text (`t`, including CDATA). Tabs become spaces; line breaks
/// and paragraph ends become newlines. Elements are matched by local name so
/// any namespace prefix works.
fn body_text(xml: &[u8]) -> Result<String, ExtractError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(4096);
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| ExtractError::Xml(e.to_string()))?;

        match event {
            Event::Start(ref e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(ref e) => match e.local_name().as_ref() {
                b"t" => in_run_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"tab" => out.push(' '),
                b"br" | b"cr" | b"p" => out.push('\n'),
                _ => {}
            },
            Event::Text(ref e) if in_run_text => {
                let text = e.unescape().map_err(|e| ExtractError::Xml(e.to_string()))?;
                out.push_str(&text);
            }
            Event::CData(ref e) if in_run_text => {
                out.push_str(&String::from_utf8_lossy(e));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(out)
}
