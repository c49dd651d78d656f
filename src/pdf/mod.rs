//! Remote PDF text extraction
//!
//! Fetches a PDF over HTTP and extracts its text, page count, and document
//! information dictionary. No chunking and no size limits; the whole file
//! is buffered for the parse.

use lopdf::{Document, Object};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::PdfError;

/// Document information fields read from the trailer `Info` dictionary
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct PdfInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
}

/// Result of a successful extraction
#[derive(Debug, Serialize)]
pub struct PdfExtract {
    pub text: String,
    pub pages: usize,
    pub info: PdfInfo,
}

/// Fetch `url` and extract its text and metadata.
pub async fn fetch_and_extract(
    client: &reqwest::Client,
    url: &str,
) -> Result<PdfExtract, PdfError> {
    info!(url = %url, "Fetching remote PDF");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(PdfError::FetchStatus(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    debug!(len = bytes.len(), "Fetched PDF bytes");
    extract(&bytes)
}

/// Parse PDF bytes and pull out text, page count, and info metadata.
pub fn extract(bytes: &[u8]) -> Result<PdfExtract, PdfError> {
    let document = Document::load_mem(bytes)?;

    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    let pages = page_numbers.len();
    let text = document.extract_text(&page_numbers)?;

    Ok(PdfExtract {
        text,
        pages,
        info: read_info(&document),
    })
}

fn read_info(document: &Document) -> PdfInfo {
    let Ok(info_object) = document.trailer.get(b"Info") else {
        return PdfInfo::default();
    };
    // Info is usually an indirect reference, occasionally inline
    let dict = match info_object {
        Object::Reference(id) => document
            .get_object(*id)
            .ok()
            .and_then(|obj| obj.as_dict().ok()),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    };
    let Some(dict) = dict else {
        return PdfInfo::default();
    };

    let field = |key: &[u8]| {
        dict.get(key)
            .ok()
            .and_then(|obj| obj.as_str().ok())
            .map(decode_pdf_string)
    };

    PdfInfo {
        title: field(b"Title"),
        author: field(b"Author"),
        subject: field(b"Subject"),
        producer: field(b"Producer"),
    }
}

/// Decode a PDF text string: UTF-16BE when BOM-prefixed, latin-ish otherwise.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
