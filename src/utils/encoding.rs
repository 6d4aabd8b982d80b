//! Text file reading with BOM handling and encoding fallback.
//!
//! `.env` and YAML files are expected to be UTF-8, but editors on some
//! platforms still save them with a BOM or in a legacy code page. Files are
//! read fully in one call and the handle is dropped immediately.

use anyhow::{Context, Result};
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::path::Path;

/// Read `path` as text.
///
/// Strategy:
/// 1. BOM markers (UTF-8, UTF-16 LE/BE) select the decoder and are stripped
/// 2. Strict UTF-8 fast path
/// 3. `chardetng` guess, decoded with replacement characters
pub fn read_text_file(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let (content, encoding) = decode_bytes(&bytes);
    if encoding != UTF_8 {
        tracing::debug!("decoded {} as {}", path.display(), encoding.name());
    }
    Ok(content)
}

/// Decode raw bytes, returning the text and the encoding that was used.
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static Encoding) {
    if let Some(rest) = bytes.strip_prefix(&[0xef, 0xbb, 0xbf]) {
        return (String::from_utf8_lossy(rest).into_owned(), UTF_8);
    }
    if bytes.starts_with(&[0xff, 0xfe]) {
        let (cow, _) = UTF_16LE.decode_with_bom_removal(bytes);
        return (cow.into_owned(), UTF_16LE);
    }
    if bytes.starts_with(&[0xfe, 0xff]) {
        let (cow, _) = UTF_16BE.decode_with_bom_removal(bytes);
        return (cow.into_owned(), UTF_16BE);
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (cow, _, _) = encoding.decode(bytes);
    (cow.into_owned(), encoding)
}
