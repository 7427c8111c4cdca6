//! Text decoding for delimited files.
//!
//! Spreadsheets exported on different machines arrive in whatever code page the
//! exporting program used. Decoding strategy:
//! - BOM detection (UTF-8, UTF-16 LE/BE)
//! - UTF-8 fast path with strict validation
//! - Fallback encoding detection using chardetng, decoded with replacement characters

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

/// Decode raw file bytes to a string, returning the encoding that was used.
pub fn decode_text(bytes: &[u8]) -> (String, &'static Encoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, _had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (decoded.into_owned(), encoding);
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return (text.to_string(), UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    let (decoded, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        tracing::debug!("replaced malformed sequences while decoding as {}", encoding.name());
    }
    (decoded.into_owned(), encoding)
}

/// Read a whole file and decode it with [`decode_text`].
pub fn read_text_file(path: &Path) -> std::io::Result<(String, &'static Encoding)> {
    let bytes = std::fs::read(path)?;
    Ok(decode_text(&bytes))
}
