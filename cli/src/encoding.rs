// Character encoding detection for Sedra export files.
// The export is plain ASCII in practice, older copies were saved with a
// Windows code page, some editors add a UTF-8 BOM.

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use std::fs;
use std::path::Path;

use sedra_backend::logger;

/// Reads a Sedra text file as UTF-8. Line endings are kept as they are,
/// the record parsers accept both CRLF and LF.
pub fn read_sedra_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;

    let (encoding, bom_len) = detect_encoding(&bytes);

    logger::debug(&format!(
        "File: {:?}, Encoding: {}, BOM: {}",
        path.file_name().unwrap_or_default(),
        encoding.name(),
        bom_len > 0
    ));

    let (decoded, _encoding_used, had_errors) = encoding.decode(&bytes[bom_len..]);

    if had_errors {
        logger::warn(&format!("Encoding errors detected while decoding {:?}", path));
    }

    Ok(decoded.into_owned())
}

/// Returns the encoding and the length of its BOM. Files without a BOM are
/// UTF-8 when they validate as such, otherwise Windows-1252.
fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, usize) {
    // UTF-8 BOM: 0xEF 0xBB 0xBF
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return (UTF_8, 3);
    }

    if std::str::from_utf8(bytes).is_ok() {
        (UTF_8, 0)
    } else {
        (WINDOWS_1252, 0)
    }
}
