//! File collaborators: read and write the texts, schemes and payloads.
//!
//! Writes create the file if needed and overwrite existing content.

use std::fs;
use std::path::Path;

use huffman_text_core::Result;

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    log::debug!("read {} bytes of text from {}", text.len(), path.display());
    Ok(text)
}

/// Read a binary file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    write_bytes(path, text.as_bytes())
}

pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
