//! File-level encode and decode, shared by the one-shot subcommands and the
//! interactive prompt.

use std::path::Path;

use huffman_text_core::stats::CompressionStats;
use huffman_text_core::{encode, Compressed, Result};

use crate::files;

/// Encode the text at `text_path`, writing its scheme and packed payload.
pub fn encode_file(
    text_path: &Path,
    scheme_path: &Path,
    encoded_path: &Path,
) -> Result<CompressionStats> {
    let mut stats = CompressionStats::new();

    let text = files::read_text(text_path)?;
    stats.record_input(&text);

    let encoding = encode(&text)?;
    let compressed = Compressed::from(&encoding);
    stats.record_output(&encoding, &compressed);

    files::write_text(scheme_path, &compressed.scheme)?;
    files::write_bytes(encoded_path, &compressed.payload)?;
    stats.complete();

    log::info!(
        "encoded {} -> {} ({} bytes) + {} ({} bytes)",
        text_path.display(),
        encoded_path.display(),
        stats.packed_bytes,
        scheme_path.display(),
        stats.scheme_bytes
    );
    Ok(stats)
}

/// Decode the payload at `encoded_path` with the scheme at `scheme_path`,
/// writing the text to `text_path`. Returns the number of chars decoded.
pub fn decode_file(scheme_path: &Path, encoded_path: &Path, text_path: &Path) -> Result<usize> {
    let scheme = files::read_text(scheme_path)?;
    let payload = files::read_bytes(encoded_path)?;

    let text = huffman_text_core::decompress(&scheme, &payload)?;
    files::write_text(text_path, &text)?;

    let chars = text.chars().count();
    log::info!("decoded {} chars into {}", chars, text_path.display());
    Ok(chars)
}
