use std::io::{Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};

use super::PngError;

/// Concatenates the scanlines into one zlib stream at the default level.
pub fn compress_scanlines(scanlines: &[Vec<u8>]) -> Result<Vec<u8>, PngError> {
    let mut e = ZlibEncoder::new(Vec::new(), Compression::default());

    for scanline in scanlines {
        e.write_all(scanline)?;
    }

    let compressed = e.finish()?;
    tracing::debug!(
        scanlines = scanlines.len(),
        compressed_len = compressed.len(),
        "scanlines compressed"
    );

    Ok(compressed)
}

pub fn uncompress_scanlines(compressed: &[u8]) -> Result<Vec<u8>, PngError> {
    let mut decoder = ZlibDecoder::new(compressed);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|err| PngError::Decompress(err.to_string()))?;

    Ok(inflated)
}
