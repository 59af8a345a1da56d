use binary_utils::read_bytes;
use chunks::{check_chunk_length, idat::Idat, iend::Iend, ihdr::Ihdr, Chunk};
use consts::{IDAT_CHUNK_TYPE, IEND_CHUNK_TYPE, PNG_SIGNATURE};
use crc::CrcCalculator;
use deflate::{compress_scanlines, uncompress_scanlines};
use thiserror::Error;

mod binary_utils;
pub mod chunks;
mod color_type;
pub mod consts;
mod crc;
pub mod deflate;

#[derive(Debug, Error)]
pub enum PngError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unexpected end of data: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },
    #[error("file does not appear to be a png file (signature missing)")]
    BadSignature,
    #[error("crc mismatch in {chunk_type} chunk: computed {expected:#010x}, stored {found:#010x}")]
    CrcMismatch {
        chunk_type: String,
        expected: u32,
        found: u32,
    },
    #[error("expected {expected} chunk, found {found}")]
    UnexpectedChunk {
        expected: &'static str,
        found: String,
    },
    #[error("chunk payload of {length} bytes exceeds the 2^31-1 byte limit")]
    ChunkTooLarge { length: usize },
    #[error("invalid IHDR: {0}")]
    InvalidIhdr(String),
    #[error("unrecognized color type {0}")]
    UnrecognizedColorType(u8),
    #[error("zlib stream could not be inflated: {0}")]
    Decompress(String),
    #[error("fixture mismatch: {0}")]
    FixtureMismatch(String),
}

#[macro_export]
macro_rules! png_assert {
    ($assert_value:expr, $err:expr) => {
        if !$assert_value {
            return Err($err);
        }
    };
}

/// A PNG read back chunk by chunk: the header and the inflated image data.
#[derive(Debug)]
pub struct InspectedPng {
    pub ihdr: Ihdr,
    pub idat_chunks: usize,
    pub filtered_scanlines: Vec<u8>,
}

/// Signature, IHDR, the whole compressed stream as a single IDAT, IEND.
pub fn encode_png(ihdr: &Ihdr, scanlines: &[Vec<u8>]) -> Result<Vec<u8>, PngError> {
    let mut crc = CrcCalculator::new();
    let compressed_data = compress_scanlines(scanlines)?;
    check_chunk_length(compressed_data.len())?;

    let mut encoded_png: Vec<u8> = Vec::with_capacity(compressed_data.len() + 64);
    encoded_png.extend_from_slice(PNG_SIGNATURE);
    encoded_png.extend_from_slice(&ihdr.to_bytes(&mut crc));
    encoded_png.extend_from_slice(&Idat::encode_bytes(&compressed_data, &mut crc));
    encoded_png.extend_from_slice(&Iend::to_bytes(&mut crc));

    tracing::debug!(
        width = ihdr.width,
        height = ihdr.height,
        idat_len = compressed_data.len(),
        total_len = encoded_png.len(),
        "png encoded"
    );

    Ok(encoded_png)
}

/// Walks every chunk, checking its CRC, and inflates the IDAT stream.
///
/// Only IHDR, IDAT and IEND are accepted. Scanlines are returned still
/// filtered; nothing past IEND is read.
pub fn inspect_png(bytes: &[u8]) -> Result<InspectedPng, PngError> {
    let mut offset: usize = 0;
    let mut crc = CrcCalculator::new();
    let signature = read_bytes(&mut offset, bytes, PNG_SIGNATURE.len())
        .map_err(|_| PngError::BadSignature)?;

    png_assert!(signature == PNG_SIGNATURE, PngError::BadSignature);

    let ihdr_chunk = Chunk::from_bytes(bytes, &mut offset)?;
    ihdr_chunk.verify_crc(&mut crc)?;
    let ihdr = Ihdr::from_chunk(&ihdr_chunk)?;

    let mut compressed_data: Vec<u8> = Vec::new();
    let mut idat_chunks = 0;

    loop {
        let chunk = Chunk::from_bytes(bytes, &mut offset)?;
        chunk.verify_crc(&mut crc)?;

        match chunk.chunk_type() {
            IDAT_CHUNK_TYPE => {
                compressed_data.extend_from_slice(chunk.chunk_data());
                idat_chunks += 1;
            }
            IEND_CHUNK_TYPE => break,
            _ => {
                return Err(PngError::UnexpectedChunk {
                    expected: "IDAT or IEND",
                    found: chunk.type_name(),
                })
            }
        }
    }

    let filtered_scanlines = uncompress_scanlines(&compressed_data)?;

    Ok(InspectedPng {
        ihdr,
        idat_chunks,
        filtered_scanlines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let ihdr = Ihdr::truecolor(2, 2);
        let scanlines = vec![vec![0, 1, 2, 3, 4, 5, 6], vec![0, 7, 8, 9, 10, 11, 12]];

        encode_png(&ihdr, &scanlines).unwrap()
    }

    #[test]
    fn starts_with_signature_and_ends_with_iend() {
        let png = tiny_png();

        assert_eq!(&png[..8], PNG_SIGNATURE);
        assert_eq!(&png[8..16], &[0, 0, 0, 13, b'I', b'H', b'D', b'R']);
        assert_eq!(
            &png[png.len() - 12..],
            &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
        );
    }

    #[test]
    fn inspect_recovers_header_and_data() {
        let inspected = inspect_png(&tiny_png()).unwrap();

        assert_eq!(inspected.ihdr, Ihdr::truecolor(2, 2));
        assert_eq!(inspected.idat_chunks, 1);
        assert_eq!(
            inspected.filtered_scanlines,
            [0, 1, 2, 3, 4, 5, 6, 0, 7, 8, 9, 10, 11, 12]
        );
    }

    #[test]
    fn wrong_signature_is_rejected() {
        let mut png = tiny_png();
        png[1] = b'J';

        assert!(matches!(inspect_png(&png), Err(PngError::BadSignature)));
        assert!(matches!(inspect_png(&png[..3]), Err(PngError::BadSignature)));
    }

    #[test]
    fn flipped_idat_byte_is_a_crc_mismatch() {
        let mut png = tiny_png();
        // signature + IHDR chunk + IDAT length/type
        png[8 + 25 + 8] ^= 0xff;

        assert!(matches!(
            inspect_png(&png),
            Err(PngError::CrcMismatch { ref chunk_type, .. }) if chunk_type == "IDAT"
        ));
    }

    #[test]
    fn missing_iend_is_truncated() {
        let png = tiny_png();

        assert!(matches!(
            inspect_png(&png[..png.len() - 12]),
            Err(PngError::Truncated { .. })
        ));
    }

    #[test]
    fn ancillary_chunk_is_unexpected() {
        let png = tiny_png();
        let mut crc = CrcCalculator::new();
        let mut with_text = png[..8 + 25].to_vec();
        with_text.extend(Chunk::new(*b"tEXt", b"k\0v", &mut crc).to_bytes());
        with_text.extend_from_slice(&png[8 + 25..]);

        assert!(matches!(
            inspect_png(&with_text),
            Err(PngError::UnexpectedChunk { ref found, .. }) if found == "tEXt"
        ));
    }

    #[test]
    fn error_messages_read_well() {
        let err = PngError::CrcMismatch {
            chunk_type: "IDAT".to_string(),
            expected: 0xAE42_6082,
            found: 0,
        };

        assert_eq!(
            err.to_string(),
            "crc mismatch in IDAT chunk: computed 0xae426082, stored 0x00000000"
        );
    }
}
