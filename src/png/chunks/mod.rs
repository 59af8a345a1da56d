use super::{
    binary_utils::{read_bytes, read_u32},
    consts::{CHUNK_MAX_LENGTH, CHUNK_METADATA_LENGTH, CHUNK_TYPE_LENGTH},
    crc::CrcCalculator,
    PngError,
};

pub mod idat;
pub mod iend;
pub mod ihdr;

/// A single length-prefixed, type-tagged, CRC-checked PNG record.
///
/// `crc` is what [`Chunk::verify_crc`] checks: the computed value for a
/// chunk built with [`Chunk::new`], the stored one for a parsed chunk.
/// [`Chunk::to_bytes`] always writes a CRC computed from the current type
/// and data.
#[derive(Debug)]
pub struct Chunk<'a> {
    chunk_type: [u8; 4],
    chunk_data: &'a [u8],
    crc: u32,
}

/// Length field for a payload of `length` bytes, limited to 2^31-1.
pub fn check_chunk_length(length: usize) -> Result<u32, PngError> {
    if length > CHUNK_MAX_LENGTH {
        return Err(PngError::ChunkTooLarge { length });
    }

    Ok(length as u32)
}

impl<'a> Chunk<'a> {
    pub fn new(
        chunk_type: [u8; 4],
        chunk_data: &'a [u8],
        crc_calculator: &mut CrcCalculator,
    ) -> Chunk<'a> {
        let crc = crc_calculator.chunk_crc(&chunk_type, chunk_data);

        Self {
            chunk_type,
            chunk_data,
            crc,
        }
    }

    pub fn from_bytes(bytes: &'a [u8], offset: &mut usize) -> Result<Chunk<'a>, PngError> {
        let available = bytes.len().saturating_sub(*offset);

        if available < CHUNK_METADATA_LENGTH {
            return Err(PngError::Truncated {
                needed: CHUNK_METADATA_LENGTH,
                available,
            });
        }

        let length = read_u32(offset, bytes)? as usize;

        if available < length + CHUNK_METADATA_LENGTH {
            return Err(PngError::Truncated {
                needed: length + CHUNK_METADATA_LENGTH,
                available,
            });
        }

        let mut chunk_type = [0; CHUNK_TYPE_LENGTH];
        chunk_type.copy_from_slice(read_bytes(offset, bytes, CHUNK_TYPE_LENGTH)?);
        let chunk_data = read_bytes(offset, bytes, length)?;
        let crc = read_u32(offset, bytes)?;

        Ok(Chunk {
            chunk_type,
            chunk_data,
            crc,
        })
    }

    pub fn chunk_type(&self) -> [u8; 4] {
        self.chunk_type
    }

    pub fn chunk_data(&self) -> &'a [u8] {
        self.chunk_data
    }

    pub fn verify_crc(&self, crc_calculator: &mut CrcCalculator) -> Result<(), PngError> {
        let expected = crc_calculator.chunk_crc(&self.chunk_type, self.chunk_data);

        if expected != self.crc {
            return Err(PngError::CrcMismatch {
                chunk_type: self.type_name(),
                expected,
                found: self.crc,
            });
        }

        Ok(())
    }

    pub fn type_name(&self) -> String {
        String::from_utf8_lossy(&self.chunk_type).into_owned()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let length = self.chunk_data.len();
        debug_assert!(
            length <= CHUNK_MAX_LENGTH,
            "chunk payload of {length} bytes exceeds the png limit"
        );
        let crc = CrcCalculator::new().chunk_crc(&self.chunk_type, self.chunk_data);
        let mut result = Vec::with_capacity(CHUNK_METADATA_LENGTH + length);

        result.extend_from_slice(&(length as u32).to_be_bytes());
        result.extend_from_slice(&self.chunk_type);
        result.extend_from_slice(self.chunk_data);
        result.extend_from_slice(&crc.to_be_bytes());

        tracing::debug!(chunk_type = %self.type_name(), length, "chunk framed");

        result
    }
}
