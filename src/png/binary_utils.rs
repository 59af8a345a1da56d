use super::PngError;

pub fn read_u32(offset: &mut usize, bytes: &[u8]) -> Result<u32, PngError> {
    let mut be_bytes = [0; 4];
    be_bytes.copy_from_slice(read_bytes(offset, bytes, 4)?);

    Ok(u32::from_be_bytes(be_bytes))
}

pub fn read_byte(offset: &mut usize, bytes: &[u8]) -> Result<u8, PngError> {
    Ok(read_bytes(offset, bytes, 1)?[0])
}

pub fn read_bytes<'a>(
    offset: &mut usize,
    bytes: &'a [u8],
    size: usize,
) -> Result<&'a [u8], PngError> {
    let available = bytes.len().saturating_sub(*offset);

    if available < size {
        return Err(PngError::Truncated {
            needed: size,
            available,
        });
    }

    let result = &bytes[*offset..*offset + size];
    *offset += size;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_offset() {
        let bytes = [0x00, 0x00, 0x00, 0x64, 0x08, 0xAA, 0xBB];
        let mut offset = 0;

        assert_eq!(read_u32(&mut offset, &bytes).unwrap(), 100);
        assert_eq!(read_byte(&mut offset, &bytes).unwrap(), 8);
        assert_eq!(read_bytes(&mut offset, &bytes, 2).unwrap(), &[0xAA, 0xBB]);
        assert_eq!(offset, bytes.len());
    }

    #[test]
    fn short_read_reports_truncation() {
        let bytes = [1, 2, 3];
        let mut offset = 1;

        let err = read_u32(&mut offset, &bytes).unwrap_err();

        assert!(matches!(
            err,
            PngError::Truncated {
                needed: 4,
                available: 2
            }
        ));
        assert_eq!(offset, 1);
    }
}
