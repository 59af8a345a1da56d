use crate::{
    png::{
        binary_utils::{read_byte, read_u32},
        color_type::ColorType,
        consts::{IHDR_CHUNK_TYPE, IHDR_DATA_LENGTH},
        crc::CrcCalculator,
        PngError,
    },
    png_assert,
};

use super::Chunk;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Deflate,
}

impl TryFrom<u8> for CompressionMethod {
    type Error = PngError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Deflate),
            _ => Err(PngError::InvalidIhdr(format!(
                "unsupported compression method {value}"
            ))),
        }
    }
}

impl From<&CompressionMethod> for u8 {
    fn from(value: &CompressionMethod) -> Self {
        match value {
            CompressionMethod::Deflate => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMethod {
    Adaptive,
}

impl TryFrom<u8> for FilterMethod {
    type Error = PngError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Adaptive),
            _ => Err(PngError::InvalidIhdr(format!(
                "unsupported filter method {value}"
            ))),
        }
    }
}

impl From<&FilterMethod> for u8 {
    fn from(value: &FilterMethod) -> Self {
        match value {
            FilterMethod::Adaptive => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterlaceMethod {
    NoInterlace,
    Adam7,
}

impl TryFrom<u8> for InterlaceMethod {
    type Error = PngError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoInterlace),
            1 => Ok(Self::Adam7),
            _ => Err(PngError::InvalidIhdr(format!(
                "unrecognized interlace method {value}"
            ))),
        }
    }
}

impl From<&InterlaceMethod> for u8 {
    fn from(value: &InterlaceMethod) -> Self {
        match value {
            InterlaceMethod::NoInterlace => 0,
            InterlaceMethod::Adam7 => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ihdr {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
    pub interlace_method: InterlaceMethod,
    pub compression_method: CompressionMethod,
    pub filter_method: FilterMethod,
}

impl Ihdr {
    /// 8-bit RGB, deflate, adaptive filtering, no interlacing.
    pub fn truecolor(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: 8,
            color_type: ColorType::Truecolor,
            compression_method: CompressionMethod::Deflate,
            filter_method: FilterMethod::Adaptive,
            interlace_method: InterlaceMethod::NoInterlace,
        }
    }

    pub fn to_data(&self) -> [u8; IHDR_DATA_LENGTH] {
        let mut data = [0; IHDR_DATA_LENGTH];
        data[0..4].copy_from_slice(&self.width.to_be_bytes());
        data[4..8].copy_from_slice(&self.height.to_be_bytes());
        data[8] = self.bit_depth;
        data[9] = (&self.color_type).into();
        data[10] = (&self.compression_method).into();
        data[11] = (&self.filter_method).into();
        data[12] = (&self.interlace_method).into();

        data
    }

    pub fn to_bytes(&self, crc_calculator: &mut CrcCalculator) -> Vec<u8> {
        let data = self.to_data();
        let chunk = Chunk::new(IHDR_CHUNK_TYPE, &data, crc_calculator);

        chunk.to_bytes()
    }

    pub fn from_chunk(chunk: &Chunk) -> Result<Self, PngError> {
        png_assert!(
            chunk.chunk_type() == IHDR_CHUNK_TYPE,
            PngError::UnexpectedChunk {
                expected: "IHDR",
                found: chunk.type_name(),
            }
        );

        png_assert!(
            chunk.chunk_data().len() == IHDR_DATA_LENGTH,
            PngError::InvalidIhdr(format!(
                "invalid IHDR chunk size, expected {}, received {}",
                IHDR_DATA_LENGTH,
                chunk.chunk_data().len()
            ))
        );

        let data = chunk.chunk_data();
        let mut offset = 0;
        let width = read_u32(&mut offset, data)?;
        let height = read_u32(&mut offset, data)?;
        let bit_depth = read_byte(&mut offset, data)?;
        let color_type = ColorType::try_from(read_byte(&mut offset, data)?)?;
        let compression_method =
            CompressionMethod::try_from(read_byte(&mut offset, data)?)?;
        let filter_method = FilterMethod::try_from(read_byte(&mut offset, data)?)?;
        let interlace_method =
            InterlaceMethod::try_from(read_byte(&mut offset, data)?)?;

        Ok(Self {
            width,
            height,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace_method,
        })
    }

    pub fn get_bits_per_pixel(&self) -> usize {
        self.bit_depth as usize * self.color_type.samples_per_pixel()
    }

    /// Bytes per non-interlaced scanline, filter byte included.
    pub fn scanline_len(&self) -> usize {
        1 + (self.width as usize * self.get_bits_per_pixel()).div_ceil(8)
    }
}
