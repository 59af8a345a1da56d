use super::PngError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorType {
    Greyscale,
    Truecolor,
    IndexedColor,
    GreyscaleAlpha,
    TrueColorAlpha,
}

impl ColorType {
    pub fn samples_per_pixel(&self) -> usize {
        match self {
            ColorType::Greyscale | ColorType::IndexedColor => 1,
            ColorType::GreyscaleAlpha => 2,
            ColorType::Truecolor => 3,
            ColorType::TrueColorAlpha => 4,
        }
    }
}

impl TryFrom<u8> for ColorType {
    type Error = PngError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Greyscale),
            2 => Ok(Self::Truecolor),
            3 => Ok(Self::IndexedColor),
            4 => Ok(Self::GreyscaleAlpha),
            6 => Ok(Self::TrueColorAlpha),
            _ => Err(PngError::UnrecognizedColorType(value)),
        }
    }
}

impl From<&ColorType> for u8 {
    fn from(value: &ColorType) -> Self {
        match value {
            ColorType::Greyscale => 0,
            ColorType::Truecolor => 2,
            ColorType::IndexedColor => 3,
            ColorType::GreyscaleAlpha => 4,
            ColorType::TrueColorAlpha => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truecolor_is_type_two_with_three_samples() {
        assert_eq!(u8::from(&ColorType::Truecolor), 2);
        assert_eq!(ColorType::try_from(2).unwrap(), ColorType::Truecolor);
        assert_eq!(ColorType::Truecolor.samples_per_pixel(), 3);
    }

    #[test]
    fn rejects_unassigned_values() {
        for value in [1, 5, 7, 255] {
            assert!(matches!(
                ColorType::try_from(value),
                Err(PngError::UnrecognizedColorType(v)) if v == value
            ));
        }
    }
}
