use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    colors::Rgb,
    image::{Image, Resolution},
    png::{chunks::ihdr::Ihdr, encode_png, inspect_png, PngError},
};

pub const DEFAULT_OUTPUT_FILE: &str = "ta_sample.png";
pub const DEFAULT_WIDTH: u32 = 100;
pub const DEFAULT_HEIGHT: u32 = 100;

/// What the fixture looks like and where it goes.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    pub resolution: Resolution,
    pub fill: Rgb,
    pub output_path: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            resolution: Resolution::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            fill: Rgb::RED,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl FixtureConfig {
    #[cfg(test)]
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    #[cfg(test)]
    pub fn fill(mut self, fill: Rgb) -> Self {
        self.fill = fill;
        self
    }

    #[cfg(test)]
    pub fn output_path(mut self, output_path: impl AsRef<Path>) -> Self {
        self.output_path = output_path.as_ref().to_path_buf();
        self
    }

    fn ihdr(&self) -> Ihdr {
        Ihdr::truecolor(self.resolution.width, self.resolution.height)
    }

    fn image(&self) -> Image {
        Image::solid(self.resolution, self.fill)
    }
}

pub fn create_fixture(config: &FixtureConfig) -> Result<Vec<u8>, PngError> {
    let scanlines = config.image().create_scanlines();

    encode_png(&config.ihdr(), &scanlines)
}

/// Reads `bytes` back and checks them against what `config` asked for.
pub fn verify_fixture(config: &FixtureConfig, bytes: &[u8]) -> Result<(), PngError> {
    let inspected = inspect_png(bytes)?;
    let expected_ihdr = config.ihdr();

    if inspected.ihdr != expected_ihdr {
        return Err(PngError::FixtureMismatch(format!(
            "header {:?} does not match {:?}",
            inspected.ihdr, expected_ihdr
        )));
    }

    if inspected.idat_chunks != 1 {
        return Err(PngError::FixtureMismatch(format!(
            "expected a single IDAT chunk, found {}",
            inspected.idat_chunks
        )));
    }

    let expected_len = expected_ihdr.scanline_len() * expected_ihdr.height as usize;
    if inspected.filtered_scanlines.len() != expected_len {
        return Err(PngError::FixtureMismatch(format!(
            "inflated image data is {} bytes, expected {}",
            inspected.filtered_scanlines.len(),
            expected_len
        )));
    }

    if inspected.filtered_scanlines != config.image().create_scanlines().concat() {
        return Err(PngError::FixtureMismatch(
            "inflated image data differs from the generated scanlines".to_string(),
        ));
    }

    Ok(())
}

/// Generates, self-checks and writes the fixture. Returns the bytes written.
///
/// Nothing touches the filesystem unless the check passes.
pub fn write_fixture(config: &FixtureConfig) -> Result<Vec<u8>, PngError> {
    let bytes = create_fixture(config)?;
    verify_fixture(config, &bytes)?;

    let mut file = File::create(&config.output_path)?;
    file.write_all(&bytes)?;
    file.flush()?;

    tracing::info!(
        path = %config.output_path.display(),
        bytes = bytes.len(),
        "fixture written"
    );

    Ok(bytes)
}
