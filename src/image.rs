use crate::colors::Rgb;

const FILTER_TYPE_NONE: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// An image filled with a single colour.
#[derive(Debug)]
pub struct Image {
    pub resolution: Resolution,
    pub fill: Rgb,
}

impl Image {
    pub fn solid(resolution: Resolution, fill: Rgb) -> Self {
        Self { resolution, fill }
    }

    /// Scanlines as they go into the zlib stream: each row starts with filter
    /// type 0 followed by the raw R, G, B samples.
    pub fn create_scanlines(&self) -> Vec<Vec<u8>> {
        let pixel: [u8; 3] = (&self.fill).into();
        let scanline_len = 1 + self.resolution.width as usize * pixel.len();

        (0..self.resolution.height)
            .map(|_| {
                let mut scanline = Vec::with_capacity(scanline_len);
                scanline.push(FILTER_TYPE_NONE);

                for _ in 0..self.resolution.width {
                    scanline.extend_from_slice(&pixel);
                }

                scanline
            })
            .collect()
    }
}
