use crc32fast::Hasher;

/// Running IEEE CRC-32 (the zlib polynomial) as PNG chunks require it.
pub struct CrcCalculator {
    hasher: Hasher,
}

impl CrcCalculator {
    pub fn new() -> Self {
        Self {
            hasher: Hasher::new(),
        }
    }

    pub fn update_crc(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    pub fn get_crc(&self) -> u32 {
        self.hasher.clone().finalize()
    }

    pub fn reset(&mut self) {
        self.hasher.reset();
    }

    /// CRC of `chunk_type ‖ chunk_data`, leaving the calculator reset.
    pub fn chunk_crc(&mut self, chunk_type: &[u8], chunk_data: &[u8]) -> u32 {
        self.reset();
        self.update_crc(chunk_type);
        self.update_crc(chunk_data);
        let crc = self.get_crc();
        self.reset();

        crc
    }
}

impl Default for CrcCalculator {
    fn default() -> Self {
        Self::new()
    }
}
