//! Package writing options.

/// Options for writing an HWPX package.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Deflate XML parts (the `mimetype` entry and binary payloads are
    /// always stored)
    pub compress: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { compress: true }
    }
}

impl WriteOptions {
    /// Create new write options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable compression of XML parts.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Store every entry uncompressed.
    pub fn stored(self) -> Self {
        self.with_compression(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_options_builder() {
        assert!(WriteOptions::default().compress);
        assert!(!WriteOptions::new().stored().compress);
    }
}
