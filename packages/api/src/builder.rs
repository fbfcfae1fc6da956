//! Fluent decoder configuration.

use drip_engine::{DecodeConfig, DecodeResult, Value, decode_with};

/// Fluent entry point for configured decoding.
///
/// ```rust
/// use drip::Decoder;
///
/// let value = Decoder::new()
///     .max_depth(16)
///     .decode("[1, 2, 3]")
///     .expect("valid JSON");
/// assert!(value.as_array().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecodeConfig,
}

impl Decoder {
    /// Creates a decoder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum value nesting depth.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// The configuration this decoder will decode with.
    #[must_use]
    pub fn config(&self) -> DecodeConfig {
        self.config
    }

    /// Decodes one JSON text.
    ///
    /// # Errors
    ///
    /// Returns the terminal error of the first rejection; see
    /// [`drip_engine::decode`].
    pub fn decode(&self, input: &str) -> DecodeResult<Value> {
        decode_with(input, self.config)
    }
}
