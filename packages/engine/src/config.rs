//! Decoder configuration.

/// Default nesting depth limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Decoder behavior configuration.
///
/// Composite machines drive their children within the caller's stack, so
/// value nesting maps directly onto call-stack depth; `max_depth` bounds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeConfig {
    /// Maximum dispatcher nesting depth. The top-level value sits at depth
    /// zero; each array element or object member value nests one level
    /// deeper. Exceeding the limit rejects the decode with
    /// [`crate::ErrorKind::RecursionLimitExceeded`].
    pub max_depth: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
