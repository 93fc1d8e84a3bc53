use thiserror::Error;

/// Errors reported by the encoding pipeline.
///
/// All variants are detected during the upfront validation pass, before any
/// matrix is allocated. Encoding is deterministic: the same input always
/// fails (or succeeds) the same way.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// Requested version is outside 1-40, or it cannot hold the data and
    /// automatic version upgrade is disabled.
    #[error("invalid version {0}: must be 1-40 and large enough for the data")]
    InvalidVersion(u8),

    /// Error correction level character is not one of 'L', 'M', 'Q', 'H'.
    #[error("invalid error correction level '{0}': expected one of L, M, Q, H")]
    InvalidLevel(char),

    /// No version up to 40 can hold the data at the requested level.
    #[error("data too long: no version up to 40 can hold it at this level")]
    CapacityExceeded,

    /// A character cannot be represented in the selected encoding mode.
    /// `index` is the position of the first offending character.
    #[error("unsupported character at index {index}")]
    UnsupportedCharacter {
        /// Character index (in `chars()` order) of the first unsupported character.
        index: usize,
    },
}
