//! QRForge - fast QR code symbol encoder
//!
//! A pure Rust QR Code Model 2 encoder. Turns text into a complete module
//! matrix: mode selection, version search, Reed-Solomon error correction,
//! mask evaluation, and format/version information in a single call.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Encoding pipeline modules (capacity, data encoding, EC, matrix)
pub mod encoder;
/// Error type for the encoding pipeline
pub mod error;
/// Core data structures (QrSymbol, ModuleMatrix, Version, etc.)
pub mod models;

pub use error::EncodeError;
pub use models::{ECLevel, EncodingMode, MaskPattern, Module, ModuleMatrix, QrSymbol, Version};

use encoder::{SymbolEncoder, capacity};

/// Encode text into a QR symbol at the given error correction level
///
/// # Arguments
/// * `text` - Input text (numeric, alphanumeric, or ISO-8859-1)
/// * `level` - Error correction level
///
/// # Returns
/// The finished symbol at the smallest version that holds the data
///
/// Mode is auto-detected; use [`Encoder`] to pin the version or mode.
pub fn encode(text: &str, level: ECLevel) -> Result<QrSymbol, EncodeError> {
    Encoder::new(level).encode(text)
}

/// Configurable encoder.
///
/// Defaults to auto-detected mode and the smallest fitting version. A pinned
/// version is a floor for the search; with upgrades disabled it is exact and
/// too-small inputs fail instead of growing the symbol.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    level: ECLevel,
    version: Option<Version>,
    mode: Option<EncodingMode>,
    allow_version_upgrade: bool,
}

impl Encoder {
    /// Create an encoder for the given error correction level.
    pub fn new(level: ECLevel) -> Self {
        Self {
            level,
            version: None,
            mode: None,
            allow_version_upgrade: true,
        }
    }

    /// Pin the symbol version (1-40).
    pub fn version(mut self, number: u8) -> Result<Self, EncodeError> {
        self.version = Some(Version::new(number)?);
        Ok(self)
    }

    /// Force an encoding mode instead of auto-detecting it. Text that the
    /// mode cannot represent fails with `UnsupportedCharacter`.
    pub fn mode(mut self, mode: EncodingMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Allow or forbid growing past a pinned version when the data does not
    /// fit it. Enabled by default.
    pub fn allow_version_upgrade(mut self, allow: bool) -> Self {
        self.allow_version_upgrade = allow;
        self
    }

    /// Encode `text` with this configuration.
    pub fn encode(&self, text: &str) -> Result<QrSymbol, EncodeError> {
        let mode = match self.mode {
            Some(mode) => {
                capacity::validate_mode(text, mode)?;
                mode
            }
            None => {
                let mode = capacity::detect_mode(text);
                // Auto-detection falls through to byte mode, which still
                // rejects characters above U+00FF
                capacity::validate_mode(text, mode)?;
                mode
            }
        };

        let char_count = text.chars().count();
        let version = capacity::select_version(
            mode,
            self.level,
            char_count,
            self.version,
            self.allow_version_upgrade,
        )?;

        SymbolEncoder::encode(text, mode, version, self.level)
    }
}
