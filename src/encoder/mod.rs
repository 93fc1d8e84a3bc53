//! Encoding pipeline: capacity selection, data encoding, Reed-Solomon
//! error correction, and matrix construction.

/// Bit stream construction and the data encoding stage
pub mod bitstream;
/// Block splitting, per-block EC coding, and codeword interleaving
pub mod blocks;
/// Mode detection and smallest-version selection
pub mod capacity;
/// Format and version information codewords (BCH)
pub mod format;
/// Function pattern placement and the function module map
pub mod function_patterns;
/// Mask application and penalty-based selection
pub mod mask;
/// Zig-zag codeword placement and final matrix assembly
pub mod matrix_builder;
/// Per-mode character validation and payload packing
pub mod modes;
/// GF(256) arithmetic and Reed-Solomon remainder computation
pub mod reed_solomon;
/// Per-version capacity and block structure constants
pub mod tables;

use crate::error::EncodeError;
use crate::models::{ECLevel, EncodingMode, QrSymbol, Version};

use bitstream::DataEncoder;
use matrix_builder::MatrixBuilder;

/// Runs the full encoding pipeline for inputs that have already passed
/// mode validation and version selection.
pub struct SymbolEncoder;

impl SymbolEncoder {
    /// Encode validated `text` into a finished symbol.
    ///
    /// `version` must already be large enough for the text; the stages
    /// assume exact-capacity inputs and debug-assert on them.
    pub fn encode(
        text: &str,
        mode: EncodingMode,
        version: Version,
        level: ECLevel,
    ) -> Result<QrSymbol, EncodeError> {
        let stream = DataEncoder::encode(text, mode, version, level);
        let data = stream.into_bytes();

        let ec_blocks = blocks::split_into_blocks(&data, version, level);
        let codewords = blocks::interleave(&ec_blocks);

        let mut builder = MatrixBuilder::new(version);
        builder.place_codewords(&codewords);
        let (matrix, mask) = builder.finish(level);

        Ok(QrSymbol {
            matrix,
            version,
            ec_level: level,
            mode,
            mask,
        })
    }
}
