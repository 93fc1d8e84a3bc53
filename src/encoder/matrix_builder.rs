/// Matrix construction: function patterns, zig-zag data placement, mask
/// selection, and format/version information.
use crate::encoder::format;
use crate::encoder::function_patterns::FunctionPatterns;
use crate::encoder::mask;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix, Version};

/// Builds the final module matrix through a fixed sequence of stages:
/// function patterns, data placement, mask selection, format information.
///
/// The stages only move forward; the matrix leaves the builder exclusively
/// through [`MatrixBuilder::finish`], fully masked and stamped.
pub struct MatrixBuilder {
    matrix: ModuleMatrix,
    func: FunctionPatterns,
    version: Version,
}

impl MatrixBuilder {
    /// Allocate the grid and place all function patterns.
    pub fn new(version: Version) -> Self {
        let mut matrix = ModuleMatrix::new(version.size());
        let func = FunctionPatterns::place(&mut matrix, version);
        Self {
            matrix,
            func,
            version,
        }
    }

    /// Place the interleaved data+EC codewords into the data modules.
    ///
    /// Traversal runs in two-module column pairs from the right edge,
    /// alternating upward and downward, skipping the timing column and all
    /// function modules. Bits are taken MSB-first from each codeword; any
    /// leftover remainder modules (0-7 per version) stay light.
    pub fn place_codewords(&mut self, codewords: &[u8]) {
        let size = self.matrix.side();
        let total_bits = codewords.len() * 8;
        debug_assert!(
            total_bits <= self.func.data_module_count()
                && self.func.data_module_count() - total_bits < 8
        );

        let mut i = 0usize;
        let mut right = size as i32 - 1;
        while right >= 1 {
            if right == 6 {
                right = 5;
            }
            let upward = (right + 1) & 2 == 0;
            for vert in 0..size {
                let y = if upward { size - 1 - vert } else { vert };
                for j in 0..2 {
                    let x = (right - j) as usize;
                    if self.func.is_function(x, y) || i >= total_bits {
                        continue;
                    }
                    let dark = (codewords[i >> 3] >> (7 - (i & 7))) & 1 == 1;
                    self.matrix.set(x, y, dark);
                    i += 1;
                }
            }
            right -= 2;
        }
        debug_assert_eq!(i, total_bits);
    }

    /// Select the minimum-penalty mask, apply it, and write the format and
    /// (version >= 7) version information. Returns the finished matrix and
    /// the chosen mask.
    pub fn finish(mut self, level: ECLevel) -> (ModuleMatrix, MaskPattern) {
        let (chosen, _penalty) = mask::select_mask(&self.matrix, &self.func, level);

        #[cfg(debug_assertions)]
        eprintln!(
            "MATRIX: version {} selected mask {} (penalty {})",
            self.version.number(),
            chosen.index(),
            _penalty
        );

        mask::apply_mask(&mut self.matrix, chosen, &self.func);
        format::write_format_info(&mut self.matrix, level, chosen);
        format::write_version_info(&mut self.matrix, self.version);
        (self.matrix, chosen)
    }

    /// Version this builder was created for.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Function pattern map (for traversal-aware consumers and tests).
    pub fn function_patterns(&self) -> &FunctionPatterns {
        &self.func
    }
}
