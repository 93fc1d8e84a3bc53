/// Mask application and selection by penalty scoring
use rayon::prelude::*;

use crate::encoder::format;
use crate::encoder::function_patterns::FunctionPatterns;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix};

// Penalty weights from the QR specification
const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// XOR-apply a mask pattern to all non-function modules.
///
/// Applying the same mask twice restores the original matrix.
pub fn apply_mask(matrix: &mut ModuleMatrix, mask: MaskPattern, func: &FunctionPatterns) {
    let size = matrix.side();
    for y in 0..size {
        for x in 0..size {
            if !func.is_function(x, y) && mask.is_masked(y, x) {
                matrix.toggle(x, y);
            }
        }
    }
}

/// Total 4-rule penalty score of a fully drawn matrix (lower is better).
pub fn penalty_score(matrix: &ModuleMatrix) -> u32 {
    penalty_runs(matrix) + penalty_blocks(matrix) + penalty_finder_like(matrix) + penalty_balance(matrix)
}

/// Rule 1: runs of 5 or more same-color modules in a row or column score
/// 3 + (run length - 5), once per qualifying run.
fn penalty_runs(matrix: &ModuleMatrix) -> u32 {
    let size = matrix.side();
    let mut result = 0;
    for i in 0..size {
        let mut run_color = [matrix.is_dark(0, i), matrix.is_dark(i, 0)];
        let mut run_len = [1u32, 1u32];
        for j in 1..size {
            for (axis, color) in [matrix.is_dark(j, i), matrix.is_dark(i, j)]
                .into_iter()
                .enumerate()
            {
                if color == run_color[axis] {
                    run_len[axis] += 1;
                    if run_len[axis] == 5 {
                        result += PENALTY_N1;
                    } else if run_len[axis] > 5 {
                        result += 1;
                    }
                } else {
                    run_color[axis] = color;
                    run_len[axis] = 1;
                }
            }
        }
    }
    result
}

/// Rule 2: each 2x2 block of same-color modules scores 3.
fn penalty_blocks(matrix: &ModuleMatrix) -> u32 {
    let size = matrix.side();
    let mut result = 0;
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = matrix.is_dark(x, y);
            if color == matrix.is_dark(x + 1, y)
                && color == matrix.is_dark(x, y + 1)
                && color == matrix.is_dark(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }
    result
}

/// Rule 3: each 1:1:3:1:1 finder-like sequence with a 4-module light run on
/// either side, in a row or column, scores 40.
fn penalty_finder_like(matrix: &ModuleMatrix) -> u32 {
    const PATTERN_A: [bool; 11] = [
        true, false, true, true, true, false, true, false, false, false, false,
    ];
    const PATTERN_B: [bool; 11] = [
        false, false, false, false, true, false, true, true, true, false, true,
    ];

    let size = matrix.side();
    let mut result = 0;
    for i in 0..size {
        for start in 0..size.saturating_sub(10) {
            for pattern in [&PATTERN_A, &PATTERN_B] {
                if (0..11).all(|k| matrix.is_dark(start + k, i) == pattern[k]) {
                    result += PENALTY_N3;
                }
                if (0..11).all(|k| matrix.is_dark(i, start + k) == pattern[k]) {
                    result += PENALTY_N3;
                }
            }
        }
    }
    result
}

/// Rule 4: 10 points for every 5% the dark-module ratio deviates from 50%.
fn penalty_balance(matrix: &ModuleMatrix) -> u32 {
    let size = matrix.side();
    let total = (size * size) as i64;
    let dark = matrix.dark_count() as i64;
    // Smallest k such that the ratio is within (50 +/- 5k)%
    let deviation = (dark * 20 - total * 10).unsigned_abs() as u32;
    let k = deviation.div_ceil(total as u32).saturating_sub(1);
    k * PENALTY_N4
}

/// Evaluate all 8 mask patterns and return the one with the lowest penalty.
///
/// Each candidate is scored on its own copy of the matrix with the matching
/// format bits drawn in, so the score covers the symbol exactly as it would
/// be emitted. Candidates are independent and evaluated in parallel; ties
/// break to the lowest mask index.
pub fn select_mask(
    matrix: &ModuleMatrix,
    func: &FunctionPatterns,
    level: ECLevel,
) -> (MaskPattern, u32) {
    let (penalty, mask) = MaskPattern::ALL
        .into_par_iter()
        .map(|mask| {
            let mut trial = matrix.clone();
            apply_mask(&mut trial, mask, func);
            format::write_format_info(&mut trial, level, mask);
            (penalty_score(&trial), mask.index())
        })
        .min()
        .unwrap_or((u32::MAX, 0));
    (
        MaskPattern::from_index(mask).unwrap_or(MaskPattern::Pattern0),
        penalty,
    )
}
