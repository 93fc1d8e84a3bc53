/// Format and version information generation (BCH error-corrected)
use crate::models::{ECLevel, MaskPattern, ModuleMatrix, Version};

/// BCH(15,5) generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// Fixed XOR mask applied to the 15 format bits.
const FORMAT_MASK: u16 = 0x5412;
/// BCH(18,6) generator polynomial: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// Compute the 15-bit format information codeword for a level/mask pair:
/// 5 data bits, 10 BCH remainder bits, XORed with the fixed mask.
pub fn format_info_bits(level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((level.format_bits() as u32) << 3) | mask.index() as u32;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * FORMAT_GENERATOR);
    }
    (((data << 10) | rem) as u16) ^ FORMAT_MASK
}

/// Compute the 18-bit version information codeword for versions 7-40:
/// 6 data bits and 12 BCH remainder bits.
pub fn version_info_bits(version: Version) -> u32 {
    let data = version.number() as u32;
    let mut rem = data;
    for _ in 0..12 {
        rem = (rem << 1) ^ ((rem >> 11) * VERSION_GENERATOR);
    }
    (data << 12) | rem
}

/// Write the format information into both fixed locations.
///
/// Bit i of the codeword lands at the standard positions around the top-left
/// finder (first copy) and split across the top-right row and bottom-left
/// column (second copy).
pub fn write_format_info(matrix: &mut ModuleMatrix, level: ECLevel, mask: MaskPattern) {
    let bits = format_info_bits(level, mask) as u32;
    let size = matrix.side();
    let bit = |i: usize| (bits >> i) & 1 == 1;

    // First copy, around the top-left finder
    for i in 0..6 {
        matrix.set(8, i, bit(i));
    }
    matrix.set(8, 7, bit(6));
    matrix.set(8, 8, bit(7));
    matrix.set(7, 8, bit(8));
    for i in 9..15 {
        matrix.set(14 - i, 8, bit(i));
    }

    // Second copy, split between the top-right and bottom-left corners
    for i in 0..8 {
        matrix.set(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        matrix.set(8, size - 15 + i, bit(i));
    }
}

/// Write the version information blocks (versions 7-40 only): a 6x3 block
/// below the top-right finder and its transpose left of the bottom-left one.
pub fn write_version_info(matrix: &mut ModuleMatrix, version: Version) {
    if version.number() < 7 {
        return;
    }
    let bits = version_info_bits(version);
    let size = matrix.side();
    for i in 0..18 {
        let dark = (bits >> i) & 1 == 1;
        let a = size - 11 + i % 3;
        let b = i / 3;
        matrix.set(a, b, dark);
        matrix.set(b, a, dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_info_known_values() {
        // M + mask 0 has data bits 00000, so the codeword is the XOR mask itself
        assert_eq!(format_info_bits(ECLevel::M, MaskPattern::Pattern0), 0x5412);
        // L + mask 4, a published reference value (110011000101111)
        assert_eq!(format_info_bits(ECLevel::L, MaskPattern::Pattern4), 0x662F);
        // H + mask 7 (000100000111011)
        assert_eq!(format_info_bits(ECLevel::H, MaskPattern::Pattern7), 0x083B);
    }

    #[test]
    fn test_format_info_all_distinct() {
        let mut seen = Vec::new();
        for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for mask in MaskPattern::ALL {
                let bits = format_info_bits(level, mask);
                assert!(!seen.contains(&bits));
                seen.push(bits);
            }
        }
        assert_eq!(seen.len(), 32);
    }

    #[test]
    fn test_version_info_known_values() {
        // Published values from ISO 18004 Table D.1
        assert_eq!(version_info_bits(Version::new(7).unwrap()), 0x07C94);
        assert_eq!(version_info_bits(Version::new(8).unwrap()), 0x085BC);
        assert_eq!(version_info_bits(Version::new(21).unwrap()), 0x15683);
        assert_eq!(version_info_bits(Version::new(40).unwrap()), 0x28C69);
    }

    #[test]
    fn test_version_info_bch_remainder_is_zero() {
        // Every codeword must be divisible by the BCH(18,6) generator
        for ver in 7..=40u8 {
            let mut rem = version_info_bits(Version::new(ver).unwrap());
            for _ in 0..6 {
                if rem & 0x20000 != 0 {
                    rem ^= VERSION_GENERATOR << 5;
                }
                rem <<= 1;
            }
            assert_eq!((rem >> 6) & 0xFFF, 0, "version {}", ver);
        }
    }

    #[test]
    fn test_write_format_info_both_copies_agree() {
        let mut matrix = ModuleMatrix::new(21);
        write_format_info(&mut matrix, ECLevel::Q, MaskPattern::Pattern3);

        let bits = format_info_bits(ECLevel::Q, MaskPattern::Pattern3) as u32;
        // Second copy, bits 0-7 along the top-right row
        for i in 0..8 {
            assert_eq!(matrix.is_dark(20 - i, 8), (bits >> i) & 1 == 1);
        }
        // Second copy, bits 8-14 down the bottom-left column
        for i in 8..15 {
            assert_eq!(matrix.is_dark(8, 21 - 15 + i), (bits >> i) & 1 == 1);
        }
    }
}
