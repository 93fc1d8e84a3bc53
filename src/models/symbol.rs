use super::{Module, ModuleMatrix};
use crate::error::EncodeError;

/// QR Code symbol version (1-40, Model 2).
///
/// The version fixes the grid side length (`17 + 4 * version`) and indexes
/// every capacity and block-structure table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest version (21x21 modules).
    pub const MIN: Version = Version(1);
    /// Largest version (177x177 modules).
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1-40.
    pub fn new(number: u8) -> Result<Self, EncodeError> {
        if (1..=40).contains(&number) {
            Ok(Version(number))
        } else {
            Err(EncodeError::InvalidVersion(number))
        }
    }

    /// Get the version number (1-40).
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the grid side length in modules (width = height).
    pub fn size(&self) -> usize {
        17 + 4 * self.0 as usize
    }
}

/// Error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Parse a level from its letter ('L', 'M', 'Q', 'H').
    pub fn from_char(c: char) -> Result<Self, EncodeError> {
        match c {
            'L' => Ok(ECLevel::L),
            'M' => Ok(ECLevel::M),
            'Q' => Ok(ECLevel::Q),
            'H' => Ok(ECLevel::H),
            other => Err(EncodeError::InvalidLevel(other)),
        }
    }

    /// Table row index for this level (L=0, M=1, Q=2, H=3).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Two format-information bits for this level (L=01, M=00, Q=11, H=10).
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

/// Data encoding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    /// Digits 0-9, packed 3 per 10 bits.
    Numeric,
    /// Digits, uppercase letters and nine symbols, packed 2 per 11 bits.
    Alphanumeric,
    /// ISO-8859-1 bytes, 8 bits per character.
    Byte,
}

impl EncodingMode {
    /// Four-bit mode indicator emitted at the start of the bit stream.
    pub fn mode_bits(&self) -> u32 {
        match self {
            EncodingMode::Numeric => 0b0001,
            EncodingMode::Alphanumeric => 0b0010,
            EncodingMode::Byte => 0b0100,
        }
    }

    /// Character-count indicator width in bits for the given version.
    ///
    /// Widths depend on the version tier (1-9, 10-26, 27-40).
    pub fn char_count_bits(&self, version: Version) -> usize {
        let tier = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            EncodingMode::Numeric => [10, 12, 14][tier],
            EncodingMode::Alphanumeric => [9, 11, 13][tier],
            EncodingMode::Byte => [8, 16, 16][tier],
        }
    }
}

/// Mask pattern (0-7), one of eight fixed XOR formulas over (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in index order.
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its index (0-7).
    pub fn from_index(index: u8) -> Option<Self> {
        MaskPattern::ALL.get(index as usize).copied()
    }

    /// Pattern index (0-7), as written into the format information.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Check if the module at row `i`, column `j` should be toggled.
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// An encoded QR code symbol.
///
/// The matrix is fully determined (mask applied, format bits written) before
/// a `QrSymbol` is constructed; it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    /// Final module grid (true color, mask applied).
    pub matrix: ModuleMatrix,
    /// Symbol version actually used.
    pub version: Version,
    /// Error correction level.
    pub ec_level: ECLevel,
    /// Encoding mode the data was packed with.
    pub mode: EncodingMode,
    /// Mask pattern selected by penalty scoring.
    pub mask: MaskPattern,
}

impl QrSymbol {
    /// Side length of the module grid.
    pub fn side(&self) -> usize {
        self.matrix.side()
    }

    /// Query a module; out-of-range coordinates are `Light`.
    pub fn get(&self, x: usize, y: usize) -> Module {
        self.matrix.get(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::new(40).unwrap().size(), 177);
    }

    #[test]
    fn test_version_range() {
        assert_eq!(Version::new(0), Err(EncodeError::InvalidVersion(0)));
        assert_eq!(Version::new(41), Err(EncodeError::InvalidVersion(41)));
        assert!(Version::new(40).is_ok());
    }

    #[test]
    fn test_ec_level_parse() {
        assert_eq!(ECLevel::from_char('L'), Ok(ECLevel::L));
        assert_eq!(ECLevel::from_char('H'), Ok(ECLevel::H));
        assert_eq!(ECLevel::from_char('x'), Err(EncodeError::InvalidLevel('x')));
    }

    #[test]
    fn test_char_count_bits() {
        let v1 = Version::new(1).unwrap();
        let v10 = Version::new(10).unwrap();
        let v40 = Version::new(40).unwrap();
        assert_eq!(EncodingMode::Numeric.char_count_bits(v1), 10);
        assert_eq!(EncodingMode::Alphanumeric.char_count_bits(v10), 11);
        assert_eq!(EncodingMode::Byte.char_count_bits(v40), 16);
        assert_eq!(EncodingMode::Byte.char_count_bits(v1), 8);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));
        assert_eq!(MaskPattern::from_index(7), Some(MaskPattern::Pattern7));
        assert_eq!(MaskPattern::from_index(8), None);
    }
}
