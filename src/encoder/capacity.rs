/// Capacity selection: encoding mode detection and smallest-version search
use crate::encoder::modes::{alphanumeric, byte, numeric};
use crate::encoder::tables;
use crate::error::EncodeError;
use crate::models::{ECLevel, EncodingMode, Version};

/// Pick the densest mode whose character set covers the whole text.
///
/// Numeric, alphanumeric and byte form a superset chain, so the first mode
/// that accepts every character is the best fit. Empty text is byte mode.
pub fn detect_mode(text: &str) -> EncodingMode {
    if !text.is_empty() && text.chars().all(numeric::can_encode) {
        EncodingMode::Numeric
    } else if !text.is_empty() && text.chars().all(alphanumeric::can_encode) {
        EncodingMode::Alphanumeric
    } else {
        EncodingMode::Byte
    }
}

/// Check that every character of `text` is representable in `mode`,
/// reporting the index of the first one that is not.
pub fn validate_mode(text: &str, mode: EncodingMode) -> Result<(), EncodeError> {
    let accepts: fn(char) -> bool = match mode {
        EncodingMode::Numeric => numeric::can_encode,
        EncodingMode::Alphanumeric => alphanumeric::can_encode,
        EncodingMode::Byte => byte::can_encode,
    };
    match text.chars().position(|c| !accepts(c)) {
        Some(index) => Err(EncodeError::UnsupportedCharacter { index }),
        None => Ok(()),
    }
}

/// Exact bit length `char_count` characters occupy at this version:
/// mode indicator, character-count indicator, and packed payload.
pub fn encoded_bits(mode: EncodingMode, version: Version, char_count: usize) -> usize {
    let payload = match mode {
        EncodingMode::Numeric => numeric::payload_bits(char_count),
        EncodingMode::Alphanumeric => alphanumeric::payload_bits(char_count),
        EncodingMode::Byte => byte::payload_bits(char_count),
    };
    4 + mode.char_count_bits(version) + payload
}

/// True if `char_count` characters fit in the version/level data capacity.
pub fn fits(mode: EncodingMode, version: Version, level: ECLevel, char_count: usize) -> bool {
    // The character count must also be expressible in the count indicator
    let cci_bits = mode.char_count_bits(version);
    if char_count >> cci_bits != 0 {
        return false;
    }
    encoded_bits(mode, version, char_count) <= tables::data_codewords(version, level) * 8
}

/// Find the smallest version that holds `char_count` characters of `mode`
/// at `level`.
///
/// If `requested` is given it is the starting point of the search; with
/// `allow_upgrade` disabled, a requested version that is too small fails
/// with `InvalidVersion` instead of being silently enlarged.
pub fn select_version(
    mode: EncodingMode,
    level: ECLevel,
    char_count: usize,
    requested: Option<Version>,
    allow_upgrade: bool,
) -> Result<Version, EncodeError> {
    let floor = requested.unwrap_or(Version::MIN);

    if let Some(req) = requested {
        if fits(mode, req, level, char_count) {
            return Ok(req);
        }
        if !allow_upgrade {
            return Err(EncodeError::InvalidVersion(req.number()));
        }
    }

    for number in floor.number()..=Version::MAX.number() {
        let version = Version::new(number)?;
        if fits(mode, version, level, char_count) {
            return Ok(version);
        }
    }
    Err(EncodeError::CapacityExceeded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_detect_mode() {
        assert_eq!(detect_mode("0123456789"), EncodingMode::Numeric);
        assert_eq!(detect_mode("HELLO WORLD"), EncodingMode::Alphanumeric);
        assert_eq!(detect_mode("Hello"), EncodingMode::Byte);
        assert_eq!(detect_mode("año 2024"), EncodingMode::Byte);
        assert_eq!(detect_mode(""), EncodingMode::Byte);
    }

    #[test]
    fn test_validate_mode() {
        assert!(validate_mode("123", EncodingMode::Numeric).is_ok());
        assert_eq!(
            validate_mode("12A", EncodingMode::Numeric),
            Err(EncodeError::UnsupportedCharacter { index: 2 })
        );
        assert_eq!(
            validate_mode("hello", EncodingMode::Alphanumeric),
            Err(EncodeError::UnsupportedCharacter { index: 0 })
        );
    }

    #[test]
    fn test_known_capacities() {
        // Character capacities from ISO 18004 Table 7
        assert!(fits(EncodingMode::Numeric, v(1), ECLevel::L, 41));
        assert!(!fits(EncodingMode::Numeric, v(1), ECLevel::L, 42));
        assert!(fits(EncodingMode::Alphanumeric, v(1), ECLevel::Q, 16));
        assert!(!fits(EncodingMode::Alphanumeric, v(1), ECLevel::Q, 17));
        assert!(fits(EncodingMode::Byte, v(1), ECLevel::H, 7));
        assert!(!fits(EncodingMode::Byte, v(1), ECLevel::H, 8));
        assert!(fits(EncodingMode::Numeric, v(40), ECLevel::L, 7089));
        assert!(!fits(EncodingMode::Numeric, v(40), ECLevel::L, 7090));
        assert!(fits(EncodingMode::Byte, v(40), ECLevel::H, 1273));
        assert!(!fits(EncodingMode::Byte, v(40), ECLevel::H, 1274));
    }

    #[test]
    fn test_select_smallest_version() {
        // "HELLO" at Q fits version 1
        let version =
            select_version(EncodingMode::Alphanumeric, ECLevel::Q, 5, None, true).unwrap();
        assert_eq!(version.number(), 1);

        // 42 digits at L need version 2
        let version = select_version(EncodingMode::Numeric, ECLevel::L, 42, None, true).unwrap();
        assert_eq!(version.number(), 2);
    }

    #[test]
    fn test_requested_version_is_floor() {
        let version =
            select_version(EncodingMode::Alphanumeric, ECLevel::Q, 5, Some(v(10)), true).unwrap();
        assert_eq!(version.number(), 10);
    }

    #[test]
    fn test_upgrade_disallowed() {
        // 42 digits do not fit version 1 at L
        let result = select_version(EncodingMode::Numeric, ECLevel::L, 42, Some(v(1)), false);
        assert_eq!(result, Err(EncodeError::InvalidVersion(1)));

        let version =
            select_version(EncodingMode::Numeric, ECLevel::L, 42, Some(v(1)), true).unwrap();
        assert_eq!(version.number(), 2);
    }

    #[test]
    fn test_capacity_exceeded() {
        let result = select_version(EncodingMode::Byte, ECLevel::H, 2000, None, true);
        assert_eq!(result, Err(EncodeError::CapacityExceeded));
    }
}
