/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
/// Pairs = 11 bits, single remainder = 6 bits
use crate::encoder::bitstream::BitStream;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Value of a character in the 45-symbol alphanumeric alphabet.
pub fn value_of(c: char) -> Option<u32> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&t| t == c)
        .map(|i| i as u32)
}

/// True if the character is representable in alphanumeric mode.
pub fn can_encode(c: char) -> bool {
    value_of(c).is_some()
}

/// Payload bits needed for `char_count` alphanumeric characters.
pub fn payload_bits(char_count: usize) -> usize {
    11 * (char_count / 2) + 6 * (char_count % 2)
}

/// Append the packed characters of `text` to the stream.
///
/// `text` must already be validated against the alphanumeric alphabet.
pub fn append(text: &str, stream: &mut BitStream) {
    let values: Vec<u32> = text.chars().filter_map(value_of).collect();
    for pair in values.chunks(2) {
        match pair {
            [a, b] => stream.append_bits(a * 45 + b, 11),
            [a] => stream.append_bits(*a, 6),
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of_matches_table() {
        for (i, &c) in ALPHANUMERIC_TABLE.iter().enumerate() {
            assert_eq!(value_of(c), Some(i as u32));
        }
        assert_eq!(value_of('a'), None);
        assert_eq!(value_of('!'), None);
    }

    #[test]
    fn test_payload_bits() {
        assert_eq!(payload_bits(0), 0);
        assert_eq!(payload_bits(1), 6);
        assert_eq!(payload_bits(2), 11);
        assert_eq!(payload_bits(5), 28);
    }

    #[test]
    fn test_append_pair() {
        // "A1" = 10 * 45 + 1 = 451 = 00111000011 in 11 bits
        let mut stream = BitStream::new();
        append("A1", &mut stream);
        assert_eq!(stream.len(), 11);
        let bits: Vec<bool> = (0..11).map(|i| stream.bit(i)).collect();
        assert_eq!(
            bits,
            vec![false, false, true, true, true, false, false, false, false, true, true]
        );
    }

    #[test]
    fn test_append_single() {
        // ":" = 44 = 101100 in 6 bits
        let mut stream = BitStream::new();
        append(":", &mut stream);
        assert_eq!(stream.len(), 6);
        let bits: Vec<bool> = (0..6).map(|i| stream.bit(i)).collect();
        assert_eq!(bits, vec![true, false, true, true, false, false]);
    }
}
