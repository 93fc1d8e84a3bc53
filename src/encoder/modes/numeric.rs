/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, remainder of 2 = 7 bits, 1 = 4 bits
use crate::encoder::bitstream::BitStream;

/// True if the character is representable in numeric mode.
pub fn can_encode(c: char) -> bool {
    c.is_ascii_digit()
}

/// Payload bits needed for `char_count` digits.
pub fn payload_bits(char_count: usize) -> usize {
    10 * (char_count / 3) + [0, 4, 7][char_count % 3]
}

/// Append the packed digits of `text` to the stream.
///
/// `text` must already be validated as all-digits.
pub fn append(text: &str, stream: &mut BitStream) {
    let digits: Vec<u32> = text.chars().map(|c| c.to_digit(10).unwrap_or(0)).collect();
    for group in digits.chunks(3) {
        let value = group.iter().fold(0u32, |acc, &d| acc * 10 + d);
        let bits = match group.len() {
            3 => 10,
            2 => 7,
            _ => 4,
        };
        stream.append_bits(value, bits);
    }
}
