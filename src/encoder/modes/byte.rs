/// Byte mode encoder (Mode 0100)
/// One ISO-8859-1 byte per character, 8 bits each
use crate::encoder::bitstream::BitStream;

/// True if the character fits in a single ISO-8859-1 byte.
pub fn can_encode(c: char) -> bool {
    (c as u32) <= 0xFF
}

/// Payload bits needed for `char_count` byte-mode characters.
pub fn payload_bits(char_count: usize) -> usize {
    8 * char_count
}

/// Append the ISO-8859-1 bytes of `text` to the stream.
///
/// `text` must already be validated as single-byte characters.
pub fn append(text: &str, stream: &mut BitStream) {
    for c in text.chars() {
        stream.append_bits(c as u32 & 0xFF, 8);
    }
}
