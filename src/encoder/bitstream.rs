/// Bit stream construction for QR data encoding
use crate::encoder::modes::{alphanumeric, byte, numeric};
use crate::encoder::tables;
use crate::models::{ECLevel, EncodingMode, Version};

/// Append-only bit sequence, MSB-first within each appended value.
#[derive(Debug, Clone, Default)]
pub struct BitStream {
    data: Vec<u8>,
    len: usize,
}

impl BitStream {
    /// Create an empty bit stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits appended so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no bits have been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append the low `count` bits of `value`, most significant first.
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        debug_assert!(count == 32 || value >> count == 0);
        for i in (0..count).rev() {
            let bit = (value >> i) & 1 == 1;
            if self.len % 8 == 0 {
                self.data.push(0);
            }
            if bit {
                self.data[self.len / 8] |= 0x80 >> (self.len % 8);
            }
            self.len += 1;
        }
    }

    /// Bit at the given index (must be < len).
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        (self.data[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Consume the stream into whole bytes. The length must be byte-aligned.
    pub fn into_bytes(self) -> Vec<u8> {
        debug_assert_eq!(self.len % 8, 0);
        self.data
    }
}

/// Data encoding stage: text to padded data-codeword bit stream.
///
/// Emits the mode indicator, character-count indicator and packed payload,
/// then the terminator, byte alignment, and alternating 0xEC/0x11 pad bytes
/// up to the exact data capacity for the version/level.
pub struct DataEncoder;

impl DataEncoder {
    /// Encode `text` (already validated against `mode`) into the full padded
    /// bit stream for the given version and level.
    pub fn encode(text: &str, mode: EncodingMode, version: Version, level: ECLevel) -> BitStream {
        let capacity_bits = tables::data_codewords(version, level) * 8;
        let char_count = text.chars().count();

        let mut stream = BitStream::new();
        stream.append_bits(mode.mode_bits(), 4);
        stream.append_bits(char_count as u32, mode.char_count_bits(version));
        match mode {
            EncodingMode::Numeric => numeric::append(text, &mut stream),
            EncodingMode::Alphanumeric => alphanumeric::append(text, &mut stream),
            EncodingMode::Byte => byte::append(text, &mut stream),
        }
        debug_assert!(stream.len() <= capacity_bits);

        // Terminator: up to 4 zero bits, fewer if capacity is nearly full
        let terminator = 4.min(capacity_bits - stream.len());
        stream.append_bits(0, terminator);

        // Align to a codeword boundary
        let align = (8 - stream.len() % 8) % 8;
        stream.append_bits(0, align);

        // Alternating pad codewords until the capacity is reached exactly
        for &pad in [0xEC, 0x11].iter().cycle() {
            if stream.len() >= capacity_bits {
                break;
            }
            stream.append_bits(pad, 8);
        }
        debug_assert_eq!(stream.len(), capacity_bits);

        stream
    }
}
