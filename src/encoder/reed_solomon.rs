/// Reed-Solomon error correction coding for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

impl Gf256 {
    /// Multiply two field elements.
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// Raise a field element to a power.
    pub fn pow_usize(a: u8, n: usize) -> u8 {
        if a == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let exp = (log_a * (n % 255)) % 255;
        EXP_TABLE[exp]
    }
}

/// Reed-Solomon encoder producing EC codewords for one block.
///
/// The generator polynomial has roots alpha^0 .. alpha^(degree-1); the EC
/// codewords are the remainder of `data * x^degree` divided by it. Pure and
/// block-local: blocks never share state.
pub struct ReedSolomonEncoder {
    degree: usize,
    /// Generator coefficients from x^(degree-1) down to x^0, leading 1 dropped.
    divisor: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Build the generator polynomial of the given degree (EC codewords per block).
    pub fn new(degree: usize) -> Self {
        debug_assert!((1..=254).contains(&degree));

        // Multiply out prod (x + alpha^i) for i = 0..degree, ascending coefficients
        let mut gpoly = vec![0u8; degree + 1];
        gpoly[0] = 1;
        for i in 0..degree {
            let root = Gf256::pow_usize(2, i);
            for j in (1..=i + 1).rev() {
                gpoly[j] = gpoly[j - 1] ^ Gf256::mul(gpoly[j], root);
            }
            gpoly[0] = Gf256::mul(gpoly[0], root);
        }

        // Reverse non-leading coefficients for descending-order division
        let mut divisor: Vec<u8> = gpoly[0..degree].to_vec();
        divisor.reverse();

        Self { degree, divisor }
    }

    /// Generator polynomial degree (number of EC codewords produced).
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Compute the EC codewords for a block of data codewords.
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let mut remainder = vec![0u8; self.degree];
        for &d in data {
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            remainder[self.degree - 1] = 0;
            for (r, &g) in remainder.iter_mut().zip(&self.divisor) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Evaluate a codeword polynomial (descending coefficients) at alpha^power.
    fn syndrome(codeword: &[u8], power: usize) -> u8 {
        let n = codeword.len();
        let mut sum = 0u8;
        for (j, &c) in codeword.iter().enumerate() {
            sum ^= Gf256::mul(c, Gf256::pow_usize(2, power * (n - 1 - j)));
        }
        sum
    }

    #[test]
    fn test_gf256_basic() {
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        // alpha^255 = 1 (order of the multiplicative group)
        assert_eq!(Gf256::pow_usize(2, 255), 1);
        assert_eq!(Gf256::pow_usize(2, 256), 2);
        assert_eq!(Gf256::pow_usize(2, 0), 1);
        assert_eq!(Gf256::pow_usize(0, 10), 0);
    }

    #[test]
    fn test_remainder_length() {
        for degree in [7, 10, 13, 17, 30] {
            let rs = ReedSolomonEncoder::new(degree);
            assert_eq!(rs.degree(), degree);
            assert_eq!(rs.remainder(&[1, 2, 3, 4, 5]).len(), degree);
        }
    }

    #[test]
    fn test_zero_data_zero_remainder() {
        let rs = ReedSolomonEncoder::new(10);
        assert_eq!(rs.remainder(&[0u8; 16]), vec![0u8; 10]);
    }

    #[test]
    fn test_codeword_has_zero_syndromes() {
        // data + remainder must be divisible by the generator, i.e. evaluate
        // to zero at every generator root alpha^0 .. alpha^(degree-1)
        let data = [0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11];
        for degree in [7, 10, 22, 30] {
            let rs = ReedSolomonEncoder::new(degree);
            let mut codeword = data.to_vec();
            codeword.extend(rs.remainder(&data));
            for power in 0..degree {
                assert_eq!(
                    syndrome(&codeword, power),
                    0,
                    "nonzero syndrome at root {} for degree {}",
                    power,
                    degree
                );
            }
        }
    }

    #[test]
    fn test_known_vector_version1_m() {
        // "01234567" numeric, version 1-M: the worked example from the
        // QR specification annex
        let data = [
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ];
        let rs = ReedSolomonEncoder::new(10);
        assert_eq!(
            rs.remainder(&data),
            vec![0xA5, 0x24, 0xD4, 0xC1, 0xED, 0x36, 0xC7, 0x87, 0x2C, 0x55]
        );
    }
}
