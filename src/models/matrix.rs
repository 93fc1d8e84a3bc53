/// A single cell of the QR grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// Light module (background color).
    Light,
    /// Dark module (foreground color).
    Dark,
}

impl Module {
    /// True for dark modules.
    pub fn is_dark(&self) -> bool {
        matches!(self, Module::Dark)
    }
}

/// Compact square module grid, packed bitwise into bytes.
///
/// One bit per module, row-major. This is the encoder's sole output artifact:
/// consumers query it read-only through [`ModuleMatrix::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    side: usize,
    data: Vec<u8>,
}

impl ModuleMatrix {
    /// Create a new all-light matrix with the given side length.
    pub fn new(side: usize) -> Self {
        let bytes_needed = (side * side).div_ceil(8);
        Self {
            side,
            data: vec![0; bytes_needed],
        }
    }

    /// Side length in modules (equal to `17 + 4 * version`).
    pub fn side(&self) -> usize {
        self.side
    }

    /// Get the module at (x, y). Out-of-range coordinates return `Light`.
    pub fn get(&self, x: usize, y: usize) -> Module {
        if self.is_dark(x, y) {
            Module::Dark
        } else {
            Module::Light
        }
    }

    /// True if the module at (x, y) is dark. Out-of-range returns false.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.side || y >= self.side {
            return false;
        }
        let index = y * self.side + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set the module at (x, y) dark (true) or light (false).
    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        if x >= self.side || y >= self.side {
            return;
        }
        let index = y * self.side + x;
        if dark {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Toggle the module at (x, y).
    pub fn toggle(&mut self, x: usize, y: usize) {
        if x >= self.side || y >= self.side {
            return;
        }
        let index = y * self.side + x;
        self.data[index / 8] ^= 1 << (index % 8);
    }

    /// Count of dark modules in the whole grid.
    pub fn dark_count(&self) -> usize {
        // Trailing padding bits in the last byte are never set.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_matrix() {
        let mut matrix = ModuleMatrix::new(21);
        assert_eq!(matrix.side(), 21);
        assert_eq!(matrix.get(3, 4), Module::Light);

        matrix.set(3, 4, true);
        assert_eq!(matrix.get(3, 4), Module::Dark);
        assert!(matrix.is_dark(3, 4));
        assert!(!matrix.is_dark(4, 3));

        matrix.toggle(3, 4);
        assert!(!matrix.is_dark(3, 4));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut matrix = ModuleMatrix::new(21);
        matrix.set(30, 30, true); // Should not panic
        assert_eq!(matrix.get(30, 30), Module::Light);
    }

    #[test]
    fn test_dark_count() {
        let mut matrix = ModuleMatrix::new(21);
        assert_eq!(matrix.dark_count(), 0);
        matrix.set(0, 0, true);
        matrix.set(20, 20, true);
        assert_eq!(matrix.dark_count(), 2);
        matrix.set(0, 0, true);
        assert_eq!(matrix.dark_count(), 2);
    }
}
