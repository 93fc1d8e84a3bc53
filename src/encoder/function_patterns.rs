/// Function pattern placement: finders, separators, timing, alignment,
/// and the reserved format/version areas.
use crate::models::{ModuleMatrix, Version};

/// Function module map for a specific QR version.
///
/// Painting the fixed patterns into the target matrix and recording which
/// modules are function modules happen in one pass; the map is then used to
/// keep data placement and masking away from function modules.
pub struct FunctionPatterns {
    map: ModuleMatrix,
    version: Version,
}

impl FunctionPatterns {
    /// Draw all function patterns into `matrix` and reserve the format and
    /// (version >= 7) version information areas.
    pub fn place(matrix: &mut ModuleMatrix, version: Version) -> Self {
        let size = version.size();
        debug_assert_eq!(matrix.side(), size);
        let mut map = ModuleMatrix::new(size);

        // Timing patterns (row 6 and column 6), alternating dark/light
        for i in 0..size {
            Self::paint(matrix, &mut map, i, 6, i % 2 == 0);
            Self::paint(matrix, &mut map, 6, i, i % 2 == 0);
        }

        // Finder patterns with separators, three corners
        Self::draw_finder(matrix, &mut map, 3, 3);
        Self::draw_finder(matrix, &mut map, size - 4, 3);
        Self::draw_finder(matrix, &mut map, 3, size - 4);

        // Alignment patterns, skipping the three finder corners
        let align = alignment_pattern_positions(version);
        let last = align.len().saturating_sub(1);
        for (i, &cx) in align.iter().enumerate() {
            for (j, &cy) in align.iter().enumerate() {
                let in_tl = i == 0 && j == 0;
                let in_tr = i == last && j == 0;
                let in_bl = i == 0 && j == last;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                Self::draw_alignment(matrix, &mut map, cx, cy);
            }
        }

        // Reserve format info areas; bits are written after mask selection
        for i in 0..9 {
            if i != 6 {
                map.set(8, i, true);
                map.set(i, 8, true);
            }
        }
        for i in 0..8 {
            map.set(size - 1 - i, 8, true);
            map.set(8, size - 1 - i, true);
        }

        // Dark module, always set
        Self::paint(matrix, &mut map, 8, size - 8, true);

        // Reserve version info areas (v7+)
        if version.number() >= 7 {
            for dy in 0..6 {
                for dx in 0..3 {
                    map.set(size - 11 + dx, dy, true);
                    map.set(dy, size - 11 + dx, true);
                }
            }
        }

        Self { map, version }
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.map.side()
    }

    /// Version this map was built for.
    pub fn version(&self) -> Version {
        self.version
    }

    /// True if (x, y) is a function module (never holds data, never masked).
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.map.is_dark(x, y)
    }

    /// Number of modules available for data and EC bits.
    pub fn data_module_count(&self) -> usize {
        let size = self.map.side();
        size * size - self.map.dark_count()
    }

    fn paint(matrix: &mut ModuleMatrix, map: &mut ModuleMatrix, x: usize, y: usize, dark: bool) {
        matrix.set(x, y, dark);
        map.set(x, y, true);
    }

    /// 7x7 finder ring centered at (cx, cy) plus the surrounding light
    /// separator, clipped at the grid edge.
    fn draw_finder(matrix: &mut ModuleMatrix, map: &mut ModuleMatrix, cx: usize, cy: usize) {
        let size = matrix.side() as i32;
        for dy in -4i32..=4 {
            for dx in -4i32..=4 {
                let x = cx as i32 + dx;
                let y = cy as i32 + dy;
                if x < 0 || y < 0 || x >= size || y >= size {
                    continue;
                }
                let dist = dx.abs().max(dy.abs());
                Self::paint(matrix, map, x as usize, y as usize, dist != 2 && dist != 4);
            }
        }
    }

    /// 5x5 alignment pattern centered at (cx, cy): dark border, light ring,
    /// dark center.
    fn draw_alignment(matrix: &mut ModuleMatrix, map: &mut ModuleMatrix, cx: usize, cy: usize) {
        for dy in -2i32..=2 {
            for dx in -2i32..=2 {
                let x = (cx as i32 + dx) as usize;
                let y = (cy as i32 + dy) as usize;
                Self::paint(matrix, map, x, y, dx.abs().max(dy.abs()) != 1);
            }
        }
    }
}

/// Alignment pattern center coordinates for a given version.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let ver = version.number() as usize;
    if ver == 1 {
        return Vec::new();
    }
    let num_align = ver / 7 + 2;
    let size = version.size();
    // Spacing rounded up to the nearest even number; the first gap absorbs
    // the remainder
    let step = (ver * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos = pos.wrapping_sub(step);
    }
    positions
}
