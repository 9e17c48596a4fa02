//! Occupancy grid shared by the renderers and movement.

/// Rectangular grid of occupancy cells, row-major: `0` is passable, `1` a
/// generic wall, `2` and up wall variants (color only). Immutable once built.
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Map {
    pub fn new(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy at `(x, y)`. Anything outside the grid answers as solid,
    /// so callers can never index out of bounds.
    #[inline]
    pub fn at(&self, x: isize, y: isize) -> u8 {
        if x < 0 || y < 0 {
            return 1;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return 1;
        }
        self.cells[y * self.width + x]
    }

    #[inline]
    pub fn is_open(&self, x: isize, y: isize) -> bool {
        self.at(x, y) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_is_solid() {
        let map = Map::new(2, 2, vec![0, 0, 0, 0]);
        assert_eq!(map.at(-1, 0), 1);
        assert_eq!(map.at(0, -1), 1);
        assert_eq!(map.at(2, 0), 1);
        assert_eq!(map.at(1, 2), 1);
        assert!(map.is_open(1, 1));
    }
}
