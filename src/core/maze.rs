//! Randomized depth-first maze generation.
//!
//! The carve works on a small logical grid of connectivity masks and is
//! expanded afterwards into the occupancy grid the renderers consume:
//! logical cells land on odd coordinates, carved connections open the
//! between-cell, everything else stays wall.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::map::Map;

const WALL: u8 = 1;
/// Even/even intersections get their own variant so pillars read differently.
const PILLAR: u8 = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    fn bit(self) -> u8 {
        match self {
            Dir::Up => 1,
            Dir::Down => 2,
            Dir::Left => 4,
            Dir::Right => 8,
        }
    }

    fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    /// Offset in logical cells; y grows downward, matching grid rows.
    fn offset(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

/// Logical maze during generation: one 4-bit connectivity mask per cell.
/// Consumed by `into_map` and never seen by the renderers.
struct MazeGrid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl MazeGrid {
    fn carve(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        let mut grid = Self {
            width,
            height,
            cells: vec![0; width * height],
        };
        let mut visited = vec![false; width * height];
        visited[0] = true;
        grid.carve_from(0, 0, &mut visited, rng);
        grid
    }

    /// Depth-first carve. Recursion depth is bounded by width * height
    /// since every cell is visited exactly once.
    fn carve_from(&mut self, x: usize, y: usize, visited: &mut [bool], rng: &mut impl Rng) {
        let mut dirs = Dir::ALL;
        dirs.shuffle(rng);
        for dir in dirs {
            let (dx, dy) = dir.offset();
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || nx >= self.width as isize || ny >= self.height as isize {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if visited[ny * self.width + nx] {
                continue;
            }
            visited[ny * self.width + nx] = true;
            self.cells[y * self.width + x] |= dir.bit();
            self.cells[ny * self.width + nx] |= dir.opposite().bit();
            self.carve_from(nx, ny, visited, rng);
        }
    }

    fn connected(&self, x: usize, y: usize, dir: Dir) -> bool {
        self.cells[y * self.width + x] & dir.bit() != 0
    }

    /// Expand to the (2w+1) x (2h+1) occupancy grid. Odd/odd cells are the
    /// logical cells and always open; a carved connection opens the cell
    /// between them; the border and every even/even intersection stay wall.
    fn into_map(self) -> Map {
        let gw = 2 * self.width + 1;
        let gh = 2 * self.height + 1;
        let mut cells = vec![WALL; gw * gh];
        for gy in (0..gh).step_by(2) {
            for gx in (0..gw).step_by(2) {
                cells[gy * gw + gx] = PILLAR;
            }
        }
        for y in 0..self.height {
            for x in 0..self.width {
                cells[(2 * y + 1) * gw + 2 * x + 1] = 0;
                if self.connected(x, y, Dir::Right) {
                    cells[(2 * y + 1) * gw + 2 * x + 2] = 0;
                }
                if self.connected(x, y, Dir::Down) {
                    cells[(2 * y + 2) * gw + 2 * x + 1] = 0;
                }
            }
        }
        Map::new(gw, gh, cells)
    }
}

/// Generate a maze map of size `(2*width+1) x (2*height+1)`. The same seed
/// always yields the same layout. Dimensions must be positive; the carve
/// recursion is `width * height` deep, so callers keep them small.
pub fn generate(width: usize, height: usize, seed: u64) -> Map {
    let mut rng = StdRng::seed_from_u64(seed);
    MazeGrid::carve(width, height, &mut rng).into_map()
}
