//! Generator properties across sizes and seeds.

use mazecaster::core::maze;
use proptest::prelude::*;

proptest! {
    #[test]
    fn maze_is_a_solvable_spanning_tree(w in 1usize..10, h in 1usize..10, seed: u64) {
        let map = maze::generate(w, h, seed);
        prop_assert_eq!(map.width(), 2 * w + 1);
        prop_assert_eq!(map.height(), 2 * h + 1);

        // A spanning tree over w*h cells opens w*h - 1 connections, so the
        // expanded grid has exactly 2*w*h - 1 passable cells.
        let mut open = 0usize;
        for y in 0..map.height() as isize {
            for x in 0..map.width() as isize {
                if map.is_open(x, y) {
                    open += 1;
                }
            }
        }
        prop_assert_eq!(open, 2 * w * h - 1);

        // Flood fill from the start cell reaches every passable cell.
        let (gw, gh) = (map.width(), map.height());
        let mut seen = vec![false; gw * gh];
        let mut stack = vec![(1isize, 1isize)];
        seen[gw + 1] = true;
        let mut reached = 1usize;
        while let Some((x, y)) = stack.pop() {
            for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
                let (nx, ny) = (x + dx, y + dy);
                if map.is_open(nx, ny) && !seen[ny as usize * gw + nx as usize] {
                    seen[ny as usize * gw + nx as usize] = true;
                    reached += 1;
                    stack.push((nx, ny));
                }
            }
        }
        prop_assert_eq!(reached, open);
    }

    #[test]
    fn border_and_parity_hold(w in 1usize..10, h in 1usize..10, seed: u64) {
        let map = maze::generate(w, h, seed);
        let (gw, gh) = (map.width() as isize, map.height() as isize);
        for x in 0..gw {
            prop_assert!(!map.is_open(x, 0));
            prop_assert!(!map.is_open(x, gh - 1));
        }
        for y in 0..gh {
            prop_assert!(!map.is_open(0, y));
            prop_assert!(!map.is_open(gw - 1, y));
        }
        for y in 0..gh {
            for x in 0..gw {
                if x % 2 == 0 && y % 2 == 0 {
                    prop_assert!(!map.is_open(x, y));
                }
                if x % 2 == 1 && y % 2 == 1 {
                    prop_assert!(map.is_open(x, y));
                }
            }
        }
    }
}
