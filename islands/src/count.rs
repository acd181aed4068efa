use bitvec::prelude::*;
use itertools::iproduct;

use crate::grid::Grid;

/// Offsets of the 8 surrounding cells, diagonals included.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Counts the maximal 8-connected groups of land cells.
///
/// Scans the grid row-major; every land cell whose visited bit is still
/// clear roots a new island and gets flooded with an explicit stack, so the
/// call stack stays flat no matter how large a single island grows. A cell
/// is marked visited the moment it is pushed, not when it is popped —
/// otherwise converging paths (any 2x2 land block) would re-add it.
pub fn count_islands(grid: &Grid) -> usize {
    let (width, height) = (grid.width(), grid.height());
    let mut visited = bitvec![0; width * height];
    let mut stack = Vec::new();
    let mut islands = 0;

    for (y, x) in iproduct!(0..height, 0..width) {
        if !grid.is_land(x as isize, y as isize) || visited[y * width + x] {
            continue;
        }

        islands += 1;
        visited.set(y * width + x, true);
        stack.push((x as isize, y as isize));

        while let Some((cx, cy)) = stack.pop() {
            for (dx, dy) in NEIGHBORS {
                let (nx, ny) = (cx + dx, cy + dy);
                // Out-of-bounds probes read as water, so this also rejects
                // coordinates off the edge of the map.
                if !grid.is_land(nx, ny) {
                    continue;
                }
                let bit = ny as usize * width + nx as usize;
                if !visited[bit] {
                    visited.set(bit, true);
                    stack.push((nx, ny));
                }
            }
        }
    }

    islands
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("\n\n", 0)]
    #[case("0", 0)]
    #[case("1", 1)]
    #[case("00", 0)]
    #[case("11", 1)]
    #[case("0\n0\n0", 0)]
    #[case("1\n1\n1", 1)]
    #[case("1\n0\n0", 1)]
    #[case("1\n0\n1", 2)]
    #[case("001\n100\n001", 3)]
    #[case("001\n101\n001", 2)]
    #[case("001\n111\n001", 1)]
    #[case("000\n000\n000", 0)]
    #[case("000\n010\n000", 1)]
    #[case("010\n101\n010", 1)]
    #[case("111\n111\n111", 1)]
    #[case("111\n101\n111", 1)]
    #[case("100\n000\n000", 1)]
    #[case("00001\n01111\n00100\n00101\n00100", 2)]
    #[case("00001\n01111\n00000\n00101\n00100", 3)]
    #[case("00001\n01111\n00101\n00101\n00101", 1)]
    #[case("10101\n00000\n10101\n00000\n10101", 9)]
    #[case("11011\n00001\n00101\n00101\n00101", 3)]
    #[case("00100\n00100\n11111\n00100\n00100", 1)]
    #[case("11111\n11111\n11111\n11111\n11111\n11111", 1)]
    #[case("11111\n10001\n10101\n10101\n10001\n11111", 2)]
    fn counts_islands(#[case] input: &str, #[case] expected: usize) {
        let grid = Grid::parse(input).unwrap();
        assert_eq!(count_islands(&grid), expected);
    }

    // A 2x2 block's adjacency graph has a cycle; without marking on push the
    // fill would enqueue the same cell twice.
    #[test]
    fn solid_block_is_one_island() {
        let grid = Grid::parse("11\n11").unwrap();
        assert_eq!(count_islands(&grid), 1);
    }

    // Diagonal-only contact still connects: land on every even (x + y) cell
    // collapses to a single island, not thirteen.
    #[test]
    fn checkerboard_connects_diagonally() {
        let grid = Grid::parse("10101\n01010\n10101\n01010\n10101").unwrap();
        assert_eq!(count_islands(&grid), 1);
    }

    #[test]
    fn counting_leaves_the_grid_reusable() {
        let grid = Grid::parse("00001\n01111\n00100\n00101\n00100").unwrap();
        let first = count_islands(&grid);
        assert_eq!(first, 2);
        assert_eq!(count_islands(&grid), first);
    }
}
