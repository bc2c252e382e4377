//! This module contains the candidate representation on which the solving
//! engine operates: the [CandidateGrid], which tracks the digits that could
//! still go into each cell, and the decomposition of the grid into its 27
//! [groups].

use crate::{BLOCK_SIZE, SIZE, SudokuGrid, index};
use crate::util::DigitSet;

/// The number of groups a Sudoku grid decomposes into: 9 rows, 9 columns,
/// and 9 blocks.
pub const GROUP_COUNT: usize = 3 * SIZE;

/// Computes the 27 groups of a Sudoku grid as lists of cell indices into a
/// flat array of 81 cells (see [SudokuGrid::cells](crate::SudokuGrid::cells)
/// for the ordering). The first 9 groups are the rows from top to bottom,
/// the next 9 the columns from left to right, and the last 9 the blocks in
/// left-to-right, top-to-bottom order.
///
/// Every cell appears in exactly three groups - its row, its column, and its
/// block. The solution of a Sudoku must contain each digit exactly once in
/// every group, which is the only rule the solving engine uses.
pub fn groups() -> [[usize; SIZE]; GROUP_COUNT] {
    let mut groups = [[0; SIZE]; GROUP_COUNT];

    for i in 0..SIZE {
        for j in 0..SIZE {
            groups[i][j] = index(j, i);
            groups[SIZE + i][j] = index(i, j);
            groups[2 * SIZE + i][j] =
                3 * SIZE * (i / BLOCK_SIZE) + SIZE * (j / BLOCK_SIZE) +
                BLOCK_SIZE * (i % BLOCK_SIZE) + j % BLOCK_SIZE;
        }
    }

    groups
}

/// Tracks, for every cell of a Sudoku grid, the set of digits that could
/// still go into that cell. This is analogous to the pencil markings a human
/// player would make. A cell is *determined* when exactly one candidate is
/// left; the grid is solved when every cell is determined.
///
/// The candidate sets only ever shrink: the solving engine removes digits
/// that can be excluded, and determination emerges when a set has been
/// reduced to a single digit. An inconsistent grid can drive a set empty,
/// which is not treated as an error - such a cell merely remains
/// undetermined (see [elimination](crate::solver::elimination)).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateGrid {
    cells: Vec<DigitSet>
}

impl CandidateGrid {

    /// Creates the candidate grid for the given [SudokuGrid]: the candidates
    /// of every occupied cell are only the digit in that cell, while the
    /// candidates of every empty cell are all digits from 1 to 9. No digits
    /// are excluded yet, that is the solving engine's job.
    pub fn from_grid(grid: &SudokuGrid) -> CandidateGrid {
        let cells = grid.cells().iter()
            .map(|cell| match cell {
                Some(number) => DigitSet::singleton(*number).unwrap(),
                None => DigitSet::all()
            })
            .collect();

        CandidateGrid {
            cells
        }
    }

    /// Gets the candidate set of the cell with the given index.
    ///
    /// # Panics
    ///
    /// If `index` is 81 or greater.
    pub fn cell(&self, index: usize) -> &DigitSet {
        &self.cells[index]
    }

    /// Gets a mutable reference to the candidate set of the cell with the
    /// given index.
    ///
    /// # Panics
    ///
    /// If `index` is 81 or greater.
    pub fn cell_mut(&mut self, index: usize) -> &mut DigitSet {
        &mut self.cells[index]
    }

    /// Indicates whether this candidate grid is solved, i.e. every cell is
    /// determined. Note that a cell whose candidate set was driven empty by
    /// a contradiction is *not* determined, so a contradictory grid is never
    /// solved.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|cell| cell.value().is_some())
    }

    /// Gets the values of all 81 cells in left-to-right, top-to-bottom
    /// order, where determined cells are represented by their digit and
    /// undetermined cells by the sentinel value `0`.
    pub fn values(&self) -> Vec<usize> {
        self.cells.iter()
            .map(|cell| cell.value().unwrap_or(0))
            .collect()
    }

    /// Converts this candidate grid into a [SudokuGrid] in which every
    /// determined cell is occupied by its digit and every other cell is
    /// empty.
    pub fn to_grid(&self) -> SudokuGrid {
        let cells = self.cells.iter()
            .map(DigitSet::value)
            .collect();

        SudokuGrid::from_cells(cells).unwrap()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::CELL_COUNT;

    use std::collections::HashSet;

    #[test]
    fn group_structure() {
        let groups = groups();

        assert_eq!(GROUP_COUNT, groups.len());

        // Every group consists of 9 distinct cells.

        for group in groups.iter() {
            let distinct: HashSet<usize> = group.iter().cloned().collect();
            assert_eq!(SIZE, distinct.len());
            assert!(group.iter().all(|&cell| cell < CELL_COUNT));
        }

        // Every cell is a member of exactly 3 groups.

        let mut memberships = [0usize; CELL_COUNT];

        for group in groups.iter() {
            for &cell in group.iter() {
                memberships[cell] += 1;
            }
        }

        assert!(memberships.iter().all(|&count| count == 3));
    }

    #[test]
    fn group_examples() {
        let groups = groups();

        // Second row, fourth column, top-left and central block.
        assert_eq!([9, 10, 11, 12, 13, 14, 15, 16, 17], groups[1]);
        assert_eq!([3, 12, 21, 30, 39, 48, 57, 66, 75], groups[12]);
        assert_eq!([0, 1, 2, 9, 10, 11, 18, 19, 20], groups[18]);
        assert_eq!([30, 31, 32, 39, 40, 41, 48, 49, 50], groups[22]);
    }

    #[test]
    fn from_grid_initializes_candidates() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(2, 0, 7).unwrap();

        let cands = CandidateGrid::from_grid(&grid);

        assert_eq!(Some(7), cands.cell(2).value());
        assert_eq!(9, cands.cell(0).len());
        assert_eq!(9, cands.cell(80).len());
    }

    #[test]
    fn solved_iff_all_determined() {
        let mut grid = SudokuGrid::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                grid.set_cell(column, row, 1 + (column + row) % SIZE)
                    .unwrap();
            }
        }

        let mut cands = CandidateGrid::from_grid(&grid);
        assert!(cands.is_solved());

        *cands.cell_mut(40) = DigitSet::all();
        assert!(!cands.is_solved());

        *cands.cell_mut(40) = DigitSet::new();
        assert!(!cands.is_solved());
    }

    #[test]
    fn values_and_to_grid_use_determined_cells() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 4).unwrap();

        let mut cands = CandidateGrid::from_grid(&grid);
        *cands.cell_mut(1) = DigitSet::new();

        let values = cands.values();

        assert_eq!(4, values[0]);
        assert_eq!(0, values[1]);
        assert_eq!(0, values[2]);

        let result = cands.to_grid();

        assert_eq!(Some(4), result.get_cell(0, 0).unwrap());
        assert_eq!(None, result.get_cell(1, 0).unwrap());
    }
}
