//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and its two implementations: the [EliminationSolver], which only
//! applies candidate elimination, and the [HypothesisSolver], which extends
//! elimination by a single speculative assignment when elimination alone
//! stalls. Solvers report their result as a [Solution], which carries both
//! the resulting grid and the technique that produced it.
//!
//! The machinery the solvers are built from is located in the submodules:
//! the candidate representation in [candidates], the elimination engine in
//! [elimination], and the speculative search in [hypothesis].
//!
//! As an example, the following puzzle stalls under pure elimination but is
//! solved once a single hypothesis is allowed:
//!
//! ```
//! use sudoku_deduction::SudokuGrid;
//! use sudoku_deduction::solver::{
//!     EliminationSolver,
//!     HypothesisSolver,
//!     Solution,
//!     Solver
//! };
//!
//! let puzzle = SudokuGrid::parse("\
//!     4, ,5, ,6,1,7,8, ,\
//!      , ,8,4, , , , ,9,\
//!      , ,9, , ,3, ,4, ,\
//!     8, , , , ,5, , ,4,\
//!      ,5,7, ,8,4,3,9, ,\
//!     9, , , ,3, , , ,6,\
//!      ,8, ,7, , ,4, , ,\
//!     5, , , , ,6,9, , ,\
//!      ,9,3,5,4, ,1, ,7").unwrap();
//!
//! assert!(!EliminationSolver.solve(&puzzle).is_solved());
//!
//! match HypothesisSolver.solve(&puzzle) {
//!     Solution::ByHypothesis(grid) => assert!(grid.is_full()),
//!     _ => panic!("this puzzle requires exactly one hypothesis")
//! }
//! ```

pub mod candidates;
pub mod elimination;
pub mod hypothesis;

use crate::SudokuGrid;
use crate::solver::candidates::CandidateGrid;

use serde::{Deserialize, Serialize};

/// An enumeration of the outcomes of a solve attempt. Every variant wraps
/// the resulting [SudokuGrid]; the variant itself tells which technique
/// produced it.
///
/// Note that the result is relative to the solver: a Sudoku reported as
/// [Solution::Incomplete] by the [EliminationSolver] may well be solved by
/// the [HypothesisSolver], and a Sudoku the latter cannot solve may still
/// have a solution that requires deeper search. No uniqueness statement is
/// made either - the wrapped grid is simply the first solution the
/// technique found.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Solution {

    /// Indicates that every cell of the input grid was already occupied and
    /// the given digits were mutually consistent, so there was nothing to
    /// solve. The wrapped grid equals the input.
    AlreadySolved(SudokuGrid),

    /// Indicates that candidate elimination alone fully determined the
    /// grid.
    ByElimination(SudokuGrid),

    /// Indicates that the grid was fully determined by a single speculative
    /// assignment followed by candidate elimination.
    ByHypothesis(SudokuGrid),

    /// Indicates that the grid could not be fully determined by the applied
    /// techniques. The wrapped grid contains every cell that could be
    /// determined; all other cells are empty. This is also the outcome for
    /// puzzles whose given digits contradict each other, which are not
    /// distinguished from puzzles that are merely too hard.
    Incomplete(SudokuGrid)
}

impl Solution {

    /// Gets a reference to the grid that resulted from the solve attempt.
    /// For [Solution::Incomplete], this is the partially determined grid.
    pub fn grid(&self) -> &SudokuGrid {
        match self {
            Solution::AlreadySolved(grid) => grid,
            Solution::ByElimination(grid) => grid,
            Solution::ByHypothesis(grid) => grid,
            Solution::Incomplete(grid) => grid
        }
    }

    /// Takes ownership of the grid that resulted from the solve attempt.
    /// For [Solution::Incomplete], this is the partially determined grid.
    pub fn into_grid(self) -> SudokuGrid {
        match self {
            Solution::AlreadySolved(grid) => grid,
            Solution::ByElimination(grid) => grid,
            Solution::ByHypothesis(grid) => grid,
            Solution::Incomplete(grid) => grid
        }
    }

    /// Indicates whether the solve attempt determined every cell, i.e. this
    /// is any variant except [Solution::Incomplete].
    pub fn is_solved(&self) -> bool {
        match self {
            Solution::Incomplete(_) => false,
            _ => true
        }
    }

    /// Gets the values of all 81 cells of the resulting grid in
    /// left-to-right, top-to-bottom order, where determined cells are
    /// represented by their digit and undetermined cells by the sentinel
    /// value `0`. This is syntactic sugar for `x.grid().values()`.
    pub fn values(&self) -> Vec<usize> {
        self.grid().values()
    }
}

/// A trait for structs which have the ability to solve Sudoku. Not all
/// implementers must be able to solve every solvable Sudoku, some solvers
/// may be less powerful, similar to a less experienced human solver. This
/// makes it possible to check which technique a Sudoku requires.
pub trait Solver {

    /// Solves, or attempts to solve, the provided Sudoku grid. If the
    /// solver cannot fully determine the grid, it shall return
    /// [Solution::Incomplete] wrapping the grid of all cells it could
    /// determine.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

fn to_solved_solution(cands: &CandidateGrid, input_was_full: bool)
        -> Solution {
    if input_was_full {
        log::debug!("input grid was already fully determined");
        Solution::AlreadySolved(cands.to_grid())
    }
    else {
        log::debug!("solved by candidate elimination alone");
        Solution::ByElimination(cands.to_grid())
    }
}

/// A [Solver] which applies candidate elimination until it reaches a
/// fixpoint and nothing changes anymore. This solves every puzzle that
/// keeps at least one cell determinable at every step (a *level-0* puzzle),
/// but stalls on anything harder.
pub struct EliminationSolver;

impl Solver for EliminationSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut cands = CandidateGrid::from_grid(grid);
        elimination::to_fixpoint(&mut cands);

        if cands.is_solved() {
            to_solved_solution(&cands, grid.is_full())
        }
        else {
            Solution::Incomplete(cands.to_grid())
        }
    }
}

/// A [Solver] which first applies candidate elimination like the
/// [EliminationSolver] and, if that stalls, additionally tries speculative
/// assignments: each candidate of each undetermined cell is entered on a
/// copy of the grid and elimination is rerun, accepting the first copy that
/// comes out fully determined. This solves every *level-1* puzzle, i.e.
/// every puzzle that becomes a level-0 puzzle after one correct assumption.
///
/// Only a single hypothesis is ever in flight - trials are never nested.
/// Puzzles that require two or more chained assumptions are reported as
/// [Solution::Incomplete], wrapping the grid as reduced by elimination
/// before the search.
pub struct HypothesisSolver;

impl Solver for HypothesisSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut cands = CandidateGrid::from_grid(grid);
        elimination::to_fixpoint(&mut cands);

        if cands.is_solved() {
            return to_solved_solution(&cands, grid.is_full());
        }

        match hypothesis::search(&cands) {
            Some(solved) => {
                log::debug!("solved with a single hypothesis");
                Solution::ByHypothesis(solved.to_grid())
            },
            None => {
                log::debug!("not solvable with at most one hypothesis");
                Solution::Incomplete(cands.to_grid())
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::CELL_COUNT;

    fn full_consistent_grid() -> SudokuGrid {
        SudokuGrid::parse("\
            1,6,4,5,8,3,2,7,9,\
            3,9,8,4,7,2,1,5,6,\
            2,5,7,9,6,1,4,8,3,\
            9,4,1,6,5,7,3,2,8,\
            8,2,3,1,4,9,7,6,5,\
            6,7,5,3,2,8,9,4,1,\
            4,1,6,2,9,5,8,3,7,\
            5,8,9,7,3,4,6,1,2,\
            7,3,2,8,1,6,5,9,4").unwrap()
    }

    #[test]
    fn full_consistent_grid_is_already_solved() {
        let grid = full_consistent_grid();

        let solution = EliminationSolver.solve(&grid);

        assert_eq!(Solution::AlreadySolved(grid.clone()), solution);
        assert_eq!(grid.values(), solution.values());
    }

    #[test]
    fn hypothesis_solver_agrees_on_already_solved() {
        let grid = full_consistent_grid();
        assert_eq!(Solution::AlreadySolved(grid.clone()),
            HypothesisSolver.solve(&grid));
    }

    #[test]
    fn contradictory_full_grid_is_incomplete() {
        let mut grid = full_consistent_grid();

        // Duplicates the 6 of cell (1, 0) within the top row.
        grid.set_cell(0, 0, 6).unwrap();

        let solution = EliminationSolver.solve(&grid);

        assert!(!solution.is_solved());
        assert!(solution.values().contains(&0));
    }

    #[test]
    fn empty_grid_is_incomplete() {
        let grid = SudokuGrid::new();

        let solution = HypothesisSolver.solve(&grid);

        // With no information at all, not even a hypothesis determines
        // anything beyond the assumed cell.
        assert!(!solution.is_solved());
        assert_eq!(vec![0; CELL_COUNT], solution.values());
    }

    #[test]
    fn incomplete_reports_partial_reduction() {
        // Top row missing only the 9, everything else empty: elimination
        // determines exactly that cell and nothing more.
        let mut grid = SudokuGrid::new();

        for column in 0..8 {
            grid.set_cell(column, 0, column + 1).unwrap();
        }

        let solution = EliminationSolver.solve(&grid);

        assert!(!solution.is_solved());
        assert_eq!(Some(9), solution.grid().get_cell(8, 0).unwrap());
        assert_eq!(None, solution.grid().get_cell(0, 1).unwrap());
    }

    #[test]
    fn solution_serde_round_trip() {
        let solution = EliminationSolver.solve(&full_consistent_grid());

        let json = serde_json::to_string(&solution).unwrap();
        let deserialized: Solution =
            serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(solution, deserialized);
    }
}
