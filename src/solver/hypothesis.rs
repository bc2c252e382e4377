//! This module contains the speculative search that extends candidate
//! elimination when it stalls.
//!
//! The search considers every undetermined cell and every one of its
//! remaining candidates as a *hypothesis*: the candidate is entered into a
//! private copy of the candidate grid, which is then reduced by elimination.
//! The first copy that comes out fully determined is accepted as the
//! solution. A hypothesis that leads to a contradiction empties some
//! candidate set of its trial grid, which therefore never counts as solved
//! and is discarded without any special handling.
//!
//! Hypotheses are never nested: each trial gets exactly one speculative
//! assignment. A puzzle that requires two or more chained assumptions is
//! beyond this search and yields no result.

use crate::CELL_COUNT;
use crate::solver::candidates::CandidateGrid;
use crate::solver::elimination;
use crate::util::DigitSet;

/// Searches for a single hypothesis that, followed by candidate elimination,
/// fully determines the given grid. Cells are tried in ascending index
/// order and the candidates of each cell in ascending digit order; the
/// first trial that solves the grid is returned immediately. This fixed
/// order makes the result reproducible even for (invalid) inputs that more
/// than one hypothesis would complete.
///
/// The input grid is left untouched; every trial operates on its own copy.
/// If no trial succeeds, `None` is returned and the caller keeps the grid
/// as elimination left it.
pub fn search(cands: &CandidateGrid) -> Option<CandidateGrid> {
    for cell in 0..CELL_COUNT {
        let options = *cands.cell(cell);

        if options.len() > 1 {
            for value in options.iter() {
                let mut trial = cands.clone();
                *trial.cell_mut(cell) = DigitSet::singleton(value).unwrap();
                elimination::to_fixpoint(&mut trial);

                if trial.is_solved() {
                    log::debug!(
                        "hypothesis {} in cell {} solves the grid", value,
                        cell);
                    return Some(trial);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::SudokuGrid;

    // A puzzle on which elimination stalls, but which a single hypothesis
    // cracks.
    fn stalling_puzzle() -> CandidateGrid {
        let grid = SudokuGrid::parse("\
            4, ,5, ,6,1,7,8, ,\
             , ,8,4, , , , ,9,\
             , ,9, , ,3, ,4, ,\
            8, , , , ,5, , ,4,\
             ,5,7, ,8,4,3,9, ,\
            9, , , ,3, , , ,6,\
             ,8, ,7, , ,4, , ,\
            5, , , , ,6,9, , ,\
             ,9,3,5,4, ,1, ,7").unwrap();
        let mut cands = CandidateGrid::from_grid(&grid);
        elimination::to_fixpoint(&mut cands);
        cands
    }

    #[test]
    fn search_solves_stalling_puzzle() {
        let cands = stalling_puzzle();
        assert!(!cands.is_solved());

        let solved = search(&cands).expect("single hypothesis must suffice");

        assert!(solved.is_solved());
    }

    #[test]
    fn search_leaves_input_untouched() {
        let cands = stalling_puzzle();
        let before = cands.clone();

        assert!(search(&cands).is_some());
        assert_eq!(before, cands);
    }

    #[test]
    fn search_is_deterministic() {
        let cands = stalling_puzzle();

        let first = search(&cands);
        let second = search(&cands);

        assert_eq!(first, second);
    }

    #[test]
    fn search_rejects_puzzle_requiring_nested_hypotheses() {
        let grid = SudokuGrid::parse("\
             , ,5,3, , , , , ,\
            8, , , , , , ,2, ,\
             ,7, , ,1, ,5, , ,\
            4, , , , ,5,3, , ,\
             ,1, , ,7, , , ,6,\
             , ,3,2, , , ,8, ,\
             ,6, ,5, , , , ,9,\
             , ,4, , , , ,3, ,\
             , , , , ,9,7, , ").unwrap();
        let mut cands = CandidateGrid::from_grid(&grid);
        elimination::to_fixpoint(&mut cands);

        assert_eq!(None, search(&cands));
    }

    #[test]
    fn search_finds_nothing_on_empty_grid() {
        let cands = CandidateGrid::from_grid(&SudokuGrid::new());
        assert_eq!(None, search(&cands));
    }
}
