//! This module contains the candidate elimination engine, the workhorse of
//! the solving process.
//!
//! Elimination applies a single rule: a digit that occupies a cell cannot
//! appear in any other cell of the same row, column, or block. On the
//! candidate representation this means that the digit of every determined
//! cell is removed from the candidates of every other cell in each of its
//! three groups. Removals can reduce further cells to a single candidate,
//! which then eliminate in turn, so passes are repeated until a full pass
//! changes nothing anymore.
//!
//! The engine never *assigns* anything - cells become determined only as a
//! side effect of their candidate set shrinking to one digit. It also does
//! not detect contradictions: if an inconsistent grid drives some candidate
//! set empty, that cell simply never acts as determined again and is
//! reported as undetermined in the result. Whether that happened because
//! the puzzle was unsolvable or because it was too hard is not
//! distinguished.

use crate::solver::candidates::{CandidateGrid, groups};

/// Applies candidate elimination to the given grid until a fixpoint is
/// reached, i.e. until one entire pass over all 27 groups no longer changes
/// any candidate set. Returns the number of passes that were run, including
/// the final pass that changed nothing.
///
/// Candidate sets only ever shrink, so the fixpoint is reached after a
/// bounded number of passes regardless of the order in which groups are
/// visited.
pub fn to_fixpoint(cands: &mut CandidateGrid) -> usize {
    let mut passes = 0;

    loop {
        let before = cands.clone();
        eliminate_pass(cands);
        passes += 1;

        if *cands == before {
            log::trace!("elimination reached a fixpoint after {} passes",
                passes);
            return passes;
        }
    }
}

/// Runs one elimination pass: for every group and every cell in it that is
/// currently determined, the cell's digit is removed from the candidates of
/// the other eight cells of that group. Cells that become determined during
/// the pass already eliminate within later groups of the same pass.
fn eliminate_pass(cands: &mut CandidateGrid) {
    let groups = groups();

    for group in groups.iter() {
        for (i, &cell) in group.iter().enumerate() {
            if let Some(value) = cands.cell(cell).value() {
                for (j, &other) in group.iter().enumerate() {
                    if i != j {
                        cands.cell_mut(other).remove(value).unwrap();
                    }
                }
            }
        }
    }
}
