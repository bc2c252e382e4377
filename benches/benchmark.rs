use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_deduction::SudokuGrid;
use sudoku_deduction::solver::{EliminationSolver, HypothesisSolver, Solver};

// Explanation of benchmark classes:
//
// elimination: A puzzle that candidate elimination solves on its own.
// single hypothesis: A puzzle on which elimination stalls, so the
//                    HypothesisSolver has to try speculative assignments
//                    until one of them works out.
// exhausted search: A puzzle beyond the engine, i.e. the worst case in
//                   which every single trial is run and discarded.

const ELIMINATION_PUZZLE: &'static str = "\
     ,6, ,5, , ,2, , ,\
     ,9,8, , ,2, , ,6,\
     , ,7, , , ,4, ,3,\
     , ,1, , ,7, ,2, ,\
    8, , ,1, ,9, , ,5,\
     ,7, ,3, , ,9, , ,\
    4, ,6, , , ,8, , ,\
    5, , ,7, , ,6,1, ,\
     , ,2, , ,6, ,9, ";

const HYPOTHESIS_PUZZLE: &'static str = "\
    4, ,5, ,6,1,7,8, ,\
     , ,8,4, , , , ,9,\
     , ,9, , ,3, ,4, ,\
    8, , , , ,5, , ,4,\
     ,5,7, ,8,4,3,9, ,\
    9, , , ,3, , , ,6,\
     ,8, ,7, , ,4, , ,\
    5, , , , ,6,9, , ,\
     ,9,3,5,4, ,1, ,7";

const UNSUPPORTED_PUZZLE: &'static str = "\
     , ,5,3, , , , , ,\
    8, , , , , , ,2, ,\
     ,7, , ,1, ,5, , ,\
    4, , , , ,5,3, , ,\
     ,1, , ,7, , , ,6,\
     , ,3,2, , , ,8, ,\
     ,6, ,5, , , , ,9,\
     , ,4, , , , ,3, ,\
     , , , , ,9,7, , ";

fn elimination_benchmark(c: &mut Criterion) {
    let puzzle = SudokuGrid::parse(ELIMINATION_PUZZLE).unwrap();

    c.bench_function("elimination",
        |b| b.iter(|| EliminationSolver.solve(&puzzle)));
}

fn hypothesis_benchmark(c: &mut Criterion) {
    let puzzle = SudokuGrid::parse(HYPOTHESIS_PUZZLE).unwrap();

    c.bench_function("single hypothesis",
        |b| b.iter(|| HypothesisSolver.solve(&puzzle)));
}

fn exhausted_search_benchmark(c: &mut Criterion) {
    let puzzle = SudokuGrid::parse(UNSUPPORTED_PUZZLE).unwrap();

    c.bench_function("exhausted search",
        |b| b.iter(|| HypothesisSolver.solve(&puzzle)));
}

criterion_group!(benches, elimination_benchmark, hypothesis_benchmark,
    exhausted_search_benchmark);
criterion_main!(benches);
