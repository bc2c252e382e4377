// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements a small, easy-to-understand solving engine for
//! ordinary 9×9 Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Solving by candidate elimination, i.e. repeatedly striking the digit of
//! every determined cell from the candidates of the other cells in its row,
//! column, and block until nothing changes anymore
//! * Extending elimination by a single speculative assignment (a
//! *hypothesis*) when elimination alone stalls
//! * Reporting which of the two techniques succeeded alongside the solved
//! grid
//!
//! # Parsing and printing Sudoku
//!
//! See [SudokuGrid::parse] for the exact format of a Sudoku code.
//!
//! Codes can be used to exchange Sudoku, while pretty prints can be used to
//! display a Sudoku in a clearer manner. An example of how to parse and
//! display a Sudoku grid is provided below.
//!
//! ```
//! use sudoku_deduction::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!      ,6, ,5, , ,2, , ,\
//!      ,9,8, , ,2, , ,6,\
//!      , ,7, , , ,4, ,3,\
//!      , ,1, , ,7, ,2, ,\
//!     8, , ,1, ,9, , ,5,\
//!      ,7, ,3, , ,9, , ,\
//!     4, ,6, , , ,8, , ,\
//!     5, , ,7, , ,6,1, ,\
//!      , ,2, , ,6, ,9, ").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving Sudoku
//!
//! Solving is done by the [Solver](solver::Solver) implementations in the
//! [solver] module. [EliminationSolver](solver::EliminationSolver) only
//! applies candidate elimination, while
//! [HypothesisSolver](solver::HypothesisSolver) additionally tries one
//! speculative assignment when elimination stalls. Both return a
//! [Solution](solver::Solution), which carries the resulting grid together
//! with the technique that produced it.
//!
//! ```
//! use sudoku_deduction::SudokuGrid;
//! use sudoku_deduction::solver::{HypothesisSolver, Solution, Solver};
//!
//! let puzzle = SudokuGrid::parse("\
//!      ,6, ,5, , ,2, , ,\
//!      ,9,8, , ,2, , ,6,\
//!      , ,7, , , ,4, ,3,\
//!      , ,1, , ,7, ,2, ,\
//!     8, , ,1, ,9, , ,5,\
//!      ,7, ,3, , ,9, , ,\
//!     4, ,6, , , ,8, , ,\
//!     5, , ,7, , ,6,1, ,\
//!      , ,2, , ,6, ,9, ").unwrap();
//!
//! match HypothesisSolver.solve(&puzzle) {
//!     Solution::ByElimination(grid) => assert!(grid.is_full()),
//!     _ => panic!("this puzzle is solvable by elimination alone")
//! }
//! ```
//!
//! # Difficulty levels
//!
//! The engine distinguishes puzzles by the technique they require:
//!
//! * *Level 0*: at every step of the solution there is at least one cell
//! whose candidates can be reduced to a single digit by elimination alone.
//! Such puzzles are solved by the [EliminationSolver](solver::EliminationSolver).
//! * *Level 1*: at some step no cell is determined by elimination, but there
//! is one cell and one candidate such that assuming that candidate makes the
//! rest of the puzzle a level-0 puzzle. Such puzzles require the
//! [HypothesisSolver](solver::HypothesisSolver).
//! * *Level 2 and beyond*: two or more nested assumptions would be required.
//! These puzzles are not supported and are reported as unsolved, with all
//! cells that could not be determined left empty.
//!
//! # A note on invalid puzzles
//!
//! Input grids are only validated structurally (81 cells, digits 1 to 9).
//! A puzzle whose given digits contradict each other is not detected as such;
//! it merely fails to solve, exactly like a puzzle that is too hard for the
//! supported techniques. See the [solver] module for details.

pub mod error;
pub mod solver;
pub mod util;


use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a Sudoku grid, which is also the number
/// of cells in each row, column, and block.
pub const SIZE: usize = 9;

/// The number of rows and columns of one block of a Sudoku grid.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in a Sudoku grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A 9×9 Sudoku grid composed of 81 cells that are organized into 9 blocks
/// of 3×3 cells. Each cell may or may not be occupied by a digit from 1 to 9.
/// A grid in which every cell is occupied represents a solution, a grid with
/// empty cells represents a puzzle (or the partial result of a failed solve,
/// see [Solution](solver::Solution)).
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// `SudokuGrid` implements `Display` and renders as the diagram above, with
/// digits in the occupied cells.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid in which all 81 cells are
    /// unoccupied.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Creates a Sudoku grid from the given sequence of cells, where `None`
    /// represents an empty cell and `Some(digit)` a cell occupied by that
    /// digit. The cells are assigned left-to-right, top-to-bottom, where each
    /// row is completed before the next one is started, i.e. the cell at
    /// column `c` and row `r` is entry `9 * r + c` of the sequence.
    ///
    /// Note that it is *not* checked whether the given digits are mutually
    /// consistent - it is perfectly legal to create an unsolvable Sudoku
    /// here.
    ///
    /// # Arguments
    ///
    /// * `cells`: The contents of the 81 cells of the created grid. Must
    /// contain exactly 81 entries, each of which must be `None` or a digit
    /// in the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::WrongNumberOfCells` If `cells` does not contain
    /// exactly 81 entries.
    /// * `SudokuError::InvalidNumber` If any given digit is not in the range
    /// `[1, 9]`.
    pub fn from_cells(cells: Vec<Option<usize>>) -> SudokuResult<SudokuGrid> {
        if cells.len() != CELL_COUNT {
            return Err(SudokuError::WrongNumberOfCells);
        }

        for cell in cells.iter() {
            if let Some(number) = cell {
                if *number == 0 || *number > SIZE {
                    return Err(SudokuError::InvalidNumber);
                }
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of exactly 81 entries, which are either empty or a digit from 1
    /// to 9. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code
    /// `1, ,2, ,...` (with 81 entries in total) will parse to a grid with a
    /// 1 in the top-left cell and a 2 in the third cell of the top row.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut cells = vec![None; CELL_COUNT];

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            cells[i] = Some(number);
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_deduction::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }

    /// Gets the values of all 81 cells in left-to-right, top-to-bottom
    /// order, where rows are together. Occupied cells are represented by
    /// their digit and empty cells by the sentinel value `0`.
    ///
    /// ```
    /// use sudoku_deduction::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    /// grid.set_cell(2, 0, 7).unwrap();
    ///
    /// let values = grid.values();
    /// assert_eq!(0, values[0]);
    /// assert_eq!(7, values[2]);
    /// ```
    pub fn values(&self) -> Vec<usize> {
        self.cells.iter()
            .map(|cell| cell.unwrap_or(0))
            .collect()
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is occupied by a
    /// digit. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is occupied by a
    /// digit. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}
