// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand Sudoku engine built around a
//! trace-recording backtracking solver. It supports the following key
//! features:
//!
//! * Parsing and printing grids of any perfect-square size
//! * Solving grids using a backtracking algorithm that records the ordered
//! sequence of cell assignments which led to the solution
//! * Verifying completed grids against the row, column, and box uniqueness
//! rules without performing any search
//! * Generating full grids and puzzles from a seed, for reproducible output
//!
//! Note in this introduction we will mostly be using 4x4 grids due to their
//! simpler nature. These are divided in 4 2x2 boxes, each with the digits 1
//! to 4, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_trace::Grid;
//!
//! let grid = Grid::parse("4_2030010010040203").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving grids
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! solve grids. The provided implementation is
//! [BacktrackingSolver](solver::BacktrackingSolver), which finds the first
//! solution under a fixed search order: it always fills the first empty cell
//! in row-major order, trying candidates in ascending order. Besides the
//! solved grid, it yields the trace of [Move](solver::Move)s that survived to
//! the solution.
//!
//! ```
//! use sudoku_trace::Grid;
//! use sudoku_trace::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let mut grid = Grid::parse("4_0000000000000000").unwrap();
//!
//! match BacktrackingSolver.solve(&mut grid) {
//!     Solution::Solved(trace) => {
//!         // An empty 4x4 grid requires one move per cell.
//!         assert_eq!(16, trace.len());
//!         assert_eq!("1234341221434321", grid.serialize());
//!     },
//!     Solution::Unsolvable => panic!("empty grid must be solvable")
//! }
//! ```
//!
//! The solver mutates the grid in place. If the puzzle is unsolvable, it
//! returns [Solution::Unsolvable](solver::Solution::Unsolvable) and leaves
//! the grid in its input state. Unsolvability is a normal negative outcome,
//! not an error.
//!
//! # Verifying completed grids
//!
//! A completed grid can be checked against the rules without solving
//! anything, which is useful to validate solutions produced elsewhere.
//!
//! ```
//! use sudoku_trace::Grid;
//! use sudoku_trace::verify;
//!
//! let grid = Grid::parse("4_1234341221434321").unwrap();
//! assert!(verify::is_valid_solution(&grid));
//!
//! // Swapping two digits in a row breaks the column rule.
//! let grid = Grid::parse("4_2134341221434321").unwrap();
//! assert!(!verify::is_valid_solution(&grid));
//! ```
//!
//! # Generating grids
//!
//! A [Generator](generator::Generator) produces full valid grids by
//! shuffling a base pattern, and puzzles by masking cells of a full grid.
//! Seeding the generator makes its output reproducible.
//!
//! ```
//! use sudoku_trace::generator::Generator;
//! use sudoku_trace::verify;
//!
//! let mut generator = Generator::with_seed(42);
//! let grid = generator.generate(3).unwrap();
//! assert!(verify::is_valid_solution(&grid));
//!
//! // The same seed yields the same grid.
//! let again = Generator::with_seed(42).generate(3).unwrap();
//! assert_eq!(grid, again);
//! ```

pub mod error;
pub mod generator;
pub mod solver;
pub mod util;
pub mod verify;


use error::{GridError, GridResult, ParseError, ParseResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Error, Formatter};

/// A grid is composed of cells that are organized into square boxes in a way
/// that makes the entire grid a square. The grid size must therefore be a
/// perfect square, whose root is the box side length. Each cell may or may
/// not be occupied by a number.
///
/// In ordinary Sudoku, the size is 9 and the boxes are 3x3. A 4x4 grid with
/// 2x2 boxes looks like this:
///
/// ```text
/// ╔═══╤═══╦═══╤═══╗
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╠═══╪═══╬═══╪═══╣
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╚═══╧═══╩═══╧═══╝
/// ```
///
/// `Grid` implements `Display`, but only grids with a size of less than or
/// equal to 9 can be displayed with digits 1 to 9. Grids of all other sizes
/// will raise an error.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Grid {
    size: usize,
    box_size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(grid: &Grid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool) -> String {
    let size = grid.size();
    let mut result = String::new();

    for col in 0..size {
        if col == 0 {
            result.push(start);
        }
        else if col % grid.box_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(col));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &Grid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &Grid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &Grid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &Grid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, row: usize) -> String {
    line(grid, '║', '║', '│', |col| to_char(grid.get_cell(row, col).unwrap()),
        ' ', '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for row in 0..size {
            if row == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if row % self.box_size == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

pub(crate) fn index(row: usize, column: usize, size: usize) -> usize {
    row * size + column
}

fn box_size_of(size: usize) -> Option<usize> {
    if size == 0 {
        return None;
    }

    let mut root = (size as f64).sqrt() as usize;

    while root * root < size {
        root += 1;
    }

    if root * root == size {
        Some(root)
    }
    else {
        None
    }
}

impl Grid {

    /// Creates a new, empty grid of the given size. The size is the number
    /// of cells in one row or column and must be a perfect square; its root
    /// is the side length of one box.
    ///
    /// # Arguments
    ///
    /// * `size`: The total width and height of the grid. For an ordinary
    /// Sudoku grid, this is 9. Must be a positive perfect square.
    ///
    /// # Errors
    ///
    /// If `size` is invalid (zero or not a perfect square). In that case,
    /// `GridError::InvalidSize` is returned.
    pub fn new(size: usize) -> GridResult<Grid> {
        let box_size = box_size_of(size).ok_or(GridError::InvalidSize)?;
        let cells = vec![None; size * size];

        Ok(Grid {
            size,
            box_size,
            cells
        })
    }

    /// Creates a grid of the given size from a flat sequence of digits in
    /// left-to-right, top-to-bottom order, where each row is completed
    /// before the next one is started. A digit of 0 denotes an empty cell.
    ///
    /// # Arguments
    ///
    /// * `digits`: The row-major cell contents. Must contain exactly `size²`
    /// entries, each in the range `[0, size]`.
    /// * `size`: The total width and height of the grid. Must be a positive
    /// perfect square.
    ///
    /// # Errors
    ///
    /// * `GridError::InvalidSize` If `size` is zero or not a perfect square.
    /// * `GridError::WrongCellCount` If `digits` does not contain exactly
    /// `size²` entries.
    /// * `GridError::InvalidNumber` If any digit is greater than `size`.
    pub fn from_digits(digits: &[usize], size: usize) -> GridResult<Grid> {
        let mut grid = Grid::new(size)?;

        if digits.len() != size * size {
            return Err(GridError::WrongCellCount);
        }

        for (i, &digit) in digits.iter().enumerate() {
            if digit > size {
                return Err(GridError::InvalidNumber);
            }

            if digit > 0 {
                grid.cells[i] = Some(digit);
            }
        }

        Ok(grid)
    }

    /// Parses a code encoding a grid. The code has to be of the format
    /// `<size>_<digits>` where `<digits>` is a string of exactly `size²`
    /// decimal digits, one per cell, assigned left-to-right, top-to-bottom,
    /// where each row is completed before the next one is started. A digit
    /// of 0 denotes an empty cell.
    ///
    /// Since every cell is one character, this format is only defined for
    /// sizes up to 9, which given the perfect-square requirement means 1, 4,
    /// and 9.
    ///
    /// As an example, the code `4_2030010010040203` will parse to the
    /// following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 2 │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │   ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║ 1 │   ║   │ 4 ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 2 ║   │ 3 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `ParseError` (see that documentation).
    pub fn parse(code: &str) -> ParseResult<Grid> {
        let parts: Vec<&str> = code.split('_').collect();

        if parts.len() != 2 {
            return Err(ParseError::WrongNumberOfParts);
        }

        let size: usize = parts[0].trim().parse()?;

        let mut grid = match Grid::new(size) {
            Ok(grid) => grid,
            Err(_) => return Err(ParseError::InvalidSize)
        };

        let digits = parts[1].trim();

        if digits.chars().count() != size * size {
            return Err(ParseError::WrongNumberOfCells);
        }

        for (i, c) in digits.chars().enumerate() {
            let digit = c.to_digit(10).ok_or(ParseError::InvalidDigit)? as usize;

            if digit > size {
                return Err(ParseError::InvalidDigit);
            }

            if digit > 0 {
                grid.cells[i] = Some(digit);
            }
        }

        Ok(grid)
    }

    /// Serializes the cells of this grid into a flat digit string in
    /// left-to-right, top-to-bottom order, with a 0 for every empty cell and
    /// no separators. Only defined for grids of size up to 9, where every
    /// cell value is a single decimal digit.
    ///
    /// ```
    /// use sudoku_trace::Grid;
    ///
    /// let grid = Grid::parse("4_2030010010040203").unwrap();
    /// assert_eq!("2030010010040203", grid.serialize());
    /// ```
    pub fn serialize(&self) -> String {
        self.cells.iter()
            .map(|&cell| match cell {
                Some(n) => (b'0' + n as u8) as char,
                None => '0'
            })
            .collect()
    }

    /// Converts the grid into a code in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a code and parsed
    /// again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_trace::Grid;
    ///
    /// let mut grid = Grid::new(4).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(2, 1, 3).unwrap();
    ///
    /// let code = grid.to_code();
    /// assert_eq!("4_0000040003000000", code);
    /// assert_eq!(grid, Grid::parse(code.as_str()).unwrap());
    /// ```
    pub fn to_code(&self) -> String {
        format!("{}_{}", self.size, self.serialize())
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the side length of one box of the grid, i.e. the square root of
    /// [Grid::size]. This is also the number of boxes along one axis.
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn get_cell(&self, row: usize, column: usize)
            -> GridResult<Option<usize>> {
        let size = self.size();

        if row >= size || column >= size {
            Err(GridError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(row, column, size)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` If either `row` or `column` are not in the
    /// specified range.
    /// * `GridError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, row: usize, column: usize, number: usize)
            -> GridResult<()> {
        let size = self.size();

        if row >= size || column >= size {
            return Err(GridError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(GridError::InvalidNumber);
        }

        self.cells[index(row, column, size)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` are not in the specified range. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, row: usize, column: usize) -> GridResult<()> {
        let size = self.size();

        if row >= size || column >= size {
            return Err(GridError::OutOfBounds);
        }

        self.cells[index(row, column, size)] = None;
        Ok(())
    }

    /// Indicates whether the given number could be placed in the cell at the
    /// given position without violating the uniqueness rules, that is,
    /// whether no *other* cell in the same row, the same column, or the same
    /// box already holds `number`. The content of the queried cell itself is
    /// ignored.
    ///
    /// The box containing the cell is the `box_size × box_size` block with
    /// its origin at `(row - row % box_size, column - column % box_size)`.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `number`: The number to check. Must be in the range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` If either `row` or `column` are not in the
    /// specified range.
    /// * `GridError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn is_placement_valid(&self, row: usize, column: usize,
            number: usize) -> GridResult<bool> {
        let size = self.size();

        if row >= size || column >= size {
            return Err(GridError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(GridError::InvalidNumber);
        }

        for i in 0..size {
            if i != column && self.cells[index(row, i, size)] == Some(number) {
                return Ok(false);
            }

            if i != row && self.cells[index(i, column, size)] == Some(number) {
                return Ok(false);
            }
        }

        let box_size = self.box_size;
        let box_row = row - row % box_size;
        let box_column = column - column % box_size;

        for r in box_row..(box_row + box_size) {
            for c in box_column..(box_column + box_size) {
                if (r, c) != (row, column) &&
                        self.cells[index(r, c, size)] == Some(number) {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Finds the first empty cell in left-to-right, top-to-bottom order,
    /// i.e. row 0 column 0 is scanned first, and returns its coordinates as
    /// `(row, column)`. Returns `None` if the grid is full.
    ///
    /// This scan order determines which cell a backtracking solver fills
    /// next and therefore which solution is found first.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        let size = self.size();

        self.cells.iter()
            .position(|cell| cell.is_none())
            .map(|i| (i / size, i % size))
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average puzzles with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [Grid::count_clues] returns the square of
    /// [Grid::size].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn new_rejects_invalid_sizes() {
        assert_eq!(Err(GridError::InvalidSize), Grid::new(0));
        assert_eq!(Err(GridError::InvalidSize), Grid::new(2));
        assert_eq!(Err(GridError::InvalidSize), Grid::new(8));
    }

    #[test]
    fn new_accepts_perfect_squares() {
        for &(size, box_size) in &[(1, 1), (4, 2), (9, 3), (16, 4), (25, 5)] {
            let grid = Grid::new(size).unwrap();
            assert_eq!(size, grid.size());
            assert_eq!(box_size, grid.box_size());
            assert!(grid.is_empty());
        }
    }

    #[test]
    fn from_digits_ok() {
        let digits = [
            2, 0, 3, 0,
            0, 1, 0, 0,
            1, 0, 0, 4,
            0, 2, 0, 3
        ];
        let grid = Grid::from_digits(&digits, 4).unwrap();

        assert_eq!(Some(2), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(0, 1).unwrap());
        assert_eq!(Some(3), grid.get_cell(0, 2).unwrap());
        assert_eq!(Some(1), grid.get_cell(1, 1).unwrap());
        assert_eq!(Some(4), grid.get_cell(2, 3).unwrap());
        assert_eq!(Some(3), grid.get_cell(3, 3).unwrap());
        assert_eq!(11, grid.cells().iter().filter(|c| c.is_none()).count());
    }

    #[test]
    fn from_digits_wrong_cell_count() {
        assert_eq!(Err(GridError::WrongCellCount),
            Grid::from_digits(&[0; 15], 4));
        assert_eq!(Err(GridError::WrongCellCount),
            Grid::from_digits(&[0; 17], 4));
    }

    #[test]
    fn from_digits_invalid_number() {
        let mut digits = [0; 16];
        digits[5] = 5;
        assert_eq!(Err(GridError::InvalidNumber),
            Grid::from_digits(&digits, 4));
    }

    #[test]
    fn parse_ok() {
        let grid = Grid::parse("4_2030010010040203").unwrap();
        let expected = Grid::from_digits(&[
            2, 0, 3, 0,
            0, 1, 0, 0,
            1, 0, 0, 4,
            0, 2, 0, 3
        ], 4).unwrap();

        assert_eq!(expected, grid);
    }

    #[test]
    fn parse_wrong_number_of_parts() {
        assert_eq!(Err(ParseError::WrongNumberOfParts), Grid::parse("4"));
        assert_eq!(Err(ParseError::WrongNumberOfParts),
            Grid::parse("4_0000000000000000_extra"));
    }

    #[test]
    fn parse_number_format_error() {
        assert_eq!(Err(ParseError::NumberFormatError),
            Grid::parse("four_0000000000000000"));
    }

    #[test]
    fn parse_invalid_size() {
        assert_eq!(Err(ParseError::InvalidSize), Grid::parse("0_"));
        assert_eq!(Err(ParseError::InvalidSize), Grid::parse("3_000000000"));
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(ParseError::WrongNumberOfCells),
            Grid::parse("4_000000000000000"));
        assert_eq!(Err(ParseError::WrongNumberOfCells),
            Grid::parse("4_00000000000000000"));
    }

    #[test]
    fn parse_invalid_digit() {
        assert_eq!(Err(ParseError::InvalidDigit),
            Grid::parse("4_00000000x0000000"));

        // 5 is a digit, but too large for a 4x4 grid.
        assert_eq!(Err(ParseError::InvalidDigit),
            Grid::parse("4_0000000050000000"));
    }

    #[test]
    fn serialize_round_trip() {
        let code = "9_\
            003020600\
            900305001\
            001806400\
            008102900\
            700000008\
            006708200\
            002609500\
            800203009\
            005010300";
        let expected: String = code.chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let grid = Grid::parse(code).unwrap();

        assert_eq!(expected, grid.to_code());
        assert_eq!(grid, Grid::parse(grid.to_code().as_str()).unwrap());
    }

    #[test]
    fn cell_access_bounds() {
        let mut grid = Grid::new(4).unwrap();

        assert_eq!(Err(GridError::OutOfBounds), grid.get_cell(4, 0));
        assert_eq!(Err(GridError::OutOfBounds), grid.get_cell(0, 4));
        assert_eq!(Err(GridError::OutOfBounds), grid.set_cell(4, 0, 1));
        assert_eq!(Err(GridError::OutOfBounds), grid.clear_cell(0, 4));
        assert_eq!(Err(GridError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(GridError::InvalidNumber), grid.set_cell(0, 0, 5));
    }

    #[test]
    fn set_and_clear_cell() {
        let mut grid = Grid::new(4).unwrap();

        grid.set_cell(1, 2, 3).unwrap();
        assert_eq!(Some(3), grid.get_cell(1, 2).unwrap());
        assert_eq!(1, grid.count_clues());

        grid.set_cell(1, 2, 4).unwrap();
        assert_eq!(Some(4), grid.get_cell(1, 2).unwrap());

        grid.clear_cell(1, 2).unwrap();
        assert_eq!(None, grid.get_cell(1, 2).unwrap());
        assert!(grid.is_empty());
    }

    #[test]
    fn placement_valid_in_empty_grid() {
        let grid = Grid::new(9).unwrap();

        for number in 1..=9 {
            assert!(grid.is_placement_valid(4, 4, number).unwrap());
        }
    }

    #[test]
    fn placement_rejected_by_row() {
        let grid = Grid::parse("4_2000000000000000").unwrap();

        assert!(!grid.is_placement_valid(0, 3, 2).unwrap());
        assert!(grid.is_placement_valid(0, 3, 1).unwrap());
    }

    #[test]
    fn placement_rejected_by_column() {
        let grid = Grid::parse("4_2000000000000000").unwrap();

        assert!(!grid.is_placement_valid(3, 0, 2).unwrap());
        assert!(grid.is_placement_valid(3, 0, 4).unwrap());
    }

    #[test]
    fn placement_rejected_by_box() {
        let grid = Grid::parse("4_2000000000000000").unwrap();

        // (1, 1) shares the top-left 2x2 box with (0, 0), but neither the
        // row nor the column.
        assert!(!grid.is_placement_valid(1, 1, 2).unwrap());
        assert!(grid.is_placement_valid(2, 2, 2).unwrap());
    }

    #[test]
    fn placement_ignores_queried_cell() {
        let grid = Grid::parse("4_2000000000000000").unwrap();

        assert!(grid.is_placement_valid(0, 0, 2).unwrap());
    }

    #[test]
    fn placement_errors() {
        let grid = Grid::new(4).unwrap();

        assert_eq!(Err(GridError::OutOfBounds),
            grid.is_placement_valid(4, 0, 1));
        assert_eq!(Err(GridError::InvalidNumber),
            grid.is_placement_valid(0, 0, 5));
    }

    #[test]
    fn first_empty_row_major() {
        let grid = Grid::parse("4_1234000000000000").unwrap();
        assert_eq!(Some((1, 0)), grid.first_empty());

        let grid = Grid::parse("4_1230000000000000").unwrap();
        assert_eq!(Some((0, 3)), grid.first_empty());
    }

    #[test]
    fn first_empty_of_full_grid() {
        let grid = Grid::parse("4_1234341221434321").unwrap();
        assert_eq!(None, grid.first_empty());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = Grid::parse("4_0000000000000000").unwrap();
        let partial = Grid::parse("4_1030020000400001").unwrap();
        let full = Grid::parse("4_1234341221434321").unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(16, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn display_draws_boxes() {
        let grid = Grid::parse("4_2030010010040203").unwrap();
        let expected =
            "╔═══╤═══╦═══╤═══╗\n\
             ║ 2 │   ║ 3 │   ║\n\
             ╟───┼───╫───┼───╢\n\
             ║   │ 1 ║   │   ║\n\
             ╠═══╪═══╬═══╪═══╣\n\
             ║ 1 │   ║   │ 4 ║\n\
             ╟───┼───╫───┼───╢\n\
             ║   │ 2 ║   │ 3 ║\n\
             ╚═══╧═══╩═══╧═══╝";

        assert_eq!(expected, format!("{}", grid));
    }
}
