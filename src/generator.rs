//! This module contains logic for generating random grids.
//!
//! Generation is done by first producing a full valid grid from a shuffled
//! base pattern with a [Generator] and then optionally masking some cells to
//! obtain a puzzle. Seeding the generator makes both steps reproducible.

use crate::Grid;
use crate::error::{GridError, GridResult};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::index;

/// A generator randomly generates a full [Grid], that is, a grid with no
/// missing digits, and can mask cells of a full grid to produce a puzzle. It
/// uses a random number generator to decide the content. For most cases,
/// sensible defaults are provided by [Generator::new_default] and
/// [Generator::with_seed].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl Generator<StdRng> {

    /// Creates a new generator whose random number generator is seeded with
    /// the given value, making the generated grids reproducible: two
    /// generators with the same seed produce the same sequence of grids.
    pub fn with_seed(seed: u64) -> Generator<StdRng> {
        Generator::new(StdRng::seed_from_u64(seed))
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// The base pattern is a trivially valid grid layout: row `r`, column `c`
/// holds symbol index `(b * (r % b) + r / b + c) % size`, which places each
/// symbol exactly once per row, column, and box.
fn pattern(row: usize, column: usize, box_size: usize) -> usize {
    let size = box_size * box_size;
    (box_size * (row % box_size) + row / box_size + column) % size
}

/// Computes a random row (or column) order that keeps each band of
/// `box_size` consecutive lines together: the bands are shuffled among each
/// other, and the lines within each band are shuffled independently. Both
/// operations preserve validity of a pattern-based grid.
fn band_order(rng: &mut impl Rng, box_size: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(box_size * box_size);

    for band in shuffle(rng, 0..box_size) {
        for line in shuffle(rng, 0..box_size) {
            order.push(band * box_size + line);
        }
    }

    order
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Generates a new random full [Grid] with boxes of the given side
    /// length, i.e. a grid of size `box_size²`. The result is guaranteed to
    /// be a valid solution, i.e. [is_valid_solution](crate::verify::is_valid_solution)
    /// returns `true` for it.
    ///
    /// The grid is derived from a fixed base pattern by shuffling rows and
    /// columns within and across bands and assigning the symbols in random
    /// order, so no search is necessary.
    ///
    /// # Arguments
    ///
    /// * `box_size`: The side length of one box of the generated grid. For
    /// an ordinary Sudoku grid, this is 3. Must be greater than 0.
    ///
    /// # Errors
    ///
    /// * `GridError::InvalidSize` If `box_size` is zero.
    pub fn generate(&mut self, box_size: usize) -> GridResult<Grid> {
        if box_size == 0 {
            return Err(GridError::InvalidSize);
        }

        let size = box_size * box_size;
        let rows = band_order(&mut self.rng, box_size);
        let columns = band_order(&mut self.rng, box_size);
        let numbers = shuffle(&mut self.rng, 1..=size);
        let mut grid = Grid::new(size)?;

        for (row, &pattern_row) in rows.iter().enumerate() {
            for (column, &pattern_column) in columns.iter().enumerate() {
                let number = numbers[pattern(pattern_row, pattern_column,
                    box_size)];
                grid.set_cell(row, column, number)?;
            }
        }

        Ok(grid)
    }

    /// Clears `empties` randomly chosen cells of the given grid. Applied to
    /// a full valid grid, this produces a solvable puzzle, since the
    /// original grid remains a solution. Note that the puzzle is *not*
    /// guaranteed to have a unique solution.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid in which to clear cells.
    /// * `empties`: The number of cells to clear. Must be at most the total
    /// number of cells of the grid.
    ///
    /// # Errors
    ///
    /// * `GridError::WrongCellCount` If `empties` is greater than the total
    /// number of cells of the grid.
    pub fn mask(&mut self, grid: &mut Grid, empties: usize) -> GridResult<()> {
        let size = grid.size();
        let total = size * size;

        if empties > total {
            return Err(GridError::WrongCellCount);
        }

        for cell in index::sample(&mut self.rng, total, empties) {
            grid.clear_cell(cell / size, cell % size)?;
        }

        Ok(())
    }

    /// Generates a new random puzzle with boxes of the given side length:
    /// a full grid as by [Generator::generate] with `empties` cells cleared
    /// as by [Generator::mask]. The result is solvable, but not necessarily
    /// uniquely.
    ///
    /// # Arguments
    ///
    /// * `box_size`: The side length of one box of the generated grid. Must
    /// be greater than 0.
    /// * `empties`: The number of cells to clear. Must be at most
    /// `box_size⁴`, the total number of cells.
    ///
    /// # Errors
    ///
    /// * `GridError::InvalidSize` If `box_size` is zero.
    /// * `GridError::WrongCellCount` If `empties` is greater than the total
    /// number of cells.
    pub fn generate_puzzle(&mut self, box_size: usize, empties: usize)
            -> GridResult<Grid> {
        let mut grid = self.generate(box_size)?;
        self.mask(&mut grid, empties)?;
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::verify;

    use rand_chacha::ChaCha8Rng;

    #[test]
    fn pattern_is_valid_layout() {
        let mut grid = Grid::new(9).unwrap();

        for row in 0..9 {
            for column in 0..9 {
                grid.set_cell(row, column, pattern(row, column, 3) + 1)
                    .unwrap();
            }
        }

        assert!(verify::is_valid_solution(&grid));
    }

    #[test]
    fn generated_grids_are_valid() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(17));

        for _ in 0..10 {
            let grid = generator.generate(2).unwrap();
            assert!(verify::is_valid_solution(&grid));

            let grid = generator.generate(3).unwrap();
            assert!(verify::is_valid_solution(&grid));
        }
    }

    #[test]
    fn generation_is_reproducible() {
        let first = Generator::with_seed(42).generate(3).unwrap();
        let second = Generator::with_seed(42).generate(3).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn generate_rejects_zero_box_size() {
        let mut generator = Generator::with_seed(0);
        assert_eq!(Err(GridError::InvalidSize), generator.generate(0));
    }

    #[test]
    fn mask_clears_requested_count() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(3));
        let full = generator.generate(3).unwrap();
        let mut masked = full.clone();
        generator.mask(&mut masked, 60).unwrap();

        assert_eq!(21, masked.count_clues());

        // Remaining clues must agree with the full grid.
        for row in 0..9 {
            for column in 0..9 {
                if let Some(number) = masked.get_cell(row, column).unwrap() {
                    assert_eq!(Some(number),
                        full.get_cell(row, column).unwrap());
                }
            }
        }
    }

    #[test]
    fn mask_rejects_excessive_count() {
        let mut generator = Generator::with_seed(0);
        let mut grid = generator.generate(2).unwrap();

        assert_eq!(Err(GridError::WrongCellCount),
            generator.mask(&mut grid, 17));
    }

    #[test]
    fn mask_everything_empties_the_grid() {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(5));
        let mut grid = generator.generate(2).unwrap();
        generator.mask(&mut grid, 16).unwrap();

        assert!(grid.is_empty());
    }
}
