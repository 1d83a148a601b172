//! This module contains search-free verification of grids against the row,
//! column, and box uniqueness rules. It is usable independently of the
//! solver, e.g. to validate a solution produced elsewhere.

use crate::{Grid, index};
use crate::util::ValueSet;

fn rows_free_of_duplicates(grid: &Grid) -> bool {
    let size = grid.size();
    let mut seen = ValueSet::new(size);

    for row in 0..size {
        seen.clear();

        for column in 0..size {
            if let Some(number) = grid.cells()[index(row, column, size)] {
                if !seen.insert(number) {
                    return false;
                }
            }
        }
    }

    true
}

fn columns_free_of_duplicates(grid: &Grid) -> bool {
    let size = grid.size();
    let mut seen = ValueSet::new(size);

    for column in 0..size {
        seen.clear();

        for row in 0..size {
            if let Some(number) = grid.cells()[index(row, column, size)] {
                if !seen.insert(number) {
                    return false;
                }
            }
        }
    }

    true
}

fn boxes_free_of_duplicates(grid: &Grid) -> bool {
    let size = grid.size();
    let box_size = grid.box_size();
    let mut seen = ValueSet::new(size);

    for box_row in (0..size).step_by(box_size) {
        for box_column in (0..size).step_by(box_size) {
            seen.clear();

            for row in box_row..(box_row + box_size) {
                for column in box_column..(box_column + box_size) {
                    if let Some(number) =
                            grid.cells()[index(row, column, size)] {
                        if !seen.insert(number) {
                            return false;
                        }
                    }
                }
            }
        }
    }

    true
}

/// Indicates whether the filled cells of the given grid are conflict-free,
/// that is, no number occurs twice in any row, column, or box. Empty cells
/// are ignored, so a partially filled puzzle can be checked before solving.
pub fn has_no_duplicates(grid: &Grid) -> bool {
    rows_free_of_duplicates(grid)
        && columns_free_of_duplicates(grid)
        && boxes_free_of_duplicates(grid)
}

/// Indicates whether the given grid is a valid complete solution, that is,
/// it is full and every row, column, and box contains each number in
/// `[1, size]` exactly once. No search is performed.
pub fn is_valid_solution(grid: &Grid) -> bool {
    grid.is_full() && has_no_duplicates(grid)
}
