//! This module contains the logic for solving grids.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation. Besides the solved grid, solving yields the ordered
//! [Move] trace of cell assignments that survived to the solution.

use crate::Grid;
use crate::error::{GridError, GridResult};
use crate::verify;

use serde::{Deserialize, Serialize};

/// One committed cell assignment made during search. Coordinates and value
/// are 1-indexed, i.e. `row` and `col` are in `[1, size]`, matching the
/// external record format. A move only remains in the final trace if the
/// search never backtracked over it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Move {

    /// The 1-indexed row of the assigned cell.
    pub row: usize,

    /// The 1-indexed column of the assigned cell.
    pub col: usize,

    /// The number assigned to the cell, in `[1, size]`.
    pub value: usize
}

impl Move {

    /// Applies this move to the given grid, i.e. sets the cell at the
    /// move's (1-indexed) coordinates to its value.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` If the coordinates do not lie within the
    /// grid (note that 0 is out of bounds, as coordinates are 1-indexed).
    /// * `GridError::InvalidNumber` If the value is not in `[1, size]`.
    pub fn apply(&self, grid: &mut Grid) -> GridResult<()> {
        if self.row == 0 || self.col == 0 {
            return Err(GridError::OutOfBounds);
        }

        grid.set_cell(self.row - 1, self.col - 1, self.value)
    }
}

/// The ordered list of [Move]s that led to a solution.
pub type MoveTrace = Vec<Move>;

/// The outcome of a [Solver::solve] call. Note that an unsolvable puzzle is
/// a normal negative result, not an error: callers must expect it.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Solution {

    /// Indicates that a solution was found. The grid passed to the solver
    /// now holds it; the wrapped trace lists the assignments that produced
    /// it, in the order they were first committed. A grid that was already
    /// full yields an empty trace.
    Solved(MoveTrace),

    /// Indicates that the puzzle has no solution. The grid passed to the
    /// solver is left in its input state.
    Unsolvable
}

/// A trait for structs which have the ability to solve grids in place. A
/// solver owns no search state across invocations, so one solver instance
/// may be used for independent grids, including from multiple threads.
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid. On success, the
    /// grid is mutated in place to the solution and the returned
    /// [Solution::Solved] carries the move trace. Otherwise
    /// [Solution::Unsolvable] is returned and the grid is restored to its
    /// input state.
    fn solve(&self, grid: &mut Grid) -> Solution;
}

/// A [Solver](trait.Solver.html) which solves grids by recursively testing
/// all valid numbers for each empty cell. This means two things:
///
/// * Its worst-case runtime is exponential in the number of empty cells,
/// i.e. it may be very slow if the grid has many missing digits. No timeout
/// is imposed here; callers that need bounded time must enforce it.
/// * Its result is fully deterministic: cells are filled in row-major order
/// (see [Grid::first_empty]) with candidates tried in ascending order, and
/// the first solution reached under that order wins. Repeated calls on
/// equal inputs return the identical grid and trace.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut Grid, trace: &mut MoveTrace) -> bool {
        let (row, col) = match grid.first_empty() {
            Some(coords) => coords,
            None => return true
        };

        for number in 1..=grid.size() {
            if grid.is_placement_valid(row, col, number).unwrap() {
                grid.set_cell(row, col, number).unwrap();
                trace.push(Move {
                    row: row + 1,
                    col: col + 1,
                    value: number
                });

                if BacktrackingSolver::solve_rec(grid, trace) {
                    return true;
                }

                trace.pop();
                grid.clear_cell(row, col).unwrap();
            }
        }

        false
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &mut Grid) -> Solution {
        // A conflict among the given clues can never be repaired by search,
        // since filled cells are not revisited. Rejecting it here also
        // covers grids that are already full but violate the rules.
        if !verify::has_no_duplicates(grid) {
            return Solution::Unsolvable;
        }

        let mut trace = MoveTrace::new();

        if BacktrackingSolver::solve_rec(grid, &mut trace) {
            Solution::Solved(trace)
        }
        else {
            Solution::Unsolvable
        }
    }
}
