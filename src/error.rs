//! This module contains some error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing a grid code, see [ParseError](enum.ParseError.html) for that.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that the size specified for a created grid is invalid. This
    /// is the case if it is zero or not a perfect square, since the latter
    /// makes the sub-box constraint ill-defined.
    InvalidSize,

    /// Indicates that some number is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// Indicates that a cell count does not fit the grid in question, i.e.
    /// a flat digit sequence that does not contain exactly size² entries,
    /// or a request to mask more cells than the grid has.
    WrongCellCount
}

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// An enumeration of the errors that may occur when parsing a [Grid] code.
///
/// [Grid]: ../struct.Grid.html
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {

    /// Indicates that the code has the wrong number of parts, which are
    /// separated by underscores. The code should have two parts: size and
    /// cells (separated by '_'), so if the code does not contain exactly one
    /// underscore, this error will be returned.
    WrongNumberOfParts,

    /// Indicates that the size could not be parsed as a number.
    NumberFormatError,

    /// Indicates that the number of cell digits does not equal the square of
    /// the size.
    WrongNumberOfCells,

    /// Indicates that the provided size is invalid (i.e. zero or not a
    /// perfect square).
    InvalidSize,

    /// Indicates that a cell character is not a decimal digit, or encodes a
    /// number greater than the grid size.
    InvalidDigit
}

/// Syntactic sugar for `Result<V, ParseError>`.
pub type ParseResult<V> = Result<V, ParseError>;

impl From<ParseIntError> for ParseError {
    fn from(_: ParseIntError) -> Self {
        ParseError::NumberFormatError
    }
}
