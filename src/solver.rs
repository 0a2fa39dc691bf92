//! Backtracking search for a complete tiling.
//!
//! The search repeatedly locates the first empty cell in row-major order and
//! tries every unused shape, in every orientation, anchored on that cell.
//! Because orientations anchor their row-0 minimum at offset 0, every
//! candidate placement covers the target cell, so the first-empty-cell
//! heuristic never strands a cell: the scan-earliest hole is always the one
//! being filled.

use log::{debug, log_enabled, trace, Level};

use crate::board::Board;
use crate::error::{PuzzleError, Result};
use crate::render;
use crate::shapes::Shape;

/// Terminal outcome of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every shape is placed; the board holds the winning tiling.
    Solved,
    /// The full space was explored without finding a tiling. The board is
    /// back in its initial state.
    Exhausted,
}

/// Finds one complete tiling of `board` using every shape exactly once.
///
/// On `Solved` the board is left holding the solution and every shape is
/// marked used; on `Exhausted` both are restored to their initial state.
/// Shapes are tried in slice order and orientations in generation order, so
/// identical inputs always produce the identical solution.
pub fn solve(board: &mut Board, shapes: &mut [Shape]) -> Result<Outcome> {
    let remaining = shapes.iter().filter(|shape| !shape.used).count();
    search(board, shapes, remaining)
}

fn search(board: &mut Board, shapes: &mut [Shape], remaining: usize) -> Result<Outcome> {
    if remaining == 0 {
        return Ok(Outcome::Solved);
    }

    // An exhausted board with shapes left means the board size and the shape
    // set disagree; that is a setup bug and must not masquerade as an
    // ordinary "no solution" result.
    let target = board
        .first_empty()
        .ok_or(PuzzleError::BoardMismatch { remaining })?;

    debug!(
        "remaining shapes: {remaining}, now filling ({}, {})",
        target.0, target.1
    );
    if log_enabled!(Level::Trace) {
        trace!("\n{}", render::render_plain(board, shapes));
    }

    for index in 0..shapes.len() {
        if shapes[index].used {
            continue;
        }
        for variant in 0..shapes[index].orientations.len() {
            if !board.place_fixed(&shapes[index].orientations[variant], target, index) {
                continue;
            }
            shapes[index].used = true;
            if search(board, shapes, remaining - 1)? == Outcome::Solved {
                // leave the winning placement intact all the way up
                return Ok(Outcome::Solved);
            }
            board.clear(&shapes[index].orientations[variant], target);
            shapes[index].used = false;
        }
    }

    Ok(Outcome::Exhausted)
}
