//! Triangular packing puzzle solver library.
//!
//! Provides the shape/orientation model and the backtracking search that
//! places every shape exactly once onto a triangular board with no overlaps
//! and no gaps.

pub mod board;
pub mod config;
pub mod error;
pub mod geometry;
pub mod render;
pub mod shapes;
pub mod solver;
