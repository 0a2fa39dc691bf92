//! Puzzle shapes: an identity, a display color and the precomputed set of
//! distinct orientations.

use crate::geometry::{all_orientations, Orientation};

/// One puzzle shape, usable exactly once per solve.
///
/// Built once at startup from a raw definition and immutable afterwards,
/// except for the `used` flag the solver toggles around each trial placement.
#[derive(Clone, Debug)]
pub struct Shape {
    /// Unique display token, also printed into board cells.
    pub id: String,
    /// Palette color name; opaque to the search, resolved only at render
    /// time.
    pub color: String,
    /// All distinct orientations, in generation order.
    pub orientations: Vec<Orientation>,
    /// Whether the shape is currently placed on the board.
    pub used: bool,
}

impl Shape {
    /// Creates a shape and computes its orientations from the base
    /// definition.
    pub fn new(id: impl Into<String>, color: impl Into<String>, base: Orientation) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            orientations: all_orientations(&base),
            used: false,
        }
    }

    /// Number of cells this shape covers (identical in every orientation).
    pub fn cell_count(&self) -> usize {
        self.orientations[0].cell_count()
    }
}

/// Total number of cells covered by all shapes together.
pub fn total_cells(shapes: &[Shape]) -> usize {
    shapes.iter().map(Shape::cell_count).sum()
}
