//! Board representation and placement operations.
//!
//! The board is a list of rows of varying length; each cell is either empty
//! or owned by exactly one shape. Cells store a plain shape index, never any
//! display decoration, so occupancy checks are direct equality.

use crate::geometry::Orientation;

/// A single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Occupied by the shape at this index in the shape list.
    Occupied(usize),
}

/// A board of variable-width rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates a triangular board: row `y` has `y + 1` cells.
    pub fn triangle(height: usize) -> Self {
        Self {
            rows: (0..height).map(|y| vec![Cell::Empty; y + 1]).collect(),
        }
    }

    /// Creates an empty board for growing placements (orientation previews).
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// The board rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Total number of cells.
    pub fn total_cells(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Finds the first empty cell in row-major scan order.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == Cell::Empty {
                    return Some((y, x));
                }
            }
        }
        None
    }

    /// Places an orientation with its anchor cell on `target`, without
    /// growing the board.
    ///
    /// Every cell of the orientation must land inside the existing rows and
    /// on an empty cell; otherwise nothing is written and `false` is
    /// returned. Because orientations anchor their row-0 minimum at offset 0,
    /// a valid placement always covers `target` itself.
    pub fn place_fixed(
        &mut self,
        orientation: &Orientation,
        target: (usize, usize),
        shape: usize,
    ) -> bool {
        // validate every cell before touching the board
        for (sy, sx) in orientation.cells() {
            let y = target.0 + sy;
            let x = target.1 as i64 + sx as i64;
            let Some(row) = self.rows.get(y) else {
                return false;
            };
            if x < 0 || x as usize >= row.len() || row[x as usize] != Cell::Empty {
                return false;
            }
        }
        for (sy, sx) in orientation.cells() {
            let y = target.0 + sy;
            let x = (target.1 as i64 + sx as i64) as usize;
            self.rows[y][x] = Cell::Occupied(shape);
        }
        true
    }

    /// Restores the cells of a previously committed placement to empty.
    ///
    /// Callers only clear placements they committed with `place_fixed`, so
    /// every coordinate is in bounds.
    pub fn clear(&mut self, orientation: &Orientation, target: (usize, usize)) {
        for (sy, sx) in orientation.cells() {
            let y = target.0 + sy;
            let x = (target.1 as i64 + sx as i64) as usize;
            self.rows[y][x] = Cell::Empty;
        }
    }

    /// Places an orientation at `target`, creating rows and padding row tails
    /// with empty cells as needed.
    ///
    /// Used only for preview rendering outside the search; the search always
    /// runs on a pre-allocated board through `place_fixed`. The caller
    /// chooses a `target` column large enough that no cell lands left of
    /// column 0.
    pub fn place_growing(
        &mut self,
        orientation: &Orientation,
        target: (usize, usize),
        shape: usize,
    ) {
        for (sy, sx) in orientation.cells() {
            let y = target.0 + sy;
            let x = target.1 as i64 + sx as i64;
            debug_assert!(x >= 0, "preview placement ran off the left edge");
            let x = x as usize;
            while y >= self.rows.len() {
                self.rows.push(Vec::new());
            }
            if x >= self.rows[y].len() {
                self.rows[y].resize(x + 1, Cell::Empty);
            }
            self.rows[y][x] = Cell::Occupied(shape);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Orientation;

    fn orient(rows: &[&[i32]]) -> Orientation {
        Orientation::new(rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn test_triangle_row_lengths() {
        let board = Board::triangle(4);
        let lengths: Vec<usize> = board.rows().iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![1, 2, 3, 4]);
        assert_eq!(board.total_cells(), 10);
    }

    #[test]
    fn test_first_empty_scans_row_major() {
        let mut board = Board::triangle(3);
        assert_eq!(board.first_empty(), Some((0, 0)));
        assert!(board.place_fixed(&orient(&[&[0]]), (0, 0), 0));
        assert_eq!(board.first_empty(), Some((1, 0)));
        assert!(board.place_fixed(&orient(&[&[0]]), (1, 0), 1));
        assert_eq!(board.first_empty(), Some((1, 1)));
    }

    #[test]
    fn test_place_fixed_writes_all_cells() {
        let mut board = Board::triangle(3);
        assert!(board.place_fixed(&orient(&[&[0], &[0, 1]]), (1, 0), 3));
        assert_eq!(board.rows()[1][0], Cell::Occupied(3));
        assert_eq!(board.rows()[2][0], Cell::Occupied(3));
        assert_eq!(board.rows()[2][1], Cell::Occupied(3));
        assert_eq!(board.occupied_cells(), 3);
    }

    #[test]
    fn test_place_fixed_rejects_out_of_bounds_without_mutation() {
        let mut board = Board::triangle(3);
        let before = board.clone();
        // three-wide row does not fit in row 0 or row 1
        assert!(!board.place_fixed(&orient(&[&[0, 1, 2]]), (0, 0), 0));
        assert!(!board.place_fixed(&orient(&[&[0, 1, 2]]), (1, 0), 0));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_fixed_rejects_negative_column_without_mutation() {
        let mut board = Board::triangle(3);
        let before = board.clone();
        // lower row reaches one cell left of the anchor
        assert!(!board.place_fixed(&orient(&[&[0], &[-1, 0]]), (1, 0), 0));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_fixed_rejects_occupied_cells_without_mutation() {
        let mut board = Board::triangle(3);
        assert!(board.place_fixed(&orient(&[&[0]]), (1, 1), 0));
        let before = board.clone();
        assert!(!board.place_fixed(&orient(&[&[0, 1]]), (1, 0), 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_restores_exactly_the_committed_cells() {
        let mut board = Board::triangle(3);
        assert!(board.place_fixed(&orient(&[&[0]]), (2, 2), 7));
        let before = board.clone();

        let o = orient(&[&[0], &[0, 1]]);
        assert!(board.place_fixed(&o, (1, 0), 1));
        board.clear(&o, (1, 0));
        assert_eq!(board, before, "undo must restore every cell");
        assert_eq!(board.rows()[2][2], Cell::Occupied(7));
    }

    #[test]
    fn test_place_growing_extends_rows_and_pads_with_empty() {
        let mut board = Board::empty();
        board.place_growing(&orient(&[&[0], &[-1, 0]]), (0, 2), 0);
        assert_eq!(board.rows().len(), 2);
        assert_eq!(
            board.rows()[0],
            vec![Cell::Empty, Cell::Empty, Cell::Occupied(0)]
        );
        assert_eq!(
            board.rows()[1],
            vec![Cell::Empty, Cell::Occupied(0), Cell::Occupied(0)]
        );
    }
}
