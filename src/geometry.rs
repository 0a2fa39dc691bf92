//! Shape orientations and the transforms that generate them.
//!
//! An orientation is pure geometry, independent of any board position: a list
//! of rows (contiguous from 0), each holding the column offsets occupied in
//! that row. A shape reaches at most 8 distinct orientations through
//! transposition and flips; symmetric shapes reach fewer.

/// One orientation of a shape.
///
/// `rows[r]` holds the column offsets occupied in row `r`, sorted ascending.
/// Offsets are relative to the anchor: after normalization the minimum offset
/// of row 0 is exactly 0. Rows below row 0 may extend left of the anchor and
/// so may carry negative offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orientation {
    rows: Vec<Vec<i32>>,
}

impl Orientation {
    /// Builds an orientation from raw rows and normalizes it.
    ///
    /// Callers must supply a non-empty row 0; `config` validates this before
    /// any orientation is built.
    pub fn new(mut rows: Vec<Vec<i32>>) -> Self {
        for row in &mut rows {
            row.sort_unstable();
        }
        let mut orientation = Self { rows };
        orientation.normalize();
        orientation
    }

    /// The rows of this orientation, topmost first.
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// Iterates over all cells as `(row_offset, col_offset)` pairs, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(sy, cols)| cols.iter().map(move |&sx| (sy, sx)))
    }

    /// Number of cells covered by this orientation.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Shifts every column offset so the minimum offset of row 0 becomes 0.
    ///
    /// Row 0's minimum, not the global minimum, is the shift reference: the
    /// solver anchors orientations by their topmost row, and placement relies
    /// on the anchor cell landing exactly on the target cell.
    fn normalize(&mut self) {
        let shift = self.rows[0][0]; // sorted, so the first entry is the min
        if shift == 0 {
            return;
        }
        for row in &mut self.rows {
            for col in row {
                *col -= shift;
            }
        }
    }

    /// Swaps the roles of row and column.
    ///
    /// Column offsets may be negative, so they are first shifted up to become
    /// valid row indices.
    fn transpose(&self) -> Self {
        let offset = self.cells().map(|(_, sx)| -sx).max().unwrap_or(0).max(0);
        let height = self.cells().map(|(_, sx)| sx + offset).max().unwrap_or(0) as usize + 1;

        let mut rows = vec![Vec::new(); height];
        for (sy, cols) in self.rows.iter().enumerate() {
            for &sx in cols {
                // outer loop ascending in sy keeps each new row sorted
                rows[(sx + offset) as usize].push(sy as i32);
            }
        }
        let mut transposed = Self { rows };
        transposed.normalize();
        transposed
    }

    /// Mirrors the orientation top-to-bottom.
    fn flip_vertical(&self) -> Self {
        let mut flipped = Self {
            rows: self.rows.iter().rev().cloned().collect(),
        };
        flipped.normalize();
        flipped
    }

    /// Mirrors the orientation left-to-right.
    fn flip_horizontal(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|cols| {
                let mut mirrored: Vec<i32> = cols.iter().map(|&sx| -sx).collect();
                mirrored.sort_unstable();
                mirrored
            })
            .collect();
        let mut flipped = Self { rows };
        flipped.normalize();
        flipped
    }
}

/// Generates all distinct orientations reachable from a base definition.
///
/// Order is deterministic: the normalized base, its transpose, then the
/// vertical flips of the set so far, then the horizontal flips of the set so
/// far. Each pass snapshots the set length first and never iterates over its
/// own additions. Duplicates (symmetric shapes) are dropped by structural
/// equality, so the result has 1, 2, 4 or 8 entries.
pub fn all_orientations(base: &Orientation) -> Vec<Orientation> {
    let mut orientations = vec![base.clone()];

    let transposed = orientations[0].transpose();
    if !orientations.contains(&transposed) {
        orientations.push(transposed);
    }

    let count = orientations.len();
    for index in 0..count {
        let flipped = orientations[index].flip_vertical();
        if !orientations.contains(&flipped) {
            orientations.push(flipped);
        }
    }

    let count = orientations.len();
    for index in 0..count {
        let flipped = orientations[index].flip_horizontal();
        if !orientations.contains(&flipped) {
            orientations.push(flipped);
        }
    }

    orientations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orient(rows: &[&[i32]]) -> Orientation {
        Orientation::new(rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn test_new_normalizes_row_zero_anchor() {
        let o = orient(&[&[3, 4], &[4, 5]]);
        assert_eq!(o.rows(), &[vec![0, 1], vec![1, 2]]);
    }

    #[test]
    fn test_single_cell_has_one_orientation() {
        let all = all_orientations(&orient(&[&[0]]));
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].rows(), &[vec![0]]);
    }

    #[test]
    fn test_square_has_one_orientation() {
        let all = all_orientations(&orient(&[&[0, 1], &[0, 1]]));
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_bar_has_two_orientations() {
        let all = all_orientations(&orient(&[&[0, 1, 2]]));
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].rows(), &[vec![0], vec![0], vec![0]]);
    }

    #[test]
    fn test_corner_tromino_has_four_orientations() {
        let all = all_orientations(&orient(&[&[0], &[0, 1]]));
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_s_tetromino_has_four_orientations() {
        let all = all_orientations(&orient(&[&[0, 1], &[1, 2]]));
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_asymmetric_shape_has_eight_orientations() {
        // L tetromino: no symmetry at all
        let all = all_orientations(&orient(&[&[0], &[0], &[0, 1]]));
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn test_orientation_count_bound_and_distinctness() {
        let bases = [
            orient(&[&[0]]),
            orient(&[&[0, 1, 2, 3]]),
            orient(&[&[0, 1], &[1, 2]]),
            orient(&[&[0], &[0, 1], &[0, 1, 2]]),
            orient(&[&[0, 1], &[-1, 0, 1]]),
        ];
        for base in &bases {
            let all = all_orientations(base);
            assert!((1..=8).contains(&all.len()));
            for (i, a) in all.iter().enumerate() {
                for b in &all[i + 1..] {
                    assert_ne!(a, b, "duplicate orientation generated");
                }
            }
        }
    }

    #[test]
    fn test_every_orientation_is_normalized() {
        let base = orient(&[&[0, 1], &[-1, 0, 1]]);
        for o in all_orientations(&base) {
            assert_eq!(o.rows()[0][0], 0, "row 0 must anchor at offset 0");
        }
    }

    #[test]
    fn test_transpose_fixture() {
        // staircase: X / XX becomes XX / .X when transposed
        let o = orient(&[&[0], &[0, 1]]);
        assert_eq!(o.transpose().rows(), &[vec![0, 1], vec![1]]);
    }

    #[test]
    fn test_transpose_is_an_involution() {
        let o = orient(&[&[0, 1, 2], &[0, 1]]);
        assert_eq!(o.transpose().transpose(), o);
    }

    #[test]
    fn test_flip_horizontal_produces_negative_offsets_below_row_zero() {
        // left-anchored staircase mirrors into a right-anchored one; the
        // row-0 anchor pins offset 0 at the top, pushing lower rows negative
        let o = orient(&[&[0], &[0, 1], &[0, 1, 2]]);
        let flipped = o.flip_horizontal();
        assert_eq!(flipped.rows(), &[vec![0], vec![-1, 0], vec![-2, -1, 0]]);
    }

    #[test]
    fn test_flip_vertical_fixture() {
        let o = orient(&[&[0], &[0, 1], &[0, 1, 2]]);
        assert_eq!(
            o.flip_vertical().rows(),
            &[vec![0, 1, 2], vec![0, 1], vec![0]]
        );
    }

    #[test]
    fn test_cell_count() {
        assert_eq!(orient(&[&[0, 1], &[-1, 0, 1]]).cell_count(), 5);
    }
}
