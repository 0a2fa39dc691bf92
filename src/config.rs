//! Shape configuration: a JSON file mapping shape ids to a color and a raw
//! row-to-columns definition.
//!
//! Definitions are an ordered array (shape order drives the solver's
//! candidate order, so it must survive parsing). All malformed-definition
//! cases are rejected here, before any search begins.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PuzzleError, Result};
use crate::geometry::Orientation;
use crate::render;
use crate::shapes::Shape;

/// One entry in the shape config file.
#[derive(Debug, Deserialize)]
pub struct ShapeSpec {
    pub id: String,
    pub color: String,
    /// Row index to column offsets, as written in the file.
    pub shape: BTreeMap<usize, Vec<i32>>,
}

/// The default puzzle: eleven five-cell shapes that tile the 10-row board.
const DEFAULT_SHAPES: &str = include_str!("../shapes.json");

/// Builds the built-in shape set.
pub fn builtin() -> Result<Vec<Shape>> {
    let specs: Vec<ShapeSpec> =
        serde_json::from_str(DEFAULT_SHAPES).map_err(|source| PuzzleError::ParseConfig {
            path: PathBuf::from("<built-in>"),
            source,
        })?;
    build(specs)
}

/// Loads a shape set from a JSON config file.
pub fn load(path: &Path) -> Result<Vec<Shape>> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let specs: Vec<ShapeSpec> =
        serde_json::from_str(&text).map_err(|source| PuzzleError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
    build(specs)
}

/// Validates specs and builds shapes with precomputed orientations.
pub fn build(specs: Vec<ShapeSpec>) -> Result<Vec<Shape>> {
    let mut shapes: Vec<Shape> = Vec::with_capacity(specs.len());
    for spec in specs {
        if shapes.iter().any(|shape| shape.id == spec.id) {
            return Err(PuzzleError::DuplicateShape { id: spec.id });
        }
        if render::palette_color(&spec.color).is_none() {
            return Err(PuzzleError::UnknownColor {
                id: spec.id,
                color: spec.color,
            });
        }
        let rows = validate_rows(&spec)?;
        shapes.push(Shape::new(spec.id, spec.color, Orientation::new(rows)));
    }
    Ok(shapes)
}

fn validate_rows(spec: &ShapeSpec) -> Result<Vec<Vec<i32>>> {
    let invalid = |reason: String| PuzzleError::InvalidShape {
        id: spec.id.clone(),
        reason,
    };

    if spec.shape.is_empty() {
        return Err(invalid("shape has no rows".into()));
    }
    let mut rows = Vec::with_capacity(spec.shape.len());
    // BTreeMap iterates keys in ascending order
    for (expected, (&row, cols)) in spec.shape.iter().enumerate() {
        if row != expected {
            return Err(invalid(format!(
                "row keys are not contiguous from 0: expected {expected}, found {row}"
            )));
        }
        if cols.is_empty() {
            return Err(invalid(format!("row {row} has no column offsets")));
        }
        let mut sorted = cols.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != cols.len() {
            return Err(invalid(format!("row {row} repeats a column offset")));
        }
        rows.push(sorted);
    }
    // transposing turns columns into rows, so a gap in the column span would
    // produce an orientation with an empty row
    let min = rows.iter().flatten().min().copied().unwrap_or(0);
    let max = rows.iter().flatten().max().copied().unwrap_or(0);
    for col in min..=max {
        if !rows.iter().any(|row| row.contains(&col)) {
            return Err(invalid(format!(
                "no row uses column offset {col}, leaving a vertical gap"
            )));
        }
    }
    Ok(rows)
}
