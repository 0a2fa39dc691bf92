//! Terminal rendering of boards and orientation previews.
//!
//! The board stores plain shape indices; all color decoration happens here,
//! keyed by a fixed palette of named colors referenced from the shape config.

use crossterm::style::{Color, Stylize};

use crate::board::{Board, Cell};
use crate::shapes::Shape;

/// Marker printed for an empty cell.
pub const EMPTY_CELL: &str = "_";

/// The fixed palette of named colors available to shape configs.
pub const PALETTE: &[(&str, Color)] = &[
    ("red", Color::Red),
    ("orange", Color::Rgb { r: 255, g: 165, b: 0 }),
    ("light-green", Color::Green),
    ("dark-green", Color::DarkGreen),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("light-blue", Color::Cyan),
    ("pink", Color::Rgb { r: 255, g: 105, b: 180 }),
    ("light-pink", Color::Rgb { r: 255, g: 182, b: 193 }),
    ("purple", Color::DarkMagenta),
    ("white", Color::White),
    ("grey", Color::Grey),
];

/// Looks up a palette color by name.
pub fn palette_color(name: &str) -> Option<Color> {
    PALETTE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|&(_, color)| color)
}

/// Renders the board without any color decoration.
///
/// One line per row, cells space-joined, `_` for empty. This is the form
/// used by tests, trace logging and file output.
pub fn render_plain(board: &Board, shapes: &[Shape]) -> String {
    render(board, shapes, false)
}

/// Renders the board with each occupant decorated in its shape's color.
pub fn render_colored(board: &Board, shapes: &[Shape]) -> String {
    render(board, shapes, true)
}

fn render(board: &Board, shapes: &[Shape], colored: bool) -> String {
    let mut output = String::new();
    for row in board.rows() {
        let mut cells = Vec::with_capacity(row.len());
        for &cell in row {
            match cell {
                Cell::Empty => cells.push(EMPTY_CELL.to_string()),
                Cell::Occupied(index) => {
                    let shape = &shapes[index];
                    let decorated = colored
                        .then(|| palette_color(&shape.color))
                        .flatten()
                        .map(|color| shape.id.as_str().with(color).to_string());
                    cells.push(decorated.unwrap_or_else(|| shape.id.clone()));
                }
            }
        }
        output.push_str(&cells.join(" "));
        output.push('\n');
    }
    output
}

/// Column width reserved per orientation on a preview sheet.
const PREVIEW_SPAN: usize = 6;

/// Lays every orientation of a shape side by side on a growing board.
///
/// `shape_index` is the shape's position in the full shape list, so the sheet
/// renders with the same id and color as the real board.
pub fn orientation_sheet(shape: &Shape, shape_index: usize) -> Board {
    let mut board = Board::empty();
    for (i, orientation) in shape.orientations.iter().enumerate() {
        // start one span in: lower rows may extend left of the anchor
        board.place_growing(orientation, (0, PREVIEW_SPAN * (i + 1)), shape_index);
    }
    board
}
