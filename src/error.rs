use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuzzleError {
    /// A shape definition that cannot produce a valid orientation set.
    #[error("invalid shape {id:?}: {reason}")]
    InvalidShape { id: String, reason: String },

    #[error("duplicate shape id {id:?}")]
    DuplicateShape { id: String },

    #[error("unknown color {color:?} for shape {id:?}")]
    UnknownColor { id: String, color: String },

    #[error("failed to read shape config {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse shape config {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The board filled up while shapes were still unplaced. The board size
    /// does not match the shape set; this is a setup bug, not a search
    /// failure.
    #[error("board has no empty cell but {remaining} shapes remain unplaced")]
    BoardMismatch { remaining: usize },
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
