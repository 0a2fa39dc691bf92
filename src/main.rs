//! Triangular packing puzzle solver.
//!
//! Fills a triangular board (row `y` has `y + 1` cells) with a fixed set of
//! shapes, each usable exactly once in any of its distinct orientations, and
//! prints the resulting tiling to the terminal.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use log::info;

use pyramid::board::Board;
use pyramid::shapes::{self, Shape};
use pyramid::solver::{self, Outcome};
use pyramid::{config, render};

/// Solves a triangular packing puzzle and prints the tiling.
#[derive(Parser)]
#[command(name = "pyramid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Shape definitions file; the built-in puzzle is used when absent.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and print the initial and final board.
    Solve {
        /// Number of board rows.
        #[arg(long, default_value_t = 10)]
        size: usize,
        /// Also write the solved board to this file, undecorated.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print without color decoration.
        #[arg(long)]
        plain: bool,
    },
    /// Print every distinct orientation of each configured shape.
    Shapes,
    /// List the color palette available to shape configs.
    Palette,
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    let shapes = match &cli.config {
        Some(path) => config::load(path)?,
        None => config::builtin()?,
    };

    match cli.command {
        Some(Command::Solve {
            size,
            output,
            plain,
        }) => run_solve(shapes, size, output, plain),
        Some(Command::Shapes) => {
            run_shapes(&shapes);
            Ok(())
        }
        Some(Command::Palette) => {
            run_palette();
            Ok(())
        }
        // default: solve the standard 10-row board
        None => run_solve(shapes, 10, None, false),
    }
}

/// Runs the search and prints the board before and after.
///
/// A puzzle without a solution is a normal outcome and still exits 0; only
/// configuration errors and the solver's internal consistency error fail the
/// process.
fn run_solve(
    mut shapes: Vec<Shape>,
    size: usize,
    output: Option<PathBuf>,
    plain: bool,
) -> anyhow::Result<()> {
    let mut board = Board::triangle(size);
    let render_fn: fn(&Board, &[Shape]) -> String = if plain {
        render::render_plain
    } else {
        render::render_colored
    };

    info!(
        "{} shapes covering {} cells, board of {} cells",
        shapes.len(),
        shapes::total_cells(&shapes),
        board.total_cells()
    );

    println!("-------- empty board --------");
    print!("{}", render_fn(&board, &shapes));

    match solver::solve(&mut board, &mut shapes)? {
        Outcome::Solved => {
            println!("-------- final board --------");
            print!("{}", render_fn(&board, &shapes));
            if let Some(path) = output {
                fs::write(&path, render::render_plain(&board, &shapes))
                    .with_context(|| format!("failed to write solution to {}", path.display()))?;
                info!("wrote solution to {}", path.display());
            }
        }
        Outcome::Exhausted => {
            println!("no tiling exists for this board and shape set");
        }
    }
    Ok(())
}

/// Prints each shape's distinct orientations side by side.
fn run_shapes(shapes: &[Shape]) {
    for (index, shape) in shapes.iter().enumerate() {
        let noun = if shape.orientations.len() == 1 {
            "orientation"
        } else {
            "orientations"
        };
        println!("{}: {} {}", shape.id, shape.orientations.len(), noun);
        let sheet = render::orientation_sheet(shape, index);
        print!("{}", render::render_colored(&sheet, shapes));
    }
}

/// Prints the palette names, each in its own color.
fn run_palette() {
    for &(name, color) in render::PALETTE {
        println!("{}", name.with(color));
    }
}
