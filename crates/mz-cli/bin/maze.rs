//! Maze generator and solver
//!
//! Carves a maze, draws it, walks it from entrance to exit and draws it again.

use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use log::LevelFilter;

use mz_core::{Maze, MazeError};
use mz_cli::{GlyphSet, GraphicsMode, render, status_line};

/// Generate a perfect maze and solve it with a wall follower
#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Carved cells per side; the drawn grid is 2 * size + 1 wide
    #[arg(short = 's', long = "size", default_value_t = 10)]
    size: usize,

    /// Seed for the random generator (random when omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Glyph set: classic, fancy or auto
    #[arg(short = 'g', long = "graphics", default_value_t = GraphicsMode::Classic)]
    graphics: GraphicsMode,

    /// Disable ANSI colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Draw the generated maze without solving it
    #[arg(long = "no-solve")]
    no_solve: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut maze = match args.seed {
        Some(seed) => Maze::with_seed(args.size, seed)?,
        None => Maze::new(args.size)?,
    };
    let glyphs = args.graphics.glyphs();
    let colored = !args.no_color;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Seed: {}", maze.seed())?;

    maze.generate()?;
    draw(&mut out, &maze, glyphs.as_ref(), colored)?;

    if args.no_solve {
        return Ok(());
    }

    match maze.solve() {
        Ok(_) => {}
        Err(MazeError::Unsolvable { steps }) => {
            writeln!(out, "No path found after {} steps", steps)?;
        }
        Err(e) => return Err(e.into()),
    }
    draw(&mut out, &maze, glyphs.as_ref(), colored)?;

    Ok(())
}

fn draw(out: &mut impl Write, maze: &Maze, glyphs: &dyn GlyphSet, colored: bool) -> io::Result<()> {
    write!(out, "{}", render(maze.grid(), glyphs, colored))?;
    writeln!(out, "{}", status_line(maze))?;
    out.flush()
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
