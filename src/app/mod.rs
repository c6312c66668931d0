mod renderer;

use std::{
    io::Write,
    time::{Duration, Instant},
};

use clap::Parser;

pub use renderer::{RenderStyle, Renderer};

use crate::generators::{Generator, generate_maze};

/// Generate a perfect maze and print it to the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Maze width in cells, border included. Even values are bumped to the next odd one.
    #[arg(default_value_t = 30)]
    pub width: u16,

    /// Maze height in cells, border included. Even values are bumped to the next odd one.
    #[arg(default_value_t = 40)]
    pub height: u16,

    /// Seed to reproduce a maze. Anything that does not start with a number is ignored.
    #[arg(allow_negative_numbers = true)]
    pub seed: Option<String>,

    /// Carving algorithm
    #[arg(short, long, value_enum, default_value_t = Generator::JumpBacktrack)]
    pub algorithm: Generator,

    /// Draw with ASCII characters instead of coloured blocks
    #[arg(long)]
    pub plain: bool,
}

/// Leniently reads a seed: an optional sign followed by leading digits,
/// ignoring whatever comes after them. Returns `None` when there are no
/// leading digits or the number does not fit in an `i64`.
///
/// Zero parses as `Some(0)`; generation treats it as "no seed".
pub fn parse_seed(text: &str) -> Option<i64> {
    let text = text.trim();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits_len = text[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    text[..sign_len + digits_len].parse().ok()
}

#[derive(Default)]
pub struct App {
    render_style: RenderStyle,
}

impl App {
    pub fn new(render_style: RenderStyle) -> Self {
        App { render_style }
    }

    /// Generates the maze described by `args` and writes it to `out` with its seed.
    pub fn run(&self, args: &Args, out: &mut impl Write) -> std::io::Result<()> {
        let seed = args.seed.as_deref().and_then(parse_seed);
        if let (Some(text), None) = (&args.seed, seed) {
            tracing::info!("Ignoring seed {:?}, falling back to a time-derived one", text);
        }

        let maze = generate_maze(args.width, args.height, args.algorithm, seed)?;

        Renderer::new(self.render_style).render(&maze, out)?;
        writeln!(
            out,
            "{}x{} maze generated with {}",
            maze.width(),
            maze.height(),
            args.algorithm
        )?;
        if let Some(seed) = maze.seed() {
            writeln!(out, "Seed: {} (pass it again to reproduce this maze)", seed)?;
        }
        out.flush()
    }

    /// Repeatedly generates a maze and reports timing, for profiling.
    pub fn profile(
        &self,
        width: u16,
        height: u16,
        generator: Generator,
        num_iters: Option<usize>,
    ) -> std::io::Result<()> {
        let num_iters = num_iters.unwrap_or(100);
        let mut total = Duration::ZERO;
        for i in 0..num_iters {
            let started = Instant::now();
            let maze = generate_maze(width, height, generator, Some(i as i64))?;
            total += started.elapsed();
            tracing::debug!("[profile] iteration {} done, seed {:?}", i, maze.seed());
        }
        println!(
            "{}: {} iterations of {}x{} in {:?} ({:?} per maze)",
            generator,
            num_iters,
            width,
            height,
            total,
            total.checked_div(num_iters as u32).unwrap_or_default()
        );
        Ok(())
    }
}
