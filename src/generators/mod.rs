use rand::{SeedableRng, rngs::StdRng};

mod jump_backtrack;
mod recur_backtrack;

pub use jump_backtrack::jump_backtrack;
pub use recur_backtrack::recursive_backtrack;

use crate::{error::Result, maze::Maze, rng::time_seed};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<i64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s as u64),
        None => StdRng::from_os_rng(),
    }
}

/// Drops a zero seed, which means "no seed".
fn explicit_seed(seed: Option<i64>) -> Option<i64> {
    seed.filter(|&s| s != 0)
}

/// Returns the supplied seed, or a wall-clock derived one when none (or zero)
/// was given.
pub fn resolve_seed(seed: Option<i64>) -> i64 {
    match explicit_seed(seed) {
        Some(s) => s,
        None => {
            let s = time_seed();
            tracing::debug!("No seed supplied, using time-derived seed {}", s);
            s
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Generator {
    /// Depth-first backtracking driven by a general-purpose random source
    RecurBacktrack,
    /// Depth-first traversal with random mid-stack jumps, reproducible from its seed
    JumpBacktrack,
}

impl Generator {
    pub const ALL: [Generator; 2] = [Generator::RecurBacktrack, Generator::JumpBacktrack];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::JumpBacktrack => write!(f, "Backtracking with Random Jumps"),
        }
    }
}

/// Builds a `width` x `height` maze (even dimensions are bumped to odd) with the
/// given algorithm, then labels its entry and exit.
///
/// `JumpBacktrack` always records the seed it used, resolving a time-derived one
/// when `seed` is `None` or zero. `RecurBacktrack` records the seed only when a
/// nonzero one is supplied.
pub fn generate_maze(
    width: u16,
    height: u16,
    generator: Generator,
    seed: Option<i64>,
) -> Result<Maze> {
    let mut maze = Maze::new(width, height)?;
    tracing::debug!(
        "Generating {}x{} maze with {}",
        maze.width(),
        maze.height(),
        generator
    );
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(&mut maze, explicit_seed(seed)),
        Generator::JumpBacktrack => jump_backtrack(&mut maze, resolve_seed(seed)),
    }
    maze.finalize();
    Ok(maze)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::maze::GridCell;
    use std::collections::VecDeque;

    /// Asserts every property a finished maze must have: solid border, a single
    /// start and end in their fixed spots, and a carved region that is one tree.
    pub(crate) fn assert_perfect_maze(maze: &Maze) {
        let (w, h) = (maze.width(), maze.height());
        assert_eq!(w % 2, 1);
        assert_eq!(h % 2, 1);

        let border = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&c| maze.is_boundary(c))
            .collect::<Vec<_>>();
        assert_eq!(border.len(), 2 * (w as usize + h as usize) - 4);
        for coord in border {
            assert_eq!(maze[coord], GridCell::Wall, "border cell {:?} carved", coord);
        }

        let count = |cell: GridCell| maze.cells().iter().filter(|&&c| c == cell).count();
        assert_eq!(count(GridCell::Start), 1);
        assert_eq!(count(GridCell::End), 1);
        assert_eq!(maze[(1, 1)], GridCell::Start);
        assert_eq!(maze[(w - 2, h - 2)], GridCell::End);

        // Every node is carved, and no cell with both coordinates even ever is
        for y in 0..h {
            for x in 0..w {
                if x % 2 == 1 && y % 2 == 1 {
                    assert!(maze[(x, y)].is_open(), "node ({}, {}) not carved", x, y);
                }
                if x % 2 == 0 && y % 2 == 0 {
                    assert!(!maze[(x, y)].is_open(), "pillar ({}, {}) carved", x, y);
                }
            }
        }

        let open_cells = maze.cells().iter().filter(|c| c.is_open()).count();

        // Count adjacencies between open cells, each once
        let mut edges = 0;
        for y in 0..h {
            for x in 0..w {
                if !maze[(x, y)].is_open() {
                    continue;
                }
                if x + 1 < w && maze[(x + 1, y)].is_open() {
                    edges += 1;
                }
                if y + 1 < h && maze[(x, y + 1)].is_open() {
                    edges += 1;
                }
            }
        }

        // Flood fill from the start
        let mut seen = vec![false; w as usize * h as usize];
        let mut queue = VecDeque::from([(1u16, 1u16)]);
        seen[(w + 1) as usize] = true;
        let mut reached = 0;
        while let Some((x, y)) = queue.pop_front() {
            reached += 1;
            for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                let idx = ny as usize * w as usize + nx as usize;
                if maze[(nx, ny)].is_open() && !seen[idx] {
                    seen[idx] = true;
                    queue.push_back((nx, ny));
                }
            }
        }

        assert_eq!(reached, open_cells, "carved region is not connected");
        assert_eq!(edges, open_cells - 1, "carved region contains a cycle");
    }

    #[test]
    fn test_all_generators_produce_perfect_mazes() {
        for generator in Generator::ALL {
            for (w, h) in [(5, 5), (10, 8), (21, 21), (31, 7), (4, 40), (3, 9)] {
                for seed in [1, 2, 42] {
                    let maze = generate_maze(w, h, generator, Some(seed)).unwrap();
                    assert_perfect_maze(&maze);
                }
            }
        }
    }

    #[test]
    fn test_normalized_dimensions() {
        for generator in Generator::ALL {
            let maze = generate_maze(10, 8, generator, Some(3)).unwrap();
            assert_eq!((maze.width(), maze.height()), (11, 9));
            assert_eq!(maze.end(), (9, 7));
            assert_eq!(maze[(9, 7)], GridCell::End);
        }
    }

    #[test]
    fn test_too_small_fails_fast() {
        for generator in Generator::ALL {
            assert!(generate_maze(2, 5, generator, None).is_err());
            assert!(generate_maze(5, 1, generator, Some(1)).is_err());
        }
    }

    #[test]
    fn test_smallest_maze() {
        // A 3x3 grid has a single node, so the end label overwrites the start
        let maze = generate_maze(3, 3, Generator::JumpBacktrack, Some(9)).unwrap();
        assert_eq!(maze.start(), maze.end());
        assert_eq!(maze[(1, 1)], GridCell::End);
    }

    #[test]
    fn test_jump_backtrack_records_seed() {
        let maze = generate_maze(9, 9, Generator::JumpBacktrack, Some(1234)).unwrap();
        assert_eq!(maze.seed(), Some(1234));

        let maze = generate_maze(9, 9, Generator::JumpBacktrack, None).unwrap();
        let seed = maze.seed().expect("resolved seed is recorded");
        let again = generate_maze(9, 9, Generator::JumpBacktrack, Some(seed)).unwrap();
        assert_eq!(maze, again);
    }

    #[test]
    fn test_zero_seed_means_no_seed() {
        let maze = generate_maze(21, 21, Generator::JumpBacktrack, Some(0)).unwrap();
        let seed = maze.seed().expect("resolved seed is recorded");
        assert_ne!(seed, 0);
        assert_perfect_maze(&maze);

        let maze = generate_maze(9, 9, Generator::RecurBacktrack, Some(0)).unwrap();
        assert_eq!(maze.seed(), None);
        assert_perfect_maze(&maze);
    }

    #[test]
    fn test_recur_backtrack_seed_is_optional() {
        let maze = generate_maze(9, 9, Generator::RecurBacktrack, None).unwrap();
        assert_eq!(maze.seed(), None);
        assert_perfect_maze(&maze);
        let maze = generate_maze(9, 9, Generator::RecurBacktrack, Some(5)).unwrap();
        assert_eq!(maze.seed(), Some(5));
    }

    #[test]
    fn test_resolve_seed() {
        assert_eq!(resolve_seed(Some(-17)), -17);
        assert!(resolve_seed(None) > 0);
        assert_ne!(resolve_seed(Some(0)), 0);
    }
}
