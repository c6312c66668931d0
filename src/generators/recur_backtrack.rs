use crate::{
    generators::get_rng,
    maze::{Direction, GridCell, Maze},
};
use rand::{Rng, seq::SliceRandom};

/// One level of the depth-first descent: the cell being expanded, its
/// shuffled directions, and how many of them have been tried.
struct Frame {
    cell: (u16, u16),
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new(cell: (u16, u16), rng: &mut impl Rng) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Frame {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Carves a perfect maze by randomized depth-first backtracking from (1, 1).
///
/// Each cell tries its four directions in a shuffled order and fully explores
/// one neighbor before trying the next. The descent keeps its own stack of
/// frames instead of recursing, so large grids cannot overflow the call stack.
pub fn recursive_backtrack(maze: &mut Maze, seed: Option<i64>) {
    let mut rng = get_rng(seed);
    maze.set_seed(seed);

    maze.initialize();

    let start = maze.start();
    maze.set(start, GridCell::Path);

    let mut stack = vec![Frame::new(start, &mut rng)];
    let mut carved = 1usize;

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.directions.get(frame.next) else {
            // All four directions tried, backtrack
            stack.pop();
            continue;
        };
        frame.next += 1;
        let cell = frame.cell;

        if let Some(neighbor) = maze.node_neighbor(cell, direction) {
            if maze[neighbor] == GridCell::Wall {
                maze.carve_passage(cell, neighbor);
                carved += 1;
                stack.push(Frame::new(neighbor, &mut rng));
            }
        }
    }

    tracing::debug!("[recursive backtrack] carved {} nodes", carved);
}
