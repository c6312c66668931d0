use crate::{
    maze::{Direction, GridCell, Maze},
    rng::SeededRandom,
};

/// Above this stack length the traversal may jump to a random stack entry.
const JUMP_MIN_STACK_LEN: usize = 10;
/// Chance, in percent, of jumping instead of expanding the top of the stack.
const JUMP_PERCENT: usize = 30;

/// Carves a perfect maze with an iterative depth-first traversal from (1, 1)
/// that occasionally resumes from a random stack entry instead of the top.
///
/// Every decision is drawn from a [`SeededRandom`] built from `seed`, so the
/// same seed and dimensions always give the same maze.
///
/// Exhausted cells are swap-removed, so after a jump the stack is no longer
/// in path order. That ordering feeds back into later choices and is part of
/// what a seed reproduces.
pub fn jump_backtrack(maze: &mut Maze, seed: i64) {
    let mut rng = SeededRandom::new(seed);
    maze.set_seed(Some(seed));

    maze.initialize();

    let width = maze.width() as usize;
    let mut visited = vec![false; width * maze.height() as usize];
    let ravel = |(x, y): (u16, u16)| y as usize * width + x as usize;

    let start = maze.start();
    maze.set(start, GridCell::Path);
    visited[ravel(start)] = true;

    let mut stack = vec![start];
    let mut jumps = 0usize;
    let mut carved = 1usize;

    while !stack.is_empty() {
        let idx = if stack.len() > JUMP_MIN_STACK_LEN && rng.next_int(100) < JUMP_PERCENT {
            let idx = rng.next_int(stack.len());
            tracing::trace!("[jump backtrack] jumping to stack entry {}/{}", idx, stack.len());
            jumps += 1;
            idx
        } else {
            stack.len() - 1
        };
        let cell = stack[idx];

        let unvisited = Direction::ALL
            .iter()
            .filter_map(|&d| maze.node_neighbor(cell, d))
            .filter(|&n| !visited[ravel(n)])
            .collect::<Vec<_>>();

        if unvisited.is_empty() {
            // Exhausted, never looked at again
            stack.swap_remove(idx);
        } else {
            let neighbor = unvisited[rng.next_int(unvisited.len())];
            maze.carve_passage(cell, neighbor);
            visited[ravel(neighbor)] = true;
            carved += 1;
            stack.push(neighbor);
        }
    }

    tracing::debug!(
        "[jump backtrack] seed {}: carved {} nodes with {} jumps",
        seed,
        carved,
        jumps
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::assert_perfect_maze;

    fn carve(width: u16, height: u16, seed: i64) -> Maze {
        let mut maze = Maze::new(width, height).unwrap();
        jump_backtrack(&mut maze, seed);
        maze.finalize();
        maze
    }

    fn render(maze: &Maze) -> Vec<String> {
        maze.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        GridCell::Wall => '#',
                        GridCell::Path => '.',
                        GridCell::Start => 'S',
                        GridCell::End => 'E',
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_same_seed_same_maze() {
        let first = carve(21, 21, 1);
        let second = carve(21, 21, 1);
        assert_eq!(first, second);
        assert_eq!(first.seed(), Some(1));
        assert_perfect_maze(&first);
    }

    #[test]
    fn test_different_seeds_differ() {
        assert_ne!(carve(21, 21, 1), carve(21, 21, 2));
    }

    #[test]
    fn test_pinned_layout_with_jumps() {
        // Large enough for the stack to pass the jump threshold
        let expected = [
            "###########",
            "#S..#...#.#",
            "###.#.###.#",
            "#.#.#...#.#",
            "#.#.#.###.#",
            "#.#.#...#.#",
            "#.#.###.#.#",
            "#.#.#.....#",
            "#.#.#.###.#",
            "#.....#..E#",
            "###########",
        ];
        assert_eq!(render(&carve(11, 11, 1)), expected);
    }

    #[test]
    fn test_pinned_layout_small() {
        let expected = ["#######", "#S..#.#", "###.#.#", "#....E#", "#######"];
        assert_eq!(render(&carve(7, 5, 3)), expected);
    }

    #[test]
    fn test_negative_and_extreme_seeds() {
        for seed in [-1, i64::MIN, i64::MAX] {
            let maze = carve(15, 11, seed);
            assert_perfect_maze(&maze);
            assert_eq!(maze, carve(15, 11, seed));
        }
    }

    #[test]
    fn test_large_grid() {
        assert_perfect_maze(&carve(401, 301, 2024));
    }
}
