pub mod app;
pub mod error;
pub mod generators;
pub mod maze;
pub mod rng;

pub use error::{MazeError, Result};
pub use generators::{Generator, generate_maze};
pub use maze::{GridCell, Maze};
pub use rng::SeededRandom;
