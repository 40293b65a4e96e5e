//! Core game logic: the playground grid, the snake's segment list and the
//! per-tick engine.
//!
//! No I/O or rendering dependencies; the interactive loop and the tests
//! drive it the same way.

pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod segments;

pub use config::GameConfig;
pub use direction::{Command, Direction};
pub use engine::{Collision, GameEngine, GameState, StepResult};
pub use grid::{Cell, Playground};
pub use segments::SegmentList;
