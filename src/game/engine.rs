use rand::rngs::ThreadRng;

use super::{
    config::GameConfig,
    direction::{Command, Direction},
    grid::{Cell, Playground},
    segments::SegmentList,
};

/// What the snake ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head landed on the border ring
    Wall,
    /// Head landed on a body segment
    Body,
}

/// Outcome of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// The collision that ended the run, if one occurred
    pub collision: Option<Collision>,
    /// Whether the game is in its terminal state
    pub terminated: bool,
}

/// Complete state of one run.
///
/// Owned exclusively by the caller and mutated only through
/// [`GameEngine::step`]; the display sink gets shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub playground: Playground,
    pub segments: SegmentList,
    pub direction: Direction,
    /// Index of the food cell; `None` only before first placement
    pub food: Option<usize>,
    pub score: u32,
    pub steps: u32,
    pub alive: bool,
}

impl GameState {
    /// Grid index of the head segment.
    pub fn head(&self) -> usize {
        self.segments.head().expect("active game has a non-empty body")
    }

    pub fn length(&self) -> usize {
        self.segments.len()
    }
}

/// Drives the per-tick update: head advance, collision, growth and food
/// regeneration. Holds the rng for food placement; everything else about a
/// tick is a total function of the state and the input command.
pub struct GameEngine {
    config: GameConfig,
    rng: ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh run: bordered playground, a straight initial body ending
    /// at the centre and heading right, first food on a free interior cell.
    pub fn reset(&mut self) -> GameState {
        let mut playground = Playground::new(self.config.playground_width, self.config.playground_height);
        let mut segments = SegmentList::new();

        let head = playground.index(self.config.playground_width / 2, self.config.playground_height / 2);
        debug_assert!(
            self.config.initial_snake_length <= self.config.playground_width / 2 - 1,
            "initial body must fit between the centre and the left border"
        );
        for index in head + 1 - self.config.initial_snake_length..=head {
            playground.set(index, Cell::Snake);
            segments.insert_head(index);
        }

        let food = playground.place_food(&mut self.rng);

        GameState {
            playground,
            segments,
            direction: Direction::Right,
            food: Some(food),
            score: 0,
            steps: 0,
            alive: true,
        }
    }

    /// Advance the game by one tick.
    ///
    /// Consumes at most one steering command. A reversal is applied as-is and
    /// runs the head into the neck on this very advance; see
    /// [`Command::Steer`]. Ticks on a terminal state change nothing.
    pub fn step(&mut self, state: &mut GameState, command: Command) -> StepResult {
        if !state.alive {
            return StepResult {
                ate_food: false,
                collision: None,
                terminated: true,
            };
        }

        if let Command::Steer(direction) = command {
            state.direction = direction;
        }

        let next_head = state.direction.advance(state.head(), state.playground.width());
        let hit = state.playground.cell(next_head);

        match hit {
            Cell::Border | Cell::Snake => {
                state.alive = false;
                state.steps += 1;

                let collision = if hit == Cell::Border { Collision::Wall } else { Collision::Body };
                return StepResult {
                    ate_food: false,
                    collision: Some(collision),
                    terminated: true,
                };
            }
            Cell::Empty => {
                // slide: the tail vacates the cell the head no longer covers
                state.playground.set(next_head, Cell::Snake);
                state.segments.insert_head(next_head);
                if let Some(vacated) = state.segments.delete_tail() {
                    state.playground.set(vacated, Cell::Empty);
                }
            }
            Cell::Food => {
                // grow: keep the tail, re-roll the food
                state.playground.set(next_head, Cell::Snake);
                state.segments.insert_head(next_head);
                state.score += 1;
                state.food = Some(state.playground.place_food(&mut self.rng));
            }
        }

        state.steps += 1;

        StepResult {
            ate_food: hit == Cell::Food,
            collision: None,
            terminated: false,
        }
    }
}
