/// Direction of travel across the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Linear index of the cell one step ahead on a grid of the given width.
    ///
    /// No bounds clamping: the caller guarantees `index` is an interior cell,
    /// so the result stays on the grid and lands on the border ring at worst.
    pub fn advance(&self, index: usize, width: usize) -> usize {
        match self {
            Direction::Up => index - width,
            Direction::Down => index + width,
            Direction::Left => index - 1,
            Direction::Right => index + 1,
        }
    }
}

/// Steering input resolved for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Turn to the given direction. Reversals are not filtered: steering
    /// opposite to travel runs the head into the neck on the same advance.
    Steer(Direction),
    /// No input this tick; keep the current heading.
    Continue,
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Steer(direction)
    }
}
