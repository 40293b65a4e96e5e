use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one game session.
///
/// The playground dimensions are fixed for the lifetime of the process; they
/// are not exposed on the command line. Both must be at least 3 so the
/// border ring encloses a non-empty interior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playground grid, border ring included
    pub playground_width: usize,
    /// Height of the playground grid, border ring included
    pub playground_height: usize,
    /// Number of segments the snake starts with
    pub initial_snake_length: usize,
    /// Milliseconds between game steps
    pub tick_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playground_width: 20,
            playground_height: 15,
            initial_snake_length: 4,
            tick_interval_ms: 100,
        }
    }
}

impl GameConfig {
    /// A small playground for tests.
    pub fn small() -> Self {
        Self {
            playground_width: 10,
            playground_height: 10,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.playground_width, 20);
        assert_eq!(config.playground_height, 15);
        assert_eq!(config.initial_snake_length, 4);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn small_config_keeps_the_other_defaults() {
        let config = GameConfig::small();
        assert_eq!(config.playground_width, 10);
        assert_eq!(config.playground_height, 10);
        assert_eq!(config.initial_snake_length, 4);
    }
}
