use std::time::{Duration, Instant};

/// Play statistics across the runs of one session.
pub struct SessionMetrics {
    started: Instant,
    pub games_played: u32,
    pub high_score: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            games_played: 0,
            high_score: 0,
        }
    }

    /// Time since the current run started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn on_game_start(&mut self) {
        self.started = Instant::now();
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Elapsed time as an `mm:ss` clock for the score line.
    pub fn clock(&self) -> String {
        format_clock(self.elapsed())
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

pub fn format_clock(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(Duration::from_secs(0)), "00:00");
        assert_eq!(format_clock(Duration::from_secs(125)), "02:05");
        assert_eq!(format_clock(Duration::from_secs(3661)), "61:01");
    }

    #[test]
    fn high_score_never_decreases() {
        let mut metrics = SessionMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 2);

        metrics.on_game_over(15);
        assert_eq!(metrics.high_score, 15);
    }

    #[test]
    fn game_start_rewinds_the_clock() {
        let mut metrics = SessionMetrics::new();
        std::thread::sleep(Duration::from_millis(30));
        assert!(metrics.elapsed().as_millis() >= 30);

        metrics.on_game_start();
        assert!(metrics.elapsed().as_millis() < 30);
    }
}
