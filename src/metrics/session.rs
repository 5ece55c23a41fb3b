use std::time::{Duration, Instant};

use crate::game::TickReport;

/// Running statistics for one play session
pub struct SessionStats {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    /// Length the snake is currently growing towards
    pub length: usize,
    /// Longest snake of the session
    pub best_length: usize,
    /// Number of runs that ended on the snake itself or the rock
    pub losses: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            length: 1,
            best_length: 1,
            losses: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_tick(&mut self, report: &TickReport) {
        self.best_length = self.best_length.max(report.length);
        if report.event.is_loss() {
            self.losses += 1;
            self.length = 1;
        } else {
            self.length = report.length;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
