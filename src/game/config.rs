use std::time::Duration;

/// Configuration for the game
///
/// The shipped game always runs with [`GameConfig::default`]; the other
/// constructors exist so the rules can be exercised on smaller boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the board in logical units
    pub board_width: i32,
    /// Height of the board in logical units
    pub board_height: i32,
    /// Side of one square cell in logical units
    pub cell_size: i32,
    /// Game ticks per second
    pub tick_rate_hz: u32,
    /// Whether a rock is placed on the board
    pub obstacle: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 640,
            board_height: 480,
            cell_size: 20,
            tick_rate_hz: 20,
            obstacle: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom number of cells
    pub fn grid(cols: i32, rows: i32) -> Self {
        let defaults = Self::default();
        Self {
            board_width: cols * defaults.cell_size,
            board_height: rows * defaults.cell_size,
            ..defaults
        }
    }

    /// Same board, without the rock
    pub fn without_obstacle(self) -> Self {
        Self {
            obstacle: false,
            ..self
        }
    }

    /// Time between two game ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_width, 640);
        assert_eq!(config.board_height, 480);
        assert_eq!(config.cell_size, 20);
        assert!(config.obstacle);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(
            GameConfig::default().tick_interval(),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_custom_grid() {
        let config = GameConfig::grid(3, 3).without_obstacle();
        assert_eq!(config.board_width, 60);
        assert_eq!(config.board_height, 60);
        assert!(!config.obstacle);
    }
}
