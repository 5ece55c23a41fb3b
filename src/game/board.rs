use super::config::GameConfig;
use super::direction::Direction;

/// A cell on the game grid, in column/row coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fixed-size board whose edges wrap around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cols: i32,
    rows: i32,
    cell_size: i32,
}

impl Board {
    pub fn new(cols: i32, rows: i32, cell_size: i32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            cell_size: cell_size.max(1),
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.board_width / config.cell_size.max(1),
            config.board_height / config.cell_size.max(1),
            config.cell_size,
        )
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }

    /// Check if a cell lies on the board
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }

    /// Bring any cell back onto the board, each axis independently
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.cols), cell.y.rem_euclid(self.rows))
    }

    /// The neighbouring cell in `direction`, wrapping at the edges
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap(cell.moved_by(dx, dy))
    }

    /// Spawn cell in the middle of the board
    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    /// Top-left corner of a cell in logical units
    pub fn to_logical(&self, cell: Cell) -> (i32, i32) {
        (cell.x * self.cell_size, cell.y * self.cell_size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
