use crate::game::{Board, Cell};

use super::palette;

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Drawing surface addressed in logical units
pub trait Canvas {
    /// Paint the whole surface with one colour
    fn fill(&mut self, color: Rgb);

    /// Paint a rectangle and outline it with `border` when `border_width > 0`
    fn draw_filled_rect(
        &mut self,
        origin: (i32, i32),
        size: (i32, i32),
        fill: Rgb,
        border: Rgb,
        border_width: u16,
    );
}

/// What one grid cell of the surface currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub fill: Rgb,
    pub border: Option<Rgb>,
}

impl Slot {
    const BLANK: Slot = Slot {
        fill: palette::BACKGROUND,
        border: None,
    };
}

/// Persistent cell-resolution surface
///
/// Content stays until it is painted over, so callers only redraw what
/// changed between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    cols: i32,
    rows: i32,
    cell_size: i32,
    slots: Vec<Slot>,
}

impl FrameBuffer {
    pub fn new(board: &Board) -> Self {
        Self {
            cols: board.cols(),
            rows: board.rows(),
            cell_size: board.cell_size(),
            slots: vec![Slot::BLANK; board.cell_count()],
        }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn slot(&self, cell: Cell) -> Option<Slot> {
        self.index(cell.x, cell.y).map(|i| self.slots[i])
    }

    /// Slots of one row, left to right
    pub fn row(&self, y: i32) -> &[Slot] {
        if !(0..self.rows).contains(&y) {
            return &[];
        }
        let start = (y * self.cols) as usize;
        &self.slots[start..start + self.cols as usize]
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if (0..self.cols).contains(&x) && (0..self.rows).contains(&y) {
            Some((y * self.cols + x) as usize)
        } else {
            None
        }
    }
}

impl Canvas for FrameBuffer {
    fn fill(&mut self, color: Rgb) {
        self.slots.fill(Slot {
            fill: color,
            border: None,
        });
    }

    fn draw_filled_rect(
        &mut self,
        origin: (i32, i32),
        size: (i32, i32),
        fill: Rgb,
        border: Rgb,
        border_width: u16,
    ) {
        if size.0 <= 0 || size.1 <= 0 {
            return;
        }

        let slot = Slot {
            fill,
            border: (border_width > 0).then_some(border),
        };
        let first_x = origin.0.div_euclid(self.cell_size).max(0);
        let first_y = origin.1.div_euclid(self.cell_size).max(0);
        let last_x = (origin.0 + size.0 - 1).div_euclid(self.cell_size).min(self.cols - 1);
        let last_y = (origin.1 + size.1 - 1).div_euclid(self.cell_size).min(self.rows - 1);

        for y in first_y..=last_y {
            for x in first_x..=last_x {
                if let Some(i) = self.index(x, y) {
                    self.slots[i] = slot;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = FrameBuffer::new(&Board::default());
        assert_eq!(buffer.cols(), 32);
        assert_eq!(buffer.rows(), 24);
        assert_eq!(buffer.slot(Cell::new(31, 23)), Some(Slot::BLANK));
        assert_eq!(buffer.slot(Cell::new(32, 0)), None);
    }

    #[test]
    fn test_rect_maps_to_one_slot() {
        let board = Board::default();
        let mut buffer = FrameBuffer::new(&board);

        buffer.draw_filled_rect(
            board.to_logical(Cell::new(3, 4)),
            (20, 20),
            palette::APPLE,
            palette::BORDER,
            1,
        );

        assert_eq!(
            buffer.slot(Cell::new(3, 4)),
            Some(Slot {
                fill: palette::APPLE,
                border: Some(palette::BORDER),
            })
        );
        assert_eq!(buffer.slot(Cell::new(4, 4)), Some(Slot::BLANK));
        assert_eq!(buffer.slot(Cell::new(3, 5)), Some(Slot::BLANK));
    }

    #[test]
    fn test_rect_is_clipped_to_surface() {
        let board = Board::new(4, 4, 20);
        let mut buffer = FrameBuffer::new(&board);

        buffer.draw_filled_rect((-20, 40), (200, 200), palette::ROCK, palette::ROCK, 0);

        assert_eq!(buffer.slot(Cell::new(0, 1)), Some(Slot::BLANK));
        for x in 0..4 {
            assert_eq!(buffer.slot(Cell::new(x, 2)).unwrap().fill, palette::ROCK);
            assert_eq!(buffer.slot(Cell::new(x, 3)).unwrap().border, None);
        }
    }

    #[test]
    fn test_fill_paints_everything() {
        let board = Board::new(3, 2, 20);
        let mut buffer = FrameBuffer::new(&board);
        buffer.draw_filled_rect((0, 0), (20, 20), palette::SNAKE, palette::BORDER, 1);

        buffer.fill(palette::BACKGROUND);

        assert!(buffer.row(0).iter().all(|&slot| slot == Slot::BLANK));
        assert!(buffer.row(1).iter().all(|&slot| slot == Slot::BLANK));
        assert!(buffer.row(2).is_empty());
    }
}
