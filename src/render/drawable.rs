use crate::game::{Apple, Board, Cell, Rock, Snake};

use super::canvas::{Canvas, Rgb};
use super::palette;

/// Something that knows how to paint itself onto a [`Canvas`]
pub trait Drawable {
    fn draw(&self, board: &Board, canvas: &mut dyn Canvas);
}

fn draw_cell(
    board: &Board,
    canvas: &mut dyn Canvas,
    cell: Cell,
    fill: Rgb,
    border: Rgb,
    border_width: u16,
) {
    let size = board.cell_size();
    canvas.draw_filled_rect(board.to_logical(cell), (size, size), fill, border, border_width);
}

impl Drawable for Apple {
    fn draw(&self, board: &Board, canvas: &mut dyn Canvas) {
        draw_cell(board, canvas, self.position, palette::APPLE, palette::BORDER, 1);
    }
}

impl Drawable for Rock {
    fn draw(&self, board: &Board, canvas: &mut dyn Canvas) {
        draw_cell(board, canvas, self.position, palette::ROCK, palette::ROCK, 1);
    }
}

impl Drawable for Snake {
    /// Body first, head last
    fn draw(&self, board: &Board, canvas: &mut dyn Canvas) {
        for &cell in self.body().skip(1) {
            draw_cell(board, canvas, cell, palette::SNAKE, palette::BORDER, 1);
        }
        draw_cell(board, canvas, self.head(), palette::SNAKE, palette::BORDER, 1);
    }
}

/// Paint the cell the tail just left with the background colour
pub fn erase_vacated(snake: &Snake, board: &Board, canvas: &mut dyn Canvas) {
    if let Some(cell) = snake.last_removed() {
        draw_cell(
            board,
            canvas,
            cell,
            palette::BACKGROUND,
            palette::BACKGROUND,
            0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Game, GameConfig};
    use crate::render::{FrameBuffer, Slot};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Canvas that records every call
    #[derive(Default)]
    struct Recorder {
        rects: Vec<((i32, i32), Rgb)>,
        fills: Vec<Rgb>,
    }

    impl Canvas for Recorder {
        fn fill(&mut self, color: Rgb) {
            self.fills.push(color);
        }

        fn draw_filled_rect(
            &mut self,
            origin: (i32, i32),
            _size: (i32, i32),
            fill: Rgb,
            _border: Rgb,
            _border_width: u16,
        ) {
            self.rects.push((origin, fill));
        }
    }

    #[test]
    fn test_snake_draws_body_then_head() {
        let board = Board::default();
        let snake = Snake::from_segments(
            [Cell::new(3, 1), Cell::new(2, 1), Cell::new(1, 1)],
            Direction::Right,
        )
        .unwrap();
        let mut recorder = Recorder::default();

        snake.draw(&board, &mut recorder);

        let origins: Vec<(i32, i32)> = recorder.rects.iter().map(|(origin, _)| *origin).collect();
        assert_eq!(origins, vec![(40, 20), (20, 20), (60, 20)]);
        assert!(recorder.rects.iter().all(|(_, fill)| *fill == palette::SNAKE));
    }

    #[test]
    fn test_items_use_their_colours() {
        let board = Board::default();
        let mut recorder = Recorder::default();

        Apple::new(Cell::new(1, 2)).draw(&board, &mut recorder);
        Rock::new(Cell::new(2, 3)).draw(&board, &mut recorder);

        assert_eq!(
            recorder.rects,
            vec![((20, 40), palette::APPLE), ((40, 60), palette::ROCK)]
        );
    }

    #[test]
    fn test_vacated_tail_is_erased() {
        let board = Board::default();
        let mut buffer = FrameBuffer::new(&board);
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        snake.draw(&board, &mut buffer);
        snake.advance(&board);
        erase_vacated(&snake, &board, &mut buffer);
        snake.draw(&board, &mut buffer);

        assert_eq!(
            buffer.slot(Cell::new(5, 5)),
            Some(Slot {
                fill: palette::BACKGROUND,
                border: None,
            })
        );
        assert_eq!(buffer.slot(Cell::new(6, 5)).unwrap().fill, palette::SNAKE);
    }

    #[test]
    fn test_game_draw_shows_every_entity() {
        let config = GameConfig::default();
        let mut game = Game::new(&config, StdRng::seed_from_u64(21)).unwrap();
        let mut buffer = FrameBuffer::new(game.board());
        let mut recorder = Recorder::default();

        game.draw(&mut recorder);
        assert_eq!(recorder.fills, vec![palette::BACKGROUND]);

        game.draw(&mut buffer);
        let apple = game.apple().position;
        let rock = game.rock().unwrap().position;
        assert_eq!(buffer.slot(apple).unwrap().fill, palette::APPLE);
        assert_eq!(buffer.slot(rock).unwrap().fill, palette::ROCK);
        assert_eq!(
            buffer.slot(game.snake().head()).unwrap().fill,
            palette::SNAKE
        );

        // The background is only cleared once after a reset
        let mut recorder = Recorder::default();
        game.draw(&mut recorder);
        assert!(recorder.fills.is_empty());
    }
}
