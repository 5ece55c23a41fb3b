use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::canvas::{FrameBuffer, Rgb, Slot};
use crate::metrics::SessionStats;

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// Terminal columns used by one board cell
const CELL_COLUMNS: u16 = 2;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Present the frame buffer and the status lines
    pub fn render(&self, frame: &mut Frame, buffer: &FrameBuffer, stats: &SessionStats) {
        let board_width = buffer.cols() as u16 * CELL_COLUMNS + 2;
        let board_height = buffer.rows() as u16 + 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(board_height), // Board
                Constraint::Length(1),            // Stats
                Constraint::Length(1),            // Controls
            ])
            .flex(Flex::Center)
            .split(frame.area());

        let [board_area] = Layout::horizontal([Constraint::Length(board_width)])
            .flex(Flex::Center)
            .areas(chunks[0]);

        frame.render_widget(self.render_board(board_area, buffer), board_area);
        frame.render_widget(self.render_stats(chunks[1], stats), chunks[1]);
        frame.render_widget(self.render_controls(chunks[2]), chunks[2]);
    }

    fn render_board(&self, _area: Rect, buffer: &FrameBuffer) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..buffer.rows())
            .map(|y| Line::from(buffer.row(y).iter().map(slot_span).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, _area: Rect, stats: &SessionStats) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.length.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.best_length.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Resets: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.losses.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Outlined cells read as `[]`, plain ones as a solid block of colour
fn slot_span(slot: &Slot) -> Span<'static> {
    let style = Style::default().bg(slot.fill.into());
    match slot.border {
        Some(border) if border != slot.fill => Span::styled("[]", style.fg(border.into())),
        _ => Span::styled("  ", style),
    }
}
