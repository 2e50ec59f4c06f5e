use crate::game::{Board, Cell, ScoreTable};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the grid into the given area: colored discs for occupied cells
/// and, when hints are on, the combined positional score of both players in
/// each empty cell. Cells are four characters wide; the selector rows drawn
/// around the grid use the same width to stay aligned.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    scores: &ScoreTable,
    show_hints: bool,
    area: Rect,
) {
    let mut lines = Vec::new();
    for row in 0..board.height() {
        let mut spans = Vec::new();
        for col in 0..board.width() {
            let span = match board.get(row, col) {
                Cell::Red => Span::styled("  \u{25cf} ", Style::default().fg(Color::Red)),
                Cell::Yellow => Span::styled("  \u{25cf} ", Style::default().fg(Color::Yellow)),
                Cell::Empty if show_hints => Span::styled(
                    format!("{:>3} ", scores.total(row, col)),
                    Style::default().fg(Color::DarkGray),
                ),
                Cell::Empty => Span::styled("  . ", Style::default().fg(Color::DarkGray)),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
