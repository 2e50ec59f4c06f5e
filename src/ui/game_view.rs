use crate::game::{GameOutcome, Player, Snapshot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    snapshot: &Snapshot,
    selected_column: usize,
    show_hints: bool,
    message: &Option<String>,
) {
    // Selector row above the grid, drop indicator below it.
    let board_rows = snapshot.board.height() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Min(board_rows),    // Board
            Constraint::Length(3),          // Selected-column hint
            Constraint::Length(3),          // Message
            Constraint::Length(3),          // Controls
        ])
        .split(frame.area());

    render_header(frame, snapshot, chunks[0]);
    render_board_area(frame, snapshot, selected_column, show_hints, chunks[1]);
    render_hint(frame, snapshot, selected_column, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let (status, color) = match snapshot.outcome {
        Some(GameOutcome::Winner(player)) => {
            (format!("{} Wins", player.name()), player_color(player))
        }
        Some(GameOutcome::Draw) => ("Draw".to_string(), Color::White),
        None => (
            format!("Current Player: {}", snapshot.current_player.name()),
            player_color(snapshot.current_player),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four Coach"),
        );

    frame.render_widget(header, area);
}

fn render_board_area(
    frame: &mut Frame,
    snapshot: &Snapshot,
    selected_column: usize,
    show_hints: bool,
    area: Rect,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(snapshot.board.height() as u16),
            Constraint::Length(1),
        ])
        .split(area);

    render_selector(frame, snapshot, selected_column, rows[0]);
    super::board_widget::render_board(
        frame,
        &snapshot.board,
        &snapshot.scores,
        show_hints,
        rows[1],
    );
    render_indicator(frame, snapshot, selected_column, rows[2]);
}

/// Column numbers; the selected column is highlighted and full columns are
/// dimmed out.
fn render_selector(frame: &mut Frame, snapshot: &Snapshot, selected_column: usize, area: Rect) {
    let mut spans = Vec::new();
    for col in 0..snapshot.board.width() {
        let label = format!("{:^4}", col + 1);
        let span = if col == selected_column {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
        } else if snapshot.board.is_column_full(col) {
            Span::styled(label, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(label)
        };
        spans.push(span);
    }

    let widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_indicator(frame: &mut Frame, snapshot: &Snapshot, selected_column: usize, area: Rect) {
    let mut spans = Vec::new();
    for col in 0..snapshot.board.width() {
        if col == selected_column {
            spans.push(Span::styled("  \u{25b2} ", Style::default().fg(Color::Cyan)));
        } else {
            spans.push(Span::raw("    "));
        }
    }

    let widget = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Per-player value of the cell the next drop in the selected column would
/// land in.
fn render_hint(frame: &mut Frame, snapshot: &Snapshot, selected_column: usize, area: Rect) {
    let line = match snapshot.board.landing_row(selected_column) {
        Some(row) => Line::from(vec![
            Span::raw("Next piece here is worth  "),
            Span::styled(
                format!(
                    "Red {:>3}",
                    snapshot.scores.get(Player::Red, row, selected_column)
                ),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!(
                    "Yellow {:>3}",
                    snapshot.scores.get(Player::Yellow, row, selected_column)
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from("Column is full"),
    };

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Selected Column"),
        );
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("\u{2190}/\u{2192}: Move  |  Enter: Drop  |  H: Hints  |  R: Restart  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
