use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::{Engine, GameOutcome, Snapshot};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    engine: Engine,
    snapshot: Snapshot,
    selected_column: usize,
    show_hints: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        let engine = Engine::new(&config.board)?;
        let snapshot = engine.snapshot();
        let selected_column = config.board.width / 2;
        let show_hints = config.ui.show_hints;
        Ok(App {
            config,
            engine,
            snapshot,
            selected_column,
            show_hints,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('h') => {
                self.show_hints = !self.show_hints;
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    /// A fresh game is a fresh engine; there is no in-place reset.
    fn restart(&mut self) {
        self.engine = Engine::new(&self.config.board).expect("config validated at startup");
        self.snapshot = self.engine.snapshot();
        self.selected_column = self.config.board.width / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        if self.engine.is_terminal() {
            self.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }

        if !self.engine.legal_columns().contains(&self.selected_column) {
            self.message = Some("Column is full!".to_string());
            return;
        }

        self.snapshot = self.engine.play(self.selected_column);
        if let Some(outcome) = self.snapshot.outcome {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) => {
                    format!("{} wins! Press 'r' to play again.", player.name())
                }
                GameOutcome::Draw => "It's a draw! Press 'r' to play again.".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.snapshot,
            self.selected_column,
            self.show_hints,
            &self.message,
        );
    }
}
