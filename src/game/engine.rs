use smallvec::SmallVec;

use crate::config::BoardConfig;
use crate::error::ConfigError;

use super::board::Board;
use super::geometry::{LineOffsets, DEFAULT_LINE_LENGTH};
use super::heuristics::ScoreTable;
use super::player::Player;

/// Columns currently open for a drop.
pub type LegalActions = SmallVec<[usize; 8]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A renderable view of one moment of the game: grid contents, both score
/// grids, whose turn it is, and the outcome if the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub scores: ScoreTable,
    pub current_player: Player,
    pub outcome: Option<GameOutcome>,
}

/// The game engine. Owns the grid, the turn order, the outcome, and the
/// score table; everything else reads snapshots. One instance is one game —
/// starting over means constructing a new engine.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    offsets: LineOffsets,
    current_player: Player,
    outcome: Option<GameOutcome>,
    scores: ScoreTable,
}

impl Engine {
    /// Build a fresh game: empty grid, Red to move, scores computed for the
    /// empty position. The configuration is validated before any state is
    /// created.
    pub fn new(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height);
        let offsets = if config.line_length == DEFAULT_LINE_LENGTH {
            LineOffsets::standard().clone()
        } else {
            LineOffsets::new(config.line_length)
        };
        let scores = ScoreTable::compute(&board, &offsets);
        Ok(Engine {
            board,
            offsets,
            current_player: Player::Red,
            outcome: None,
            scores,
        })
    }

    /// Standard 7-wide, 6-tall game with four in a row to win.
    pub fn with_defaults() -> Self {
        Self::new(&BoardConfig::default()).expect("default board config is valid")
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// Get list of legal columns (not full); empty once the game is over.
    pub fn legal_columns(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece in `column`.
    ///
    /// An illegal request — game already over, column out of range, column
    /// full — changes nothing and returns the unchanged snapshot. In the UI
    /// this corresponds to clicking a dead column, which is expected and
    /// harmless, so no error surfaces from here.
    pub fn play(&mut self, column: usize) -> Snapshot {
        if self.is_terminal() {
            return self.snapshot();
        }

        let row = match self.board.drop_piece(column, self.current_player.to_cell()) {
            Ok(row) => row,
            Err(_) => return self.snapshot(),
        };

        if self.has_winning_line(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.other();
        }

        self.scores = ScoreTable::compute(&self.board, &self.offsets);
        self.snapshot()
    }

    /// Whether the piece just placed at `(row, col)` completed a line: every
    /// member of some line through the cell equals the mover's piece. A
    /// live-but-incomplete line never counts here.
    fn has_winning_line(&self, row: usize, col: usize) -> bool {
        let piece = self.current_player.to_cell();
        self.board
            .lines_through(&self.offsets, row, col)
            .any(|line| line.iter().all(|&c| c == piece))
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            scores: self.scores.clone(),
            current_player: self.current_player,
            outcome: self.outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn engine_with(width: usize, height: usize, line_length: usize) -> Engine {
        Engine::new(&BoardConfig {
            width,
            height,
            line_length,
        })
        .unwrap()
    }

    fn piece_count(engine: &Engine) -> usize {
        let board = engine.board();
        (0..board.height())
            .flat_map(|row| (0..board.width()).map(move |col| board.get(row, col)))
            .filter(|&c| c != Cell::Empty)
            .count()
    }

    #[test]
    fn test_initial_state() {
        let engine = Engine::with_defaults();
        assert_eq!(engine.current_player(), Player::Red);
        assert!(!engine.is_terminal());
        assert_eq!(engine.legal_columns().len(), 7);
    }

    #[test]
    fn test_rejects_invalid_dimensions() {
        assert!(Engine::new(&BoardConfig {
            width: 0,
            height: 6,
            line_length: 4,
        })
        .is_err());
        assert!(Engine::new(&BoardConfig {
            width: 7,
            height: 6,
            line_length: 1,
        })
        .is_err());
    }

    #[test]
    fn test_play_lands_at_bottom_and_toggles_player() {
        let mut engine = Engine::with_defaults();
        let snapshot = engine.play(3);

        assert_eq!(snapshot.board.get(5, 3), Cell::Red);
        assert_eq!(snapshot.current_player, Player::Yellow);
        assert_eq!(snapshot.outcome, None);
    }

    #[test]
    fn test_gravity_never_leaves_gaps() {
        let mut engine = Engine::with_defaults();
        for column in [3, 3, 3, 0, 3, 1] {
            engine.play(column);
        }

        let board = engine.board();
        for col in 0..board.width() {
            let mut seen_piece = false;
            for row in 0..board.height() {
                let occupied = board.get(row, col) != Cell::Empty;
                // Once a column has a piece, everything below is occupied.
                assert!(!seen_piece || occupied);
                seen_piece = seen_piece || occupied;
            }
        }
    }

    #[test]
    fn test_piece_count_matches_successful_moves() {
        let mut engine = Engine::with_defaults();
        engine.play(0);
        engine.play(1);
        engine.play(99); // out of range, rejected
        engine.play(2);
        assert_eq!(piece_count(&engine), 3);
    }

    #[test]
    fn test_illegal_moves_are_idempotent_no_ops() {
        let mut engine = engine_with(7, 6, 4);
        for _ in 0..6 {
            engine.play(0);
        }
        let before = engine.snapshot();

        for _ in 0..5 {
            assert_eq!(engine.play(0), before); // column full
            assert_eq!(engine.play(7), before); // out of range
        }
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_vertical_win() {
        // Red stacks column 3 while Yellow plays column 0 in between; Red's
        // fourth piece completes the vertical line.
        let mut engine = Engine::with_defaults();
        for _ in 0..3 {
            engine.play(3); // Red
            engine.play(0); // Yellow
        }
        let snapshot = engine.play(3);

        assert_eq!(snapshot.outcome, Some(GameOutcome::Winner(Player::Red)));
        // The winner stays the current player once the game ends.
        assert_eq!(snapshot.current_player, Player::Red);
        assert!(engine.legal_columns().is_empty());
    }

    #[test]
    fn test_horizontal_win() {
        let mut engine = Engine::with_defaults();
        for col in 0..3 {
            engine.play(col); // Red
            engine.play(col); // Yellow on top
        }
        let snapshot = engine.play(3);

        assert_eq!(snapshot.outcome, Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut engine = Engine::with_defaults();
        // Build a staircase: Red at heights 1, 2, 3, 4 across columns 0-3.
        for column in [0, 1, 1, 2, 3, 2, 2, 3, 3, 5] {
            engine.play(column);
        }
        assert!(!engine.is_terminal());
        let snapshot = engine.play(3);

        assert_eq!(snapshot.outcome, Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut engine = Engine::with_defaults();
        for column in [6, 5, 5, 4, 3, 4, 4, 3, 3, 1] {
            engine.play(column);
        }
        assert!(!engine.is_terminal());
        let snapshot = engine.play(3);

        assert_eq!(snapshot.outcome, Some(GameOutcome::Winner(Player::Red)));
    }

    #[test]
    fn test_three_in_a_row_does_not_win() {
        let mut engine = Engine::with_defaults();
        for col in 0..3 {
            engine.play(col); // Red
            engine.play(col); // Yellow
        }
        assert!(!engine.is_terminal());
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut engine = Engine::with_defaults();
        for _ in 0..3 {
            engine.play(3);
            engine.play(0);
        }
        let won = engine.play(3);
        assert_eq!(won.outcome, Some(GameOutcome::Winner(Player::Red)));

        let after = engine.play(1);
        assert_eq!(after, won);
        assert_eq!(piece_count(&engine), 7);
    }

    #[test]
    fn test_draw_on_unwinnable_board() {
        // 3 wide, 2 tall with four to win: no line fits, so filling the
        // board can only draw.
        let mut engine = engine_with(3, 2, 4);
        let mut last = engine.snapshot();
        for column in [0, 1, 2, 0, 1, 2] {
            assert_eq!(last.outcome, None);
            last = engine.play(column);
        }
        assert_eq!(last.outcome, Some(GameOutcome::Draw));
    }

    #[test]
    fn test_full_game_draw() {
        // Hand-verified drawn game. Columns 0-5 are filled in pairs with an
        // RRYY stacking per column (offset between the columns of a pair),
        // which caps every run at three; column 6 alternates to balance the
        // move parity. The final grid holds 21 pieces per player and no
        // complete line.
        let moves = [
            0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0, 1, //
            2, 3, 2, 3, 3, 2, 3, 2, 2, 3, 2, 3, //
            4, 5, 4, 5, 5, 4, 5, 4, 4, 5, 4, 5, //
            6, 6, 6, 6, 6, 6,
        ];

        let mut engine = Engine::with_defaults();
        for (i, &column) in moves.iter().enumerate() {
            assert!(!engine.is_terminal(), "game ended early at move {i}");
            engine.play(column);
        }

        assert_eq!(piece_count(&engine), 42);
        assert!(engine.board().is_full());
        assert_eq!(engine.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_scores_recomputed_after_move() {
        let mut engine = Engine::with_defaults();
        let initial = engine.snapshot();
        assert_eq!(initial.scores.get(Player::Red, 5, 3), 7);

        let snapshot = engine.play(3);
        // Every line through the placed red piece is now dead for Yellow and
        // strengthened for Red.
        assert_eq!(snapshot.scores.get(Player::Yellow, 5, 3), 0);
        assert_eq!(snapshot.scores.get(Player::Red, 5, 3), 49);
    }

    #[test]
    fn test_scores_recomputed_on_game_ending_move() {
        let mut engine = Engine::with_defaults();
        for _ in 0..3 {
            engine.play(3);
            engine.play(0);
        }
        let snapshot = engine.play(3);

        assert_eq!(snapshot.outcome, Some(GameOutcome::Winner(Player::Red)));
        // The table reflects the final grid, not the position before the
        // winning drop.
        assert_eq!(snapshot.scores, ScoreTable::compute(engine.board(), &engine.offsets));
    }
}
