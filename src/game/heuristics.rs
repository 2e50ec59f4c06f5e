use super::board::{Board, Cell};
use super::geometry::LineOffsets;
use super::player::Player;

/// Score added per friendly piece already sitting in a live line.
const PIECE_WEIGHT: u32 = 6;

/// Per-player positional scores: one grid per player, same shape as the
/// board, fully recomputed after every move. Display aid only; nothing in
/// the engine decides based on these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    width: usize,
    height: usize,
    scores: [Vec<u32>; 2],
}

impl ScoreTable {
    /// Score every cell for both players. A line is live for a player while
    /// it holds no opposing piece; each live line through a cell is worth one
    /// point plus [`PIECE_WEIGHT`] per friendly piece already in it.
    /// Occupied cells are scored like any other; renderers that only
    /// annotate empty cells simply ignore those entries.
    pub fn compute(board: &Board, offsets: &LineOffsets) -> ScoreTable {
        let (width, height) = (board.width(), board.height());
        let mut scores = [vec![0u32; width * height], vec![0u32; width * height]];

        for player in [Player::Red, Player::Yellow] {
            let own = player.to_cell();
            let table = &mut scores[player.index()];
            for row in 0..height {
                for col in 0..width {
                    let mut value = 0;
                    for line in board.lines_through(offsets, row, col) {
                        if line.iter().all(|&c| c == Cell::Empty || c == own) {
                            let in_line = line.iter().filter(|&&c| c == own).count() as u32;
                            value += 1 + in_line * PIECE_WEIGHT;
                        }
                    }
                    table[row * width + col] = value;
                }
            }
        }

        ScoreTable {
            width,
            height,
            scores,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, player: Player, row: usize, col: usize) -> u32 {
        self.scores[player.index()][row * self.width + col]
    }

    /// Combined score of both players: a rough measure of how contested the
    /// cell is.
    pub fn total(&self, row: usize, col: usize) -> u32 {
        self.get(Player::Red, row, col) + self.get(Player::Yellow, row, col)
    }
}
