use once_cell::sync::Lazy;

/// Number of pieces in a winning line on a standard board.
pub const DEFAULT_LINE_LENGTH: usize = 4;

/// The four scan orientations, as `(d_row, d_col)` unit vectors. Opposite
/// directions are covered by anchor variation, so only one of each pair is
/// listed.
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal down
    (-1, 1), // diagonal up
];

/// Shared catalog for the default line length, built on first use.
static STANDARD: Lazy<LineOffsets> = Lazy::new(|| LineOffsets::new(DEFAULT_LINE_LENGTH));

/// The catalog of every line shape passing through a cell: one offset
/// sequence per (direction, anchor) pair, where the anchor is the position
/// the scanned cell occupies within the line. Every sequence contains
/// `(0, 0)`, since the scanned cell is a member of each of its own lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOffsets {
    line_length: usize,
    lines: Vec<Vec<(i32, i32)>>,
}

impl LineOffsets {
    /// Catalog for the standard four directions.
    pub fn new(line_length: usize) -> Self {
        Self::with_directions(line_length, &DIRECTIONS)
    }

    /// Build the catalog for a direction set. For each direction and each
    /// anchor position `a`, the emitted line covers `line_length` consecutive
    /// cells along the direction, placed so the scanned cell sits at position
    /// `a` within the line.
    pub fn with_directions(line_length: usize, directions: &[(i32, i32)]) -> Self {
        let mut lines = Vec::with_capacity(directions.len() * line_length);
        for anchor in 0..line_length {
            for &(m_row, m_col) in directions {
                let line = (0..line_length)
                    .map(|i| {
                        let k = i as i32 - (line_length as i32 - 1) + anchor as i32;
                        (k * m_row, k * m_col)
                    })
                    .collect();
                lines.push(line);
            }
        }
        LineOffsets { line_length, lines }
    }

    /// The process-wide catalog for [`DEFAULT_LINE_LENGTH`].
    pub fn standard() -> &'static LineOffsets {
        &STANDARD
    }

    pub fn line_length(&self) -> usize {
        self.line_length
    }

    pub fn lines(&self) -> &[Vec<(i32, i32)>] {
        &self.lines
    }
}
