use smallvec::SmallVec;

use super::geometry::LineOffsets;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Cell contents of one scan line, in line order.
pub type LineCells = SmallVec<[Cell; 4]>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is out of range")]
    InvalidColumn(usize),
}

/// The piece grid. Row 0 is the top; pieces fall toward the highest-index
/// row. Dimensions are fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// The row a piece dropped in `col` would land in: the lowest empty row.
    /// `None` if the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.cells[row * self.width + col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// All complete lines through `(row, col)`, yielded as the ordered cell
    /// contents of each line. A line that would cross the board edge is
    /// skipped entirely, never truncated, so callers only ever see lines of
    /// the full catalog length.
    pub fn lines_through<'a>(
        &'a self,
        offsets: &'a LineOffsets,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = LineCells> + 'a {
        offsets.lines().iter().filter_map(move |line| {
            let mut cells = LineCells::new();
            for &(d_row, d_col) in line {
                let r = row as i32 + d_row;
                let c = col as i32 + d_col;
                if r < 0 || r >= self.height as i32 || c < 0 || c >= self.width as i32 {
                    return None;
                }
                cells.push(self.get(r as usize, c as usize));
            }
            Some(cells)
        })
    }
}
