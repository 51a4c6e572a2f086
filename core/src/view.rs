use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCell {
    #[default]
    Hidden,
    Mine,
    Revealed(u8),
}

impl ViewCell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl From<BoardCell> for ViewCell {
    fn from(cell: BoardCell) -> Self {
        match cell {
            BoardCell::Mine => Self::Mine,
            BoardCell::Count(count) => Self::Revealed(count),
        }
    }
}

/// What the player has uncovered so far.
///
/// Cells only ever move away from [`ViewCell::Hidden`], and only to the board's value, so a view
/// never disagrees with the board it was revealed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct View {
    cells: Array2<ViewCell>,
    revealed_count: CellCount,
}

impl View {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            revealed_count: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, columns) = self.cells.dim();
        (rows as Coord, columns as Coord)
    }

    /// Number of safe cells uncovered, a revealed mine is not counted.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn is_hidden(&self, coords: Coord2) -> bool {
        self[coords].is_hidden()
    }

    pub fn iter_hidden(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.is_hidden())
            .map(|((row, column), _)| (row as Coord, column as Coord))
    }

    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }

    /// Copies the board value at `coords` into the view, returns whether the cell was hidden.
    pub(crate) fn uncover(&mut self, board: &Board, coords: Coord2) -> bool {
        let value = ViewCell::from(board[coords]);
        let cell = &mut self.cells[coords.to_nd_index()];
        let was_hidden = cell.is_hidden();
        if was_hidden && value != ViewCell::Mine {
            self.revealed_count += 1;
        }
        *cell = value;
        was_hidden
    }
}

impl Index<Coord2> for View {
    type Output = ViewCell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// One line per row: `.` hidden, `*` mine, digit for a count.
impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                match cell {
                    ViewCell::Hidden => f.write_str(".")?,
                    ViewCell::Mine => f.write_str("*")?,
                    ViewCell::Revealed(count) => write!(f, "{count}")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
