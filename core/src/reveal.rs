use alloc::collections::VecDeque;

use crate::*;

/// Applies one move to `view` using the ground truth in `board`.
///
/// Revealing a mine shows it and ends the game. Revealing a zero flood-fills the connected zero
/// region together with its numbered border. Anything else reveals the single cell. Input is
/// validated before the view is touched, so a move either fully applies or not at all.
pub fn apply(board: &Board, view: &mut View, coords: Coord2) -> Result<Outcome> {
    if view.size() != board.size() {
        return Err(GameError::InvalidBoardShape);
    }
    let coords = board.validate_coords(coords)?;

    match board[coords] {
        BoardCell::Mine => {
            view.uncover(board, coords);
            log::debug!("Hit mine at {:?}", coords);
            return Ok(Outcome::GameOver);
        }
        BoardCell::Count(0) => flood_fill(board, view, coords),
        BoardCell::Count(count) => {
            view.uncover(board, coords);
            log::debug!("Revealed {:?}, mine count: {}", coords, count);
        }
    }

    if view.revealed_count() == board.safe_cell_count() {
        log::debug!("All {} safe cells revealed", board.safe_cell_count());
        Ok(Outcome::Won)
    } else {
        Ok(Outcome::Continue)
    }
}

/// Breadth-first reveal starting at a zero cell.
///
/// A popped cell only expands while it is still hidden, so each cell expands at most once.
fn flood_fill(board: &Board, view: &mut View, seed: Coord2) {
    let mut to_visit = VecDeque::from([seed]);
    log::trace!("Starting flood-fill from {:?}", seed);

    while let Some(visit_coords) = to_visit.pop_front() {
        if board[visit_coords] == BoardCell::Count(0) && view.is_hidden(visit_coords) {
            to_visit.extend(
                board
                    .iter_neighbors(visit_coords)
                    .filter(|&pos| view.is_hidden(pos)),
            );
        }

        if view.uncover(board, visit_coords) {
            log::trace!("Flood opened {:?}", visit_coords);
        }
    }
}
