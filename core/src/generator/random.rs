use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random generation where only the first move is guaranteed to be safe.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    first_move: Coord2,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, first_move: Coord2) -> Self {
        Self { seed, first_move }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_board(config, self.first_move, &mut rng)
    }
}

/// Lays `config.mines` mines uniformly at random, never on `first_move`.
///
/// All cells are shuffled and the first `config.mines` of the permutation become mines. When
/// `first_move` lands among them it is swapped for the smallest index of the remaining safe cells,
/// so the mine count is unchanged.
pub fn generate_board<R: Rng + ?Sized>(
    config: GameConfig,
    first_move: Coord2,
    rng: &mut R,
) -> Result<Board> {
    config.validate()?;
    let first_move = config.validate_coords(first_move)?;

    let mut order: Vec<CellCount> = (0..config.total_cells()).collect();
    order.shuffle(rng);

    let first_index = linear_index(first_move, config.size);
    let mines = choose_mines(&mut order, config.mines.into(), first_index);

    let board = Board::from_mines(
        config.size,
        mines.iter().map(|&index| from_linear_index(index, config.size)),
    );

    // double check mine count
    if board.mine_count() != config.mines {
        log::warn!(
            "Generated board count mismatch, actual: {}, requested: {}",
            board.mine_count(),
            config.mines
        );
    }
    log::debug!(
        "Generated {}x{} board with {} mines, first move {:?}",
        config.size.0,
        config.size.1,
        board.mine_count(),
        first_move
    );
    Ok(board)
}

/// Splits a permutation into mines and safe cells, relocating the mine under `first_index`.
///
/// `mines` must be smaller than `order.len()`.
fn choose_mines(order: &mut [CellCount], mines: usize, first_index: CellCount) -> &[CellCount] {
    let (mine_part, safe_part) = order.split_at_mut(mines);

    if let Some(slot) = mine_part.iter_mut().find(|index| **index == first_index) {
        if let Some(replacement) = safe_part.iter().copied().min() {
            log::debug!(
                "First move index {} held a mine, moved it to index {}",
                first_index,
                replacement
            );
            *slot = replacement;
        }
    }

    mine_part
}
