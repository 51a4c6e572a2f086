use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from the first move to a win or loss.
///
/// The board is generated lazily on the first reveal so that move can be kept safe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    config: GameConfig,
    seed: u64,
    board: Option<Board>,
    view: View,
    state: EngineState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            board: None,
            view: View::new(config.size),
            state: Default::default(),
            triggered_mine: None,
        })
    }

    /// Plays on a fixed board instead of generating one.
    pub fn with_board(board: Board) -> Self {
        Self {
            config: board.game_config(),
            seed: 0,
            view: View::new(board.size()),
            board: Some(board),
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    /// `None` until the first move has been played.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn cell_at(&self, coords: Coord2) -> ViewCell {
        self.view[coords]
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<Outcome> {
        let coords = self.config.validate_coords(coords)?;
        self.check_not_finished()?;

        let board: &Board = match self.board {
            Some(ref board) => board,
            None => {
                let board = RandomBoardGenerator::new(self.seed, coords).generate(self.config)?;
                self.board.insert(board)
            }
        };
        let outcome = apply(board, &mut self.view, coords)?;

        match outcome {
            Outcome::Continue => self.mark_started(),
            Outcome::GameOver => {
                self.triggered_mine = Some(coords);
                self.end_game(false);
            }
            Outcome::Won => self.end_game(true),
        }
        Ok(outcome)
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            self.state = EngineState::Active;
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won {
            EngineState::Won
        } else {
            EngineState::Lost
        };
        log::debug!("Game ended: {:?}", self.state);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
