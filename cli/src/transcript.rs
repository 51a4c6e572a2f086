use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sweeper_core::{Coord2, EngineState, GameConfig, Outcome, PlayEngine};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub coords: Coord2,
    pub outcome: Outcome,
}

/// Everything needed to replay a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub config: GameConfig,
    pub seed: u64,
    pub moves: Vec<MoveRecord>,
    pub state: EngineState,
    /// Empty when no move was played, the board is only laid on the first move.
    pub mines: Vec<Coord2>,
}

impl Transcript {
    pub fn new(engine: &PlayEngine) -> Self {
        Self {
            config: engine.config(),
            seed: engine.seed(),
            moves: Vec::new(),
            state: engine.state(),
            mines: Vec::new(),
        }
    }

    pub fn record(&mut self, coords: Coord2, outcome: Outcome) {
        self.moves.push(MoveRecord { coords, outcome });
    }

    pub fn finish(&mut self, engine: &PlayEngine) {
        self.state = engine.state();
        self.mines = engine
            .board()
            .map(|board| board.iter_mines().collect())
            .unwrap_or_default();
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create transcript {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).context("Failed to serialize transcript")?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        log::info!("Transcript written to {}", path.display());
        Ok(())
    }
}
