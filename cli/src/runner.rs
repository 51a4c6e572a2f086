use std::io::Write;

use sweeper_core::{GameError, Outcome, PlayEngine};

use crate::{Agent, Transcript};

pub const GAME_OVER_MARKER: &str = "GAME OVER";
pub const WIN_MARKER: &str = "YOU WIN";
pub const ABANDONED_MARKER: &str = "ABANDONED";

/// Drives one game: ask the agent, apply the move, print the move and the resulting view.
pub struct Runner<A, W> {
    engine: PlayEngine,
    agent: A,
    out: W,
}

impl<A: Agent, W: Write> Runner<A, W> {
    pub fn new(engine: PlayEngine, agent: A, out: W) -> Self {
        Self { engine, agent, out }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    /// Plays until a mine is hit, the board is cleared, or the agent gives up.
    pub fn run(&mut self) -> anyhow::Result<Transcript> {
        let mut transcript = Transcript::new(&self.engine);

        loop {
            let Some(coords) = self.agent.decide(self.engine.view())? else {
                log::debug!("Agent gave up after {} moves", transcript.moves.len());
                writeln!(self.out, "{ABANDONED_MARKER}")?;
                break;
            };

            let outcome = match self.engine.reveal(coords) {
                Ok(outcome) => outcome,
                Err(GameError::InvalidCoords) => {
                    log::warn!("Move {:?} is outside the board {:?}", coords, self.engine.size());
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            transcript.record(coords, outcome);

            writeln!(self.out, "{:?}", coords)?;
            write!(self.out, "{}", self.engine.view())?;

            match outcome {
                Outcome::Continue => continue,
                Outcome::GameOver => writeln!(self.out, "{GAME_OVER_MARKER}")?,
                Outcome::Won => writeln!(self.out, "{WIN_MARKER}")?,
            }
            break;
        }

        self.out.flush()?;
        transcript.finish(&self.engine);
        log::info!(
            "Game finished as {:?} after {} moves",
            transcript.state,
            transcript.moves.len()
        );
        Ok(transcript)
    }
}
