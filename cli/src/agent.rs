use std::io::BufRead;

use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use sweeper_core::{Coord, Coord2, View};

/// Decision maker that supplies moves to the game loop.
pub trait Agent {
    /// Picks the next cell to reveal, `None` means the agent gives up.
    fn decide(&mut self, view: &View) -> anyhow::Result<Option<Coord2>>;
}

/// Picks uniformly among the cells that are still hidden.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn decide(&mut self, view: &View) -> anyhow::Result<Option<Coord2>> {
        let hidden: Vec<Coord2> = view.iter_hidden().collect();
        let choice = hidden.choose(&mut self.rng).copied();
        log::trace!("Random pick {:?} out of {} hidden cells", choice, hidden.len());
        Ok(choice)
    }
}

/// Reads `row,col` lines, `q` or end of input stops.
#[derive(Debug)]
pub struct ConsoleAgent<R> {
    input: R,
    line: String,
}

impl<R: BufRead> ConsoleAgent<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
        }
    }
}

impl<R: BufRead> Agent for ConsoleAgent<R> {
    fn decide(&mut self, _view: &View) -> anyhow::Result<Option<Coord2>> {
        loop {
            self.line.clear();
            let read = self
                .input
                .read_line(&mut self.line)
                .context("Failed to read move from input")?;
            if read == 0 {
                return Ok(None);
            }

            let text = self.line.trim();
            match text {
                "" => continue,
                "q" | "quit" | "exit" => return Ok(None),
                _ => {}
            }

            match parse_move(text) {
                Ok(coords) => return Ok(Some(coords)),
                Err(err) => log::warn!("Ignoring {:?}: {:#}", text, err),
            }
        }
    }
}

/// Never makes a move.
#[derive(Copy, Clone, Debug, Default)]
pub struct StubAgent;

impl Agent for StubAgent {
    fn decide(&mut self, _view: &View) -> anyhow::Result<Option<Coord2>> {
        Ok(None)
    }
}

/// Parses `row,col`, whitespace around either number is allowed.
pub fn parse_move(text: &str) -> anyhow::Result<Coord2> {
    let Some((row, column)) = text.split_once(',') else {
        bail!("expected row,col");
    };
    let row: Coord = row.trim().parse().context("invalid row")?;
    let column: Coord = column.trim().parse().context("invalid column")?;
    Ok((row, column))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use sweeper_core::{Board, PlayEngine};

    use super::*;

    fn played_engine() -> PlayEngine {
        // mines on the right column, revealing (0, 0) opens the left two columns
        let board = Board::from_mine_coords((3, 3), &[(0, 2), (1, 2), (2, 2)]).unwrap();
        let mut engine = PlayEngine::with_board(board);
        engine.reveal((0, 0)).unwrap();
        engine
    }

    #[test]
    fn parse_move_accepts_spaced_pairs() {
        assert_eq!(parse_move("2,3").unwrap(), (2, 3));
        assert_eq!(parse_move(" 10 , 0 ").unwrap(), (10, 0));
    }

    #[test]
    fn parse_move_rejects_garbage() {
        assert!(parse_move("2").is_err());
        assert!(parse_move("a,1").is_err());
        assert!(parse_move("1,-1").is_err());
        assert!(parse_move("1,300").is_err());
    }

    #[test]
    fn console_agent_skips_bad_lines() {
        let view = View::new((4, 4));
        let mut agent = ConsoleAgent::new(Cursor::new("\nnope\n1;2\n1,2\n3,0\n"));

        assert_eq!(agent.decide(&view).unwrap(), Some((1, 2)));
        assert_eq!(agent.decide(&view).unwrap(), Some((3, 0)));
        assert_eq!(agent.decide(&view).unwrap(), None);
    }

    #[test]
    fn console_agent_quits_on_command() {
        let view = View::new((4, 4));
        let mut agent = ConsoleAgent::new(Cursor::new("q\n1,1\n"));

        assert_eq!(agent.decide(&view).unwrap(), None);
    }

    #[test]
    fn random_agent_only_picks_hidden_cells() {
        let engine = played_engine();
        let view = engine.view();
        let mut agent = RandomAgent::new(5);

        for _ in 0..50 {
            let coords = agent.decide(view).unwrap().unwrap();
            assert!(view.is_hidden(coords), "picked revealed {coords:?}");
        }
    }

    #[test]
    fn random_agent_reaches_every_hidden_cell() {
        let engine = played_engine();
        let mut agent = RandomAgent::new(11);
        let mut seen = std::collections::BTreeSet::new();

        for _ in 0..200 {
            seen.insert(agent.decide(engine.view()).unwrap().unwrap());
        }

        assert_eq!(seen.into_iter().collect::<Vec<_>>(), [(0, 2), (1, 2), (2, 2)]);
    }

    #[test]
    fn random_agent_yields_without_hidden_cells() {
        let board = Board::from_mine_coords((1, 2), &[]).unwrap();
        let mut engine = PlayEngine::with_board(board);
        engine.reveal((0, 0)).unwrap();
        let mut agent = RandomAgent::new(0);

        assert_eq!(agent.decide(engine.view()).unwrap(), None);
    }

    #[test]
    fn stub_agent_never_moves() {
        assert_eq!(StubAgent.decide(&View::new((2, 2))).unwrap(), None);
    }
}
