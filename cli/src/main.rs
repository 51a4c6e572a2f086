use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sweeper_cli::{Agent, ConsoleAgent, RandomAgent, Runner, StubAgent, Transcript};
use sweeper_core::{CellCount, Coord, GameConfig, PlayEngine};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    /// Reveal a uniformly random hidden cell
    Random,
    /// Read `row,col` moves from stdin
    Console,
    /// Never move
    Stub,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.0)]
    rows: Coord,

    /// Number of columns
    #[arg(long, default_value_t = GameConfig::DEFAULT_SIZE.1)]
    columns: Coord,

    /// Number of mines, must leave at least one safe cell
    #[arg(long, default_value_t = GameConfig::DEFAULT_MINES)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Who picks the moves
    #[arg(short, long, value_enum, default_value_t = AgentKind::Random)]
    agent: AgentKind,

    /// Write a JSON transcript of the game to this path
    #[arg(short, long)]
    transcript: Option<PathBuf>,
}

fn play<A: Agent>(engine: PlayEngine, agent: A, out: impl Write) -> anyhow::Result<Transcript> {
    Runner::new(engine, agent, out).run()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new((args.rows, args.columns), args.mines)
        .context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);
    log::debug!("config: {:?}, agent: {:?}", config, args.agent);

    let engine = PlayEngine::new(config, seed)?;
    let out = io::stdout().lock();
    let transcript = match args.agent {
        // separate stream from the one that lays the mines
        AgentKind::Random => play(engine, RandomAgent::new(seed.rotate_left(32)), out)?,
        AgentKind::Console => play(engine, ConsoleAgent::new(io::stdin().lock()), out)?,
        AgentKind::Stub => play(engine, StubAgent, out)?,
    };

    if let Some(path) = &args.transcript {
        transcript.write_json(path)?;
    }
    Ok(())
}
