pub mod agent;
pub mod runner;
pub mod transcript;

pub use agent::{Agent, ConsoleAgent, RandomAgent, StubAgent};
pub use runner::Runner;
pub use transcript::{MoveRecord, Transcript};
