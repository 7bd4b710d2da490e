//! Console front end: players and the turn loop.

mod orchestrator;
pub mod players;

pub use orchestrator::Orchestrator;
