//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{ReplayConfig, ReplayResult, RowOutcome, replay_game};
pub use simple::run_simple;
