//! CLI subcommand implementations.

pub mod predict;
pub mod train;

pub use predict::PredictCommand;
pub use train::TrainCommand;
