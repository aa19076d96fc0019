mod board;
pub mod config;
mod error;
mod inputs;
mod pipeline;
mod shell;

pub use board::{BitBoard, Group};
pub use inputs::{InputSource, Inputs, Snapshot};
pub use pipeline::{run, simulate, Simulation};
pub use shell::{write_report, Command, Shell, HELP};
