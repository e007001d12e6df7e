mod command;
mod controller;
mod ticker;

pub use command::Command;
pub use controller::{RunState, SimulationController, SimulationStats};
pub use ticker::Ticker;
