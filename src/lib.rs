mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod player;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
