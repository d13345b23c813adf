mod constants;
mod game_state;
mod ranking;
mod snake;

pub mod util;

pub use constants::*;
pub use game_state::*;
pub use ranking::*;
pub use snake::*;
pub use util::PseudoRandom;
