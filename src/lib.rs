#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod assigner;
pub mod error;
pub mod export;
pub mod game;
pub mod loader;
pub mod test_util;

pub use assigner::{AssignError, PairingHistory, assign_game, assign_games};
pub use game::{Game, GameStatus};
pub use loader::{LoadError, ReadError, load_game, load_games, read_game};
