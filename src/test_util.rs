// Test utilities shared by unit tests and the integration tests in the "tests" folder.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::Game;


// In theory random tests verify properties that should always hold, but let's fix the seed to
// avoid sporadic failures.
pub fn deterministic_rng() -> impl Rng { StdRng::from_seed([0; 32]) }

// For tests that sweep over many draws.
pub fn seeded_rng(seed: u64) -> StdRng { StdRng::seed_from_u64(seed) }

pub fn no_exclusions(players: &[&str]) -> Vec<(String, Vec<String>)> {
    players.iter().map(|&p| (p.to_owned(), Vec::new())).collect()
}

pub fn open_game(id: &str, players: &[&str]) -> Game { Game::new(id, no_exclusions(players)) }

// Two rounds: in the first one Alice and Bob are not allowed to draw each other.
pub fn sample_batch() -> Vec<Game> {
    vec![
        Game::new("G1", [
            ("Alice", vec!["Bob"]),
            ("Bob", vec!["Alice"]),
            ("Carol", vec![]),
            ("Dave", vec![]),
        ]),
        open_game("G2", &["Alice", "Bob", "Carol", "Dave"]),
    ]
}
