// The draw itself.
//
// Each player in turn picks uniformly at random among the players that are still available to
// them. This is greedy: a dead end fails the whole batch, even if a different choice for an
// earlier player would have worked. There is no retry and no backtracking.

use std::collections::{HashMap, HashSet};
use std::{error, fmt};

use itertools::Itertools;
use log::{debug, info, trace};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::game::Game;


#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AssignError {
    NoAvailableOptions { game_id: String, player: String },
}

impl fmt::Display for AssignError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AssignError::NoAvailableOptions { game_id, player } => {
                write!(f, "No available options for player {player} in game {game_id}")
            }
        }
    }
}

impl error::Error for AssignError {}

// Everybody each player has drawn in the games processed so far. Carried from one game to the
// next so that nobody gets the same person twice in a batch.
#[derive(Clone, Debug, Default)]
pub struct PairingHistory {
    previous: HashMap<String, Vec<String>>,
}

impl PairingHistory {
    pub fn new() -> Self { Self::default() }

    pub fn previous_selections(&self, player: &str) -> &[String] {
        self.previous.get(player).map(Vec::as_slice).unwrap_or(&[])
    }

    // Excludes previous selections from the upcoming game. Only players of that game are
    // affected.
    pub fn apply_to(&self, game: &mut Game) {
        for (player, targets) in &self.previous {
            for target in targets {
                if game.add_exclusion(player, target) {
                    debug!("Game {}: {} may not draw {} again", game.id(), player, target);
                }
            }
        }
    }

    pub fn record(&mut self, game: &Game) {
        for (player, selection) in game.selections() {
            self.previous.entry(player.to_owned()).or_default().push(selection.to_owned());
        }
    }
}

pub fn assign_game(game: &mut Game, rng: &mut impl Rng) -> Result<(), AssignError> {
    let players = game.players().to_vec();
    let mut taken = HashSet::new();
    for player in &players {
        let options = players
            .iter()
            .filter(|&o| !game.is_excluded(player, o) && !taken.contains(o))
            .collect_vec();
        let Some(&choice) = options.choose(rng) else {
            return Err(AssignError::NoAvailableOptions {
                game_id: game.id().to_owned(),
                player: player.clone(),
            });
        };
        trace!("Game {}: {} drew {} out of {} options", game.id(), player, choice, options.len());
        game.set_selection(player, choice);
        taken.insert(choice);
    }
    Ok(())
}

// Runs the draw for every game in order. Stops at the first dead end; games before it keep their
// selections.
pub fn assign_games(games: &mut [Game], rng: &mut impl Rng) -> Result<(), AssignError> {
    let mut history = PairingHistory::new();
    for game in games.iter_mut() {
        history.apply_to(game);
        assign_game(game, rng)?;
        history.record(game);
        info!("Assigned game {} ({} players)", game.id(), game.players().len());
    }
    Ok(())
}
