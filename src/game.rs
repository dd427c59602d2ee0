use std::collections::{HashMap, HashSet};

use crate::internal_error;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    // Fresh from the loader, nobody has a selection yet.
    Loaded,
    // Some players have a selection, some don't. Only observable if the batch failed halfway
    // through this game.
    Assigning,
    Complete,
}

// One round of the draw. Players are kept in input order, so iterating over a game is
// deterministic: the same input and the same RNG seed always give the same result.
#[derive(Clone, Debug)]
pub struct Game {
    id: String,
    players: Vec<String>,
    // Has an entry for every player, and only for players.
    exclusions: HashMap<String, HashSet<String>>,
    selections: HashMap<String, String>,
}

impl Game {
    // Builds a game from `(player, exclusions)` rows. If a player appears more than once, it keeps
    // its first position and the last row's exclusions.
    pub fn new<P, E>(id: impl Into<String>, rows: impl IntoIterator<Item = (P, E)>) -> Self
    where
        P: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let mut players = Vec::new();
        let mut exclusions = HashMap::new();
        for (player, excluded) in rows {
            let player = player.into();
            let excluded = excluded.into_iter().map(Into::into).collect();
            if exclusions.insert(player.clone(), excluded).is_none() {
                players.push(player);
            }
        }
        Game {
            id: id.into(),
            players,
            exclusions,
            selections: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn players(&self) -> &[String] { &self.players }
    pub fn has_player(&self, player: &str) -> bool { self.exclusions.contains_key(player) }

    pub fn exclusions(&self, player: &str) -> Option<&HashSet<String>> {
        self.exclusions.get(player)
    }

    pub fn is_excluded(&self, player: &str, target: &str) -> bool {
        player == target || self.exclusions.get(player).is_some_and(|ex| ex.contains(target))
    }

    pub fn selection(&self, player: &str) -> Option<&str> {
        self.selections.get(player).map(String::as_str)
    }

    // `(player, selection)` pairs in player order. Players without a selection are skipped.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.players
            .iter()
            .filter_map(|p| self.selection(p).map(|s| (p.as_str(), s)))
    }

    pub fn status(&self) -> GameStatus {
        // A game without players has nothing to assign.
        if self.selections.len() == self.players.len() {
            GameStatus::Complete
        } else if self.selections.is_empty() {
            GameStatus::Loaded
        } else {
            GameStatus::Assigning
        }
    }

    // Returns whether the exclusion is new. Unknown players are ignored: they cannot draw anybody
    // in this game anyway.
    pub(crate) fn add_exclusion(&mut self, player: &str, target: &str) -> bool {
        match self.exclusions.get_mut(player) {
            Some(ex) => ex.insert(target.to_owned()),
            None => false,
        }
    }

    pub(crate) fn set_selection(&mut self, player: &str, target: &str) {
        if !self.has_player(player) {
            internal_error!("{player} is not a player in game {}", self.id);
        }
        if let Some(prev) = self.selections.insert(player.to_owned(), target.to_owned()) {
            internal_error!("{player} already selected {prev} in game {}", self.id);
        }
    }
}
