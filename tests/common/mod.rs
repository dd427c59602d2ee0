// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::collections::{HashMap, HashSet};

use gift_draw::{Game, GameStatus};


// Checks a successfully drawn batch against the games as they were loaded: everybody has exactly
// one selection, nobody drew themselves or somebody they excluded, and nobody drew the same
// person twice across the batch.
#[allow(dead_code)]
pub fn verify_batch(loaded: &[Game], drawn: &[Game]) {
    assert_eq!(loaded.len(), drawn.len());
    let mut previous: HashMap<&str, HashSet<&str>> = HashMap::new();
    for (before, after) in loaded.iter().zip(drawn) {
        assert_eq!(before.id(), after.id());
        assert_eq!(before.players(), after.players());
        assert_eq!(after.status(), GameStatus::Complete);
        let mut targets = HashSet::new();
        for player in after.players() {
            let selection = after.selection(player).unwrap();
            assert_ne!(selection, player, "{} drew themselves in {}", player, after.id());
            assert!(after.has_player(selection));
            assert!(!before.is_excluded(player, selection));
            assert!(!after.is_excluded(player, selection));
            assert!(
                !previous.get(player.as_str()).is_some_and(|p| p.contains(selection)),
                "{} drew {} again in {}",
                player,
                selection,
                after.id()
            );
            assert!(targets.insert(selection), "{} was drawn twice in {}", selection, after.id());
        }
        for (player, selection) in after.selections() {
            previous.entry(player).or_default().insert(selection);
        }
    }
}
