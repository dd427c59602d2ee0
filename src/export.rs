// Renders finished games. Players without a selection are left out.

use serde::Serialize;

use crate::game::Game;


#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct SelectionRecord<'a> {
    pub player: &'a str,
    pub selection: &'a str,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct GameRecord<'a> {
    pub id: &'a str,
    pub selections: Vec<SelectionRecord<'a>>,
}

impl<'a> From<&'a Game> for GameRecord<'a> {
    fn from(game: &'a Game) -> Self {
        GameRecord {
            id: game.id(),
            selections: game
                .selections()
                .map(|(player, selection)| SelectionRecord { player, selection })
                .collect(),
        }
    }
}

// Game ID on its own line, then a tab-indented `<player>\t<selection>` line per player.
pub fn export_text(games: &[Game]) -> String {
    let mut text = String::new();
    for game in games {
        text.push_str(game.id());
        text.push('\n');
        for (player, selection) in game.selections() {
            text.push_str(&format!("\t{player}\t{selection}\n"));
        }
    }
    text
}

pub fn export_json(games: &[Game]) -> serde_json::Result<String> {
    let records: Vec<GameRecord> = games.iter().map(GameRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
