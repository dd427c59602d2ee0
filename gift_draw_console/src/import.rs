use std::path::PathBuf;

use anyhow::Context;
use gift_draw::export::{export_json, export_text};
use gift_draw::{Game, assign_games, load_games};
use rand::SeedableRng;
use rand::rngs::StdRng;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct ImportConfig {
    pub paths: Vec<PathBuf>,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

pub fn run(config: ImportConfig) -> anyhow::Result<()> {
    if config.paths.is_empty() {
        println!("No file(s) specified!");
        return Ok(());
    }
    let games = draw(&config)?;
    print!("{}", render(&games, config.format)?);
    Ok(())
}

// Loads every file before drawing anything. Nothing is returned unless the whole batch succeeded.
fn draw(config: &ImportConfig) -> anyhow::Result<Vec<Game>> {
    let mut games = load_games(&config.paths)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    assign_games(&mut games, &mut rng).context("Draw failed, try again")?;
    Ok(games)
}

fn render(games: &[Game], format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => export_text(games),
        OutputFormat::Json => format!("{}\n", export_json(games).context("Serializing games")?),
    })
}


#[cfg(test)]
mod tests {
    use std::fs;

    use gift_draw::{AssignError, GameStatus};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write_games(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    fn config(dir: &TempDir, names: &[&str], seed: u64) -> ImportConfig {
        ImportConfig {
            paths: names.iter().map(|name| dir.path().join(name)).collect(),
            seed: Some(seed),
            format: OutputFormat::Text,
        }
    }

    fn outcome(result: anyhow::Result<Vec<Game>>) -> String {
        match result {
            Ok(games) => render(&games, OutputFormat::Text).unwrap(),
            Err(err) => err.root_cause().to_string(),
        }
    }

    #[test]
    fn no_files() {
        let config = ImportConfig { paths: vec![], seed: None, format: OutputFormat::Json };
        run(config).unwrap();
    }

    #[test]
    fn draws_all_games() {
        let dir = write_games(&[
            ("game1", "G1\nAlice,Bob\nBob,Alice\nCarol,\nDave,\n"),
            ("game2", "G2\nAlice,\nBob,\nCarol,\nDave,\n"),
        ]);
        let mut successes = 0;
        for seed in 0..50 {
            match draw(&config(&dir, &["game1", "game2"], seed)) {
                Ok(games) => {
                    successes += 1;
                    assert_eq!(games.iter().map(Game::id).collect::<Vec<_>>(), ["G1", "G2"]);
                    assert!(games.iter().all(|g| g.status() == GameStatus::Complete));
                    for player in games[0].players() {
                        assert_ne!(games[0].selection(player), games[1].selection(player));
                    }
                }
                Err(err) => {
                    // Greedy draw can run into a dead end in the second game.
                    let err = err.root_cause().downcast_ref::<AssignError>().unwrap();
                    let AssignError::NoAvailableOptions { game_id, .. } = err;
                    assert_eq!(game_id, "G2");
                }
            }
        }
        assert!(successes > 0);
    }

    #[test]
    fn same_seed_same_draw() {
        let dir = write_games(&[("game", "G\nA\nB\nC\nD\nE\n")]);
        for seed in 0..10 {
            assert_eq!(
                outcome(draw(&config(&dir, &["game"], seed))),
                outcome(draw(&config(&dir, &["game"], seed)))
            );
        }
    }

    #[test]
    fn json_output_ends_with_newline() {
        let dir = write_games(&[("game", "G\nA\nB\n")]);
        let games = draw(&config(&dir, &["game"], 0)).unwrap();
        let json = render(&games, OutputFormat::Json).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with("]\n"));
    }

    #[test]
    fn empty_file_fails_whole_batch() {
        let dir = write_games(&[("good", "G1\nA\nB\n"), ("empty", "")]);
        let err = draw(&config(&dir, &["good", "empty"], 0)).unwrap_err();
        assert!(err.to_string().ends_with("file is empty"), "{err}");
    }

    #[test]
    fn missing_file_fails_whole_batch() {
        let dir = write_games(&[("good", "G1\nA\nB\n")]);
        let err = draw(&config(&dir, &["good", "missing"], 0)).unwrap_err();
        assert!(err.to_string().contains("missing"), "{err}");
    }

    #[test]
    fn dead_end_fails_whole_batch() {
        let dir = write_games(&[("game1", "G1\nA\nB\n"), ("game2", "G2\nA\nB\n")]);
        let err = draw(&config(&dir, &["game1", "game2"], 0)).unwrap_err();
        assert_eq!(err.to_string(), "Draw failed, try again");
        assert_eq!(outcome(Err(err)), "No available options for player A in game G2");
    }
}
