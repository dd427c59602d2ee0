// Reads game definitions. The format is line-oriented:
//
//   <game-id>
//   <player>,<excluded>,<excluded>,...
//   <player>,<excluded>,...
//
// Fields are trimmed. Empty exclusion fields (like the trailing one in `Alice,Bob,`) mean
// nothing. Blank player lines are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::{error, fmt};

use itertools::Itertools;
use log::{debug, info, warn};

use crate::game::Game;


#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    EmptyInput,
}

#[derive(Debug)]
pub struct LoadError {
    pub path: PathBuf,
    pub error: ReadError,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::Io(err) => write!(f, "{err}"),
            ReadError::EmptyInput => write!(f, "file is empty"),
        }
    }
}

impl error::Error for ReadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ReadError::Io(err) => Some(err),
            ReadError::EmptyInput => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(err: io::Error) -> Self { ReadError::Io(err) }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cannot load game from '{}': {}", self.path.display(), self.error)
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> { Some(&self.error) }
}

fn parse_player_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut fields = line.split(',').map(str::trim);
    let player = fields.next().filter(|p| !p.is_empty())?;
    let excluded = fields.filter(|f| !f.is_empty()).collect_vec();
    Some((player, excluded))
}

pub fn read_game(reader: impl BufRead) -> Result<Game, ReadError> {
    let mut lines = reader.lines();
    let id = lines.next().ok_or(ReadError::EmptyInput)??;
    let id = id.trim();
    let mut rows = Vec::new();
    for line in lines {
        let line = line?;
        if let Some((player, excluded)) = parse_player_line(&line) {
            rows.push((player.to_owned(), excluded.into_iter().map(str::to_owned).collect_vec()));
        }
    }
    let num_rows = rows.len();
    let game = Game::new(id, rows);
    if game.players().len() < num_rows {
        warn!("Game {}: some players are listed more than once; using their last line", id);
    }
    for player in game.players() {
        let exclusions = game.exclusions(player).into_iter().flatten();
        for target in exclusions.filter(|t| !game.has_player(t)) {
            debug!("Game {}: {} excludes {}, who is not a player", id, player, target);
        }
    }
    Ok(game)
}

pub fn load_game(path: impl AsRef<Path>) -> Result<Game, LoadError> {
    let path = path.as_ref();
    let with_path = |error| LoadError { path: path.to_owned(), error };
    let file = File::open(path).map_err(|err| with_path(ReadError::Io(err)))?;
    let game = read_game(BufReader::new(file)).map_err(with_path)?;
    info!(
        "Loaded game {} with {} players from {}",
        game.id(),
        game.players().len(),
        path.display()
    );
    Ok(game)
}

// Loads every game before returning, so that a bad file aborts the batch before any draw.
pub fn load_games<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
) -> Result<Vec<Game>, LoadError> {
    paths.into_iter().map(load_game).collect()
}
