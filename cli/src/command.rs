use std::str::FromStr;

use mineboard_core::{Coord, Coord2};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `h`")]
    Unknown(String),
    #[error("`{0}` expects ROW COL")]
    MissingCoords(&'static str),
    #[error("`{0}` is not a valid coordinate")]
    BadCoord(String),
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

pub const HELP: &str = "\
commands:
  r ROW COL   reveal a cell
  f ROW COL   toggle a flag
  n           new game
  h           show this help
  q           quit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;

        let command = match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words, "reveal")?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words, "flag")?),
            "n" | "new" => Self::NewGame,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    verb: &'static str,
) -> Result<Coord2, CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words.next().ok_or(CommandError::MissingCoords(verb))?;
        word.parse()
            .map_err(|_| CommandError::BadCoord(word.to_string()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}
