//! Command parsing for player input.

use crate::error::{NavError, NavResult};

/// Branch to take from the current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left branch ("esquerda").
    Left,
    /// Right branch ("direita").
    Right,
}

impl Direction {
    /// Both directions, in the order exits are listed.
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Parse a direction from its key (case-insensitive).
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'e' => Some(Self::Left),
            'd' => Some(Self::Right),
            _ => None,
        }
    }

    /// The key that selects this direction.
    pub fn key(&self) -> char {
        match self {
            Self::Left => 'e',
            Self::Right => 'd',
        }
    }

    /// Lowercase display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "esquerda",
            Self::Right => "direita",
        }
    }

    /// Capitalized label used in the exit menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Left => "Esquerda",
            Self::Right => "Direita",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move into the child room on the given side.
    Go {
        /// The branch to follow.
        direction: Direction,
    },
    /// Stop exploring.
    Quit,
}

pub(crate) const QUIT_KEY: char = 's';

/// Parse one line of player input into a command.
///
/// The line must hold exactly one non-blank character after trimming.
/// Anything longer is malformed; a single unrecognized character is an
/// unknown option.
pub fn parse_command(input: &str) -> NavResult<Command> {
    let mut chars = input.trim().chars();
    let (Some(key), None) = (chars.next(), chars.next()) else {
        return Err(NavError::MalformedInput);
    };

    if let Some(direction) = Direction::from_key(key) {
        return Ok(Command::Go { direction });
    }
    if key.eq_ignore_ascii_case(&QUIT_KEY) {
        return Ok(Command::Quit);
    }

    Err(NavError::UnknownOption(key))
}
