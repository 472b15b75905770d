//! Navigation state machine over a room tree.

use tracing::debug;

use crate::command::{Command, Direction};
use crate::error::{NavError, NavResult};
use crate::room::Room;

/// Where the navigator currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// In a room with both exits.
    Branching,
    /// In a room with exactly one exit.
    SingleExit(Direction),
    /// In a dead end. Terminal.
    Leaf,
    /// The player quit. Terminal.
    Exited,
}

impl NavState {
    /// Whether no further commands are accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Leaf | Self::Exited)
    }
}

/// Outcome of a successfully applied command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Entered a room that has further exits.
    Moved(&'a Room),
    /// Entered a dead end; exploration is over.
    Arrived(&'a Room),
    /// The player quit.
    Exited,
}

/// Walks a room tree from its root, one command at a time.
///
/// The tree is only borrowed; navigating never changes it.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    root: &'a Room,
    current: &'a Room,
    trail: Vec<Direction>,
    exited: bool,
}

impl<'a> Navigator<'a> {
    /// Start at `root`.
    pub fn new(root: &'a Room) -> Self {
        Self {
            root,
            current: root,
            trail: Vec::new(),
            exited: false,
        }
    }

    /// The room the tree was entered from.
    pub fn root(&self) -> &'a Room {
        self.root
    }

    /// The room the player is standing in.
    pub fn current(&self) -> &'a Room {
        self.current
    }

    /// Directions taken from the root to the current room.
    pub fn trail(&self) -> &[Direction] {
        &self.trail
    }

    /// Current state.
    pub fn state(&self) -> NavState {
        if self.exited {
            return NavState::Exited;
        }
        match (self.current.left(), self.current.right()) {
            (Some(_), Some(_)) => NavState::Branching,
            (Some(_), None) => NavState::SingleExit(Direction::Left),
            (None, Some(_)) => NavState::SingleExit(Direction::Right),
            (None, None) => NavState::Leaf,
        }
    }

    /// Whether exploration is over.
    pub fn is_finished(&self) -> bool {
        self.state().is_terminal()
    }

    /// Apply one command.
    ///
    /// On error the position is left untouched.
    pub fn apply(&mut self, command: Command) -> NavResult<Step<'a>> {
        if self.is_finished() {
            return Err(NavError::Finished);
        }

        match command {
            Command::Quit => {
                debug!(room = self.current.name(), "exploration abandoned");
                self.exited = true;
                Ok(Step::Exited)
            }
            Command::Go { direction } => {
                let next = self
                    .current
                    .child(direction)
                    .ok_or(NavError::NoExit(direction))?;
                debug!(from = self.current.name(), to = next.name(), ?direction, "moved");
                self.current = next;
                self.trail.push(direction);
                if next.is_leaf() {
                    Ok(Step::Arrived(next))
                } else {
                    Ok(Step::Moved(next))
                }
            }
        }
    }
}
