//! Core of Detetive Quest: the mansion map and its explorer.
//!
//! The mansion is a fixed binary tree of rooms. A [`Navigator`] walks it one
//! [`Command`] at a time, and an [`ExplorationSession`] drives a navigator
//! from any line-based reader, rendering the transcript to any writer.

/// Player command parsing.
pub mod command;
/// Session configuration.
pub mod config;
/// Error types for navigation and console sessions.
pub mod error;
/// The fixed mansion layout.
pub mod mansion;
/// Navigation state machine over a room tree.
pub mod navigator;
/// Room tree nodes.
pub mod room;
/// Interactive console session.
pub mod session;

pub use command::{Command, Direction, parse_command};
pub use config::ExploreConfig;
pub use error::{NavError, NavResult, SessionError, SessionResult};
pub use mansion::build_mansion;
pub use navigator::{NavState, Navigator, Step};
pub use room::Room;
pub use session::{Ending, ExplorationSession};
