//! Error types for navigation and console sessions.

use thiserror::Error;

use crate::command::Direction;

/// Result type for navigation operations.
pub type NavResult<T> = Result<T, NavError>;

/// Result type for console sessions.
pub type SessionResult<T> = Result<T, SessionError>;

/// Recoverable problems with a single player command.
///
/// None of these move the player. The messages are shown to the player
/// as-is.
#[derive(Debug, Error)]
pub enum NavError {
    /// A single character that is not a known option.
    #[error("[ERRO]: Opção inválida. Use 'e', 'd' ou 's'.")]
    UnknownOption(char),

    /// Input that is not a single character.
    #[error("[ERRO]: Entrada inválida.")]
    MalformedInput,

    /// The current room has no exit on that side.
    #[error("[AVISO]: Não há caminho à {} a partir desta sala.", .0.name())]
    NoExit(Direction),

    /// Exploration already ended.
    #[error("a exploração já terminou")]
    Finished,
}

/// Errors that abort a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
