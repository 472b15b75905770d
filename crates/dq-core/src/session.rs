//! Interactive console session over a room tree.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{trace, warn};

use crate::command::{Command, QUIT_KEY, parse_command};
use crate::config::ExploreConfig;
use crate::error::{NavError, NavResult, SessionResult};
use crate::navigator::{NavState, Navigator, Step};
use crate::room::Room;

const SEPARATOR: &str = "-------------------------------------------------";
const LEAF_TAG: &str = "[FIM DO CAMINHO]";

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    /// The player walked into a dead end with this name.
    ReachedLeaf(String),
    /// The player chose to stop.
    Quit,
    /// Input ran out while waiting for a command.
    InputClosed,
}

/// One line read from the player.
enum Input {
    Closed,
    Blank,
    Line(NavResult<Command>),
}

/// An exploration session reading commands from `R` and writing the
/// transcript to `W`.
pub struct ExplorationSession<'a, R, W> {
    navigator: Navigator<'a>,
    input: R,
    output: W,
    config: ExploreConfig,
}

impl<'a, R: BufRead, W: Write> ExplorationSession<'a, R, W> {
    /// Create a session positioned at `root` with the default configuration.
    pub fn new(root: &'a Room, input: R, output: W) -> Self {
        Self {
            navigator: Navigator::new(root),
            input,
            output,
            config: ExploreConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ExploreConfig) -> Self {
        self.config = config;
        self
    }

    /// The navigator driven by this session.
    pub fn navigator(&self) -> &Navigator<'a> {
        &self.navigator
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the player reaches a dead end, quits, or input runs out.
    pub fn run(&mut self) -> SessionResult<Ending> {
        loop {
            if self.navigator.state() == NavState::Exited {
                return Ok(Ending::Quit);
            }

            let room = self.navigator.current();
            self.show_room(room)?;

            if room.is_leaf() {
                let tag = self.paint_leaf_tag();
                writeln!(self.output, "\n{tag}: Você alcançou o final desta ala da mansão.")?;
                writeln!(self.output, "\n{SEPARATOR}")?;
                return Ok(Ending::ReachedLeaf(room.name().to_string()));
            }

            self.show_menu(room)?;

            let parsed = loop {
                match self.read_input()? {
                    Input::Blank => continue,
                    Input::Closed => {
                        warn!(room = room.name(), "input closed during exploration");
                        writeln!(self.output, "\n[ERRO]: Entrada encerrada.")?;
                        return Ok(Ending::InputClosed);
                    }
                    Input::Line(parsed) => break parsed,
                }
            };

            match parsed.and_then(|command| self.navigator.apply(command)) {
                Ok(Step::Moved(_) | Step::Arrived(_)) => {}
                Ok(Step::Exited) => {
                    writeln!(self.output, "\nSaindo da exploração da mansão. Até breve!")?;
                }
                Err(e) => writeln!(self.output, "\n{e}")?,
            }
        }
    }

    fn show_room(&mut self, room: &Room) -> SessionResult<()> {
        writeln!(self.output, "\n{SEPARATOR}")?;
        let name = self.paint_room(room.name());
        writeln!(self.output, "Você está em: {name}")?;
        Ok(())
    }

    fn show_menu(&mut self, room: &Room) -> SessionResult<()> {
        writeln!(self.output, "Para onde deseja ir?")?;
        for direction in room.exits() {
            writeln!(self.output, "  ({}) {}", direction.key(), direction.label())?;
        }
        writeln!(self.output, "  ({QUIT_KEY}) Sair da exploração")?;
        write!(self.output, "Sua escolha: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_input(&mut self) -> SessionResult<Input> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Input::Closed);
        }

        let Ok(line) = std::str::from_utf8(&buf) else {
            trace!(bytes = buf.len(), "discarded undecodable line");
            return Ok(Input::Line(Err(NavError::MalformedInput)));
        };
        trace!(line = line.trim_end(), "read line");

        if line.trim().is_empty() {
            Ok(Input::Blank)
        } else {
            Ok(Input::Line(parse_command(line)))
        }
    }

    fn paint_room(&self, name: &str) -> String {
        if self.config.color {
            name.yellow().bold().to_string()
        } else {
            name.to_string()
        }
    }

    fn paint_leaf_tag(&self) -> String {
        if self.config.color {
            LEAF_TAG.green().bold().to_string()
        } else {
            LEAF_TAG.to_string()
        }
    }
}
