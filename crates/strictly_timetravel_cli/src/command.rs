//! Parsing of the line-oriented command language.

use derive_more::{Display, Error};
use strictly_timetravel::Position;
use tracing::instrument;

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  <0-8> | <cell name>   place a mark (e.g. 4, center, top-left)
  jump <step>           make a recorded step active
  undo | redo           step back or forward one move
  latest                jump to the most recent move
  reverse               flip the move list order
  restart               discard every move
  show                  print the current frame
  help                  print this text
  quit                  exit";

/// One driver command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at a raw cell index. Range is checked by the session.
    Move(usize),
    /// Make a recorded step active.
    Jump(usize),
    /// Step back one move.
    Undo,
    /// Step forward one move.
    Redo,
    /// Jump to the most recent move.
    Latest,
    /// Flip the move list order.
    Reverse,
    /// Discard every move.
    Restart,
    /// Print the current frame.
    Show,
    /// Print help.
    Help,
    /// Exit.
    Quit,
}

/// Input that does not form a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// `jump` without a step.
    #[display("jump needs a step number")]
    MissingStep,
    /// `jump` with something that is not a number.
    #[display("'{input}' is not a step number")]
    InvalidStep {
        /// The offending argument.
        input: String,
    },
    /// Nothing matched.
    #[display("Unknown command '{input}' (type 'help')")]
    Unknown {
        /// The offending line.
        input: String,
    },
}

impl Command {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(CommandError::Empty);
        };

        match head.to_lowercase().as_str() {
            "jump" | "j" => {
                let arg = words.next().ok_or(CommandError::MissingStep)?;
                arg.parse()
                    .map(Command::Jump)
                    .map_err(|_| CommandError::InvalidStep {
                        input: arg.to_string(),
                    })
            }
            "undo" | "u" => Ok(Command::Undo),
            "redo" | "r" => Ok(Command::Redo),
            "latest" => Ok(Command::Latest),
            "reverse" => Ok(Command::Reverse),
            "restart" => Ok(Command::Restart),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => {
                if let Ok(index) = line.parse::<usize>() {
                    return Ok(Command::Move(index));
                }
                Position::from_label_or_number(line)
                    .map(|pos| Command::Move(pos.to_index()))
                    .ok_or_else(|| CommandError::Unknown {
                        input: line.to_string(),
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!(Command::parse("4"), Ok(Command::Move(4)));
        assert_eq!(Command::parse("  Center "), Ok(Command::Move(4)));
        assert_eq!(Command::parse("bottom-left"), Ok(Command::Move(6)));
        assert_eq!(Command::parse("12"), Ok(Command::Move(12)));
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(Command::parse("jump 3"), Ok(Command::Jump(3)));
        assert_eq!(Command::parse("UNDO"), Ok(Command::Undo));
        assert_eq!(Command::parse("latest"), Ok(Command::Latest));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert_eq!(Command::parse("jump"), Err(CommandError::MissingStep));
        assert_eq!(
            Command::parse("jump x"),
            Err(CommandError::InvalidStep { input: "x".to_string() })
        );
        assert!(matches!(Command::parse("fly"), Err(CommandError::Unknown { .. })));
    }
}
