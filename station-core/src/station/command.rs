//! Abstract operator commands.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StationError;

/// Operator command, already translated from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    SelectNext,
    SelectPrevious,
    IncreaseSelected,
    DecreaseSelected,
    ToggleSelectedEnabled,
    ToggleLock,
    ClearLog,
    Quit,
}

/// Whether the control loop should keep running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl Command {
    /// Whether the command edits channel amounts or flags.
    pub fn edits_channel(&self) -> bool {
        matches!(
            self,
            Command::IncreaseSelected | Command::DecreaseSelected | Command::ToggleSelectedEnabled
        )
    }
}

impl FromStr for Command {
    type Err = StationError;

    /// Parse a command word. Key names from the operator panel are accepted
    /// as aliases (`right`, `left`, `up`, `down`, `space`, `enter`, `c`, `escape`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" | "right" => Ok(Command::SelectNext),
            "prev" | "previous" | "left" => Ok(Command::SelectPrevious),
            "up" | "increase" => Ok(Command::IncreaseSelected),
            "down" | "decrease" => Ok(Command::DecreaseSelected),
            "toggle" | "space" => Ok(Command::ToggleSelectedEnabled),
            "lock" | "enter" | "return" => Ok(Command::ToggleLock),
            "clear" | "c" => Ok(Command::ClearLog),
            "quit" | "exit" | "escape" => Ok(Command::Quit),
            _ => Err(StationError::InvalidCommand {
                input: s.to_string(),
            }),
        }
    }
}
