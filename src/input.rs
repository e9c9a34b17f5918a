//! Translation of operator script lines into station input.
//!
//! A script is one entry per line: a command word (`up`, `next`, `lock`, ...)
//! or `wait <ms>` to let simulated time pass. Blank lines and `#` comments
//! are skipped.

use std::time::Duration;

use station_core::{Command, StationError};

/// One line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Wait(Duration),
}

/// Parse a script line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Input>, StationError> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    if let (Some("wait"), Some(ms), None) = (words.next(), words.next(), words.next()) {
        return ms
            .parse::<u64>()
            .map(|ms| Some(Input::Wait(Duration::from_millis(ms))))
            .map_err(|_| StationError::InvalidCommand {
                input: line.to_string(),
            });
    }

    line.parse::<Command>().map(|c| Some(Input::Command(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_line("up").unwrap(),
            Some(Input::Command(Command::IncreaseSelected))
        );
    }

    #[test]
    fn test_parse_wait() {
        assert_eq!(
            parse_line("wait 2500").unwrap(),
            Some(Input::Wait(Duration::from_millis(2500)))
        );
    }

    #[test]
    fn test_skip_blank_and_comments() {
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# select blue").unwrap(), None);
        assert_eq!(
            parse_line("lock  # confirm").unwrap(),
            Some(Input::Command(Command::ToggleLock))
        );
    }

    #[test]
    fn test_reject_bad_lines() {
        assert!(parse_line("wait soon").is_err());
        assert!(parse_line("wait 10 20").is_err());
        assert!(parse_line("paint").is_err());
    }
}
