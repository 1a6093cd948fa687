//! Turning an input line into a command and its arguments.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Every command the assistant understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Exit,
    /// Anything else, kept lowercased for logging
    Unknown(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::RemovePhone => "remove-phone",
            Command::Delete => "delete",
            Command::Exit => "exit",
            Command::Unknown(word) => word,
        }
    }
}

impl FromStr for Command {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_lowercase();
        Ok(match word.as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "remove-phone" => Command::RemovePhone,
            "delete" => Command::Delete,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown(word),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Split a line on whitespace: the first token picks the command
/// (case-insensitive), the rest are positional arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(Command, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next()?.parse::<Command>() {
        Ok(command) => command,
        Err(never) => match never {},
    };
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
