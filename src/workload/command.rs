//! command.rs
//! One operation against the shared record, plus its line-oriented text form:
//!
//! - `read <index>`          → `Command::Read`
//! - `write <index> <value>` → `Command::Write`
//! - anything else           → `Command::Composite`
//!
//! A `read`/`write` line that does not parse degrades to `Composite` instead of
//! failing. An index that parses but is outside the record's slots is kept as is;
//! the record rejects it at its own boundary.

pub const READ_TOKEN: &str = "read";
pub const WRITE_TOKEN: &str = "write";
pub const COMPOSITE_TOKEN: &str = "string";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Read { slot: usize },
    Write { slot: usize, value: i64 },
    Composite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Read,
    Write,
    Composite,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Read { .. } => CommandKind::Read,
            Command::Write { .. } => CommandKind::Write,
            Command::Composite => CommandKind::Composite,
        }
    }

    /// Parses one line, degrading malformed `read`/`write` lines to `Composite`.
    pub fn parse_line(line: &str) -> Command {
        Self::try_parse(line).unwrap_or(Command::Composite)
    }

    /// Strict variant: `None` when the line starts with `read`/`write` but its
    /// operands are missing or not integers. Unknown leading tokens are composite
    /// reads, not errors.
    pub fn try_parse(line: &str) -> Option<Command> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(READ_TOKEN) => {
                let slot = parse_slot(tokens.next())?;
                Some(Command::Read { slot })
            }
            Some(WRITE_TOKEN) => {
                let slot = parse_slot(tokens.next())?;
                let value = tokens.next()?.parse::<i64>().ok()?;
                Some(Command::Write { slot, value })
            }
            _ => Some(Command::Composite),
        }
    }

    pub fn to_line(&self) -> String {
        match self {
            Command::Read { slot } => format!("{} {}", READ_TOKEN, slot),
            Command::Write { slot, value } => format!("{} {} {}", WRITE_TOKEN, slot, value),
            Command::Composite => COMPOSITE_TOKEN.to_string(),
        }
    }
}

fn parse_slot(token: Option<&str>) -> Option<usize> {
    token?.parse::<usize>().ok()
}
