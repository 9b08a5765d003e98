//! The booking engine: parses one command line, validates it against the
//! current seat map, and applies the range mutation atomically.
//!
//! Grammar (case-sensitive, exactly one space between tokens, anchored at
//! both ends):
//!
//! ```text
//! <command>     ::= <operation> " " <row-letter><start-digit> " " <count-digit>
//! <operation>   ::= "BOOK" | "CANCEL"
//! <row-letter>  ::= A..T
//! <start-digit> ::= 0..7
//! <count-digit> ::= 1..7
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::models::seat_map::SEATS_PER_ROW;
use crate::models::{MapError, SeatMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Book,
    Cancel,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Book => "BOOK",
            Operation::Cancel => "CANCEL",
        }
    }
}

/// A parsed command. Construction goes through `FromStr`, so a `Command`
/// always carries a row in A..T, a start in 0..=7 and a count in 1..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub op: Operation,
    pub row: char,
    pub start: u8,
    pub count: u8,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{} {}", self.op.as_str(), self.row, self.start, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("command does not match the grammar: {0:?}")]
    Malformed(String),

    #[error("seat range {row}{start} +{count} runs past the end of the row")]
    RangeOutOfBounds { row: char, start: u8, count: u8 },

    #[error("seat {row}{seat} is already booked")]
    AlreadyBooked { row: char, seat: u8 },

    #[error("seat {row}{seat} is not booked")]
    NotBooked { row: char, seat: u8 },

    // Unreachable through parsed commands; kept for direct map access.
    #[error(transparent)]
    Map(#[from] MapError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || CommandError::Malformed(input.to_string());

        // split(' ') keeps empty tokens, so doubled, leading or trailing
        // spaces all fall out as malformed instead of being glossed over
        let mut parts = input.split(' ');
        let op = match parts.next() {
            Some("BOOK") => Operation::Book,
            Some("CANCEL") => Operation::Cancel,
            _ => return Err(malformed()),
        };
        let range = parts.next().ok_or_else(malformed)?.as_bytes();
        let count = parts.next().ok_or_else(malformed)?.as_bytes();
        if parts.next().is_some() {
            return Err(malformed());
        }

        // row letter is bounds-checked here, not left to the caller: the
        // alphabet runs past T but the venue does not
        let &[row, start] = range else {
            return Err(malformed());
        };
        if !(b'A'..=b'T').contains(&row) || !(b'0'..=b'7').contains(&start) {
            return Err(malformed());
        }
        let &[count] = count else {
            return Err(malformed());
        };
        if !(b'1'..=b'7').contains(&count) {
            return Err(malformed());
        }

        Ok(Command {
            op,
            row: row as char,
            start: start - b'0',
            count: count - b'0',
        })
    }
}

/// Parses `input`, validates it against `map` and applies it. All-or-nothing:
/// on any error the map is untouched. Returns the parsed command so callers
/// can report what was applied.
pub fn apply(map: &mut SeatMap, input: &str) -> Result<Command, CommandError> {
    let cmd: Command = input.parse()?;

    let stop = (cmd.start + cmd.count) as usize;
    if stop > SEATS_PER_ROW {
        return Err(CommandError::RangeOutOfBounds {
            row: cmd.row,
            start: cmd.start,
            count: cmd.count,
        });
    }

    let row = map.row_mut(cmd.row)?;
    let range = cmd.start as usize..stop;
    let want_booked = cmd.op == Operation::Cancel;

    // First pass: the whole range must be in the opposite state. Nothing is
    // written until every seat has been checked.
    for seat in &row.seats[range.clone()] {
        if seat.booked != want_booked {
            return Err(match cmd.op {
                Operation::Book => CommandError::AlreadyBooked {
                    row: cmd.row,
                    seat: seat.number,
                },
                Operation::Cancel => CommandError::NotBooked {
                    row: cmd.row,
                    seat: seat.number,
                },
            });
        }
    }

    // Second pass: commit.
    for seat in &mut row.seats[range] {
        seat.booked = !want_booked;
    }

    debug!("applied {} ({} seats in row {})", cmd, cmd.count, cmd.row);
    Ok(cmd)
}
