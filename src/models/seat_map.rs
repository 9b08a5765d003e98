use serde::{Deserialize, Serialize};

use crate::models::row::Row;
use crate::models::seat::Seat;

pub const ROW_COUNT: usize = 20;
pub const SEATS_PER_ROW: usize = 8;

/// Row letters in layout order. The venue layout is fixed: 20 rows, A..T.
pub const ROW_LETTERS: [char; ROW_COUNT] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T',
];

/// Errors from direct seat-map lookups. Engine-validated commands never hit
/// these; they exist for callers going around the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("unknown row '{0}'")]
    UnknownRow(char),

    #[error("seat {1} out of range for row {0}")]
    SeatOutOfRange(char, u8),
}

/// The single root of truth for seat state. Rows are stored in letter order
/// and indexed by `letter - 'A'`, so lookups never hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap {
    rows: Vec<Row>,
}

impl SeatMap {
    /// Builds the fixed venue layout: 20 rows of 8 unbooked seats.
    pub fn initialize() -> Self {
        SeatMap {
            rows: ROW_LETTERS.iter().map(|&l| Row::new(l)).collect(),
        }
    }

    fn row_index(letter: char) -> Result<usize, MapError> {
        if !letter.is_ascii_uppercase() {
            return Err(MapError::UnknownRow(letter));
        }
        let idx = (letter as u8 - b'A') as usize;
        if idx >= ROW_COUNT {
            return Err(MapError::UnknownRow(letter));
        }
        Ok(idx)
    }

    pub fn row(&self, letter: char) -> Result<&Row, MapError> {
        Ok(&self.rows[Self::row_index(letter)?])
    }

    pub(crate) fn row_mut(&mut self, letter: char) -> Result<&mut Row, MapError> {
        let idx = Self::row_index(letter)?;
        Ok(&mut self.rows[idx])
    }

    pub fn seat(&self, letter: char, index: u8) -> Result<&Seat, MapError> {
        let row = self.row(letter)?;
        row.seats
            .get(index as usize)
            .ok_or(MapError::SeatOutOfRange(letter, index))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Total booked seats across the venue.
    pub fn booked_seats(&self) -> usize {
        self.rows.iter().map(|r| r.booked_seats()).sum()
    }

    /// Checks the structural invariants: 20 rows lettered A..T in order,
    /// 8 seats per row numbered 0..=7. Used when restoring a snapshot, since
    /// a hand-edited or truncated file must not seed an invalid map.
    pub fn check_layout(&self) -> Result<(), String> {
        if self.rows.len() != ROW_COUNT {
            return Err(format!("expected {} rows, found {}", ROW_COUNT, self.rows.len()));
        }
        for (row, &letter) in self.rows.iter().zip(ROW_LETTERS.iter()) {
            if row.letter != letter {
                return Err(format!("expected row '{}', found '{}'", letter, row.letter));
            }
            if row.seats.len() != SEATS_PER_ROW {
                return Err(format!(
                    "row '{}' has {} seats, expected {}",
                    row.letter,
                    row.seats.len(),
                    SEATS_PER_ROW
                ));
            }
            for (i, seat) in row.seats.iter().enumerate() {
                if seat.number != i as u8 {
                    return Err(format!(
                        "row '{}' seat at position {} is numbered {}",
                        row.letter, i, seat.number
                    ));
                }
            }
        }
        Ok(())
    }
}
