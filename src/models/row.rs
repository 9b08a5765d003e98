use serde::{Deserialize, Serialize};

use crate::models::seat::Seat;
use crate::models::seat_map::SEATS_PER_ROW;

/// A lettered group of 8 sequential seats. The seat list is fixed at
/// creation; only the booked flags change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub letter: char,
    pub seats: Vec<Seat>,
}

impl Row {
    pub fn new(letter: char) -> Self {
        Row {
            letter,
            seats: (0..SEATS_PER_ROW as u8).map(Seat::new).collect(),
        }
    }

    pub fn booked_seats(&self) -> usize {
        self.seats.iter().filter(|s| s.booked).count()
    }
}
