use serde::{Deserialize, Serialize};

/// A single seat within a row. Identity is its position (0..=7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub number: u8,
    pub booked: bool,
}

impl Seat {
    pub fn new(number: u8) -> Self {
        Seat {
            number,
            booked: false,
        }
    }
}
