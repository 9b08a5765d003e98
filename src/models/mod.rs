pub mod row;
pub mod seat;
pub mod seat_map;

pub use row::Row;
pub use seat::Seat;
pub use seat_map::{MapError, SeatMap};
