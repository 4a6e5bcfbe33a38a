//! Venue domain module: halls and seats.

pub mod hall;
pub mod seat;

pub use hall::Hall;
pub use seat::Seat;
