//! Catalog domain module: what is on the screen.
//!
//! Movies and the actors appearing in them, each with its own class extent.

pub mod actor;
pub mod movie;

pub use actor::Actor;
pub use movie::Movie;
