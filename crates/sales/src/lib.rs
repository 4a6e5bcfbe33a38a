//! Sales domain module: orders and loyalty stamp cards.

pub mod order;
pub mod stampcard;

pub use order::Order;
pub use stampcard::Stampcard;
