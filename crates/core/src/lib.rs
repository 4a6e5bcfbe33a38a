//! `cinema-core` — domain foundation building blocks.
//!
//! This crate contains the primitives shared by every entity crate: the
//! domain error model, the class extent container with its file persistence,
//! the clock abstraction behind derived date fields, and the notification
//! sink boundary.

pub mod clock;
pub mod error;
pub mod extent;
pub mod notify;
pub mod store;

pub use clock::{years_between, Clock, FixedClock, SystemClock};
pub use error::{DomainError, DomainResult};
pub use extent::Extent;
pub use notify::{LogNotifier, MemoryNotifier, Notifier};
pub use store::StoreError;
