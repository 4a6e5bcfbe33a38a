use serde::{Deserialize, Serialize};

use cinema_core::{DomainError, DomainResult, Extent};

/// A screening hall, identified by its number.
///
/// Numbers are unique across the extent; capacity is a system-wide constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hall {
    number: u32,
}

impl Hall {
    /// System-wide maximum seating capacity per hall.
    pub const MAX_CAPACITY: u32 = 100;

    /// Validate the number and append a new hall to the extent.
    pub fn create(extent: &mut Extent<Hall>, number: u32) -> DomainResult<&Hall> {
        if number == 0 {
            return Err(DomainError::validation("hall number must be positive"));
        }
        if extent.iter().any(|hall| hall.number == number) {
            return Err(DomainError::validation(format!(
                "hall with number {number} already exists"
            )));
        }

        Ok(extent.push(Self { number }))
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl core::fmt::Display for Hall {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Hall {} (max capacity: {})",
            self.number,
            Self::MAX_CAPACITY
        )
    }
}
