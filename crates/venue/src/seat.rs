use serde::{Deserialize, Serialize};

use cinema_core::{DomainError, DomainResult, Extent};

/// A seat, identified by its row letter and number.
///
/// The row is normalized to uppercase before the uniqueness check, so `a1`
/// and `A1` are the same seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    number: u32,
    row: char,
}

impl Seat {
    /// Validate number and row and append a new seat to the extent.
    pub fn create(extent: &mut Extent<Seat>, number: u32, row: char) -> DomainResult<&Seat> {
        if number == 0 {
            return Err(DomainError::validation("seat number must be positive"));
        }
        if !row.is_ascii_alphabetic() {
            return Err(DomainError::validation("row must be a letter (A-Z)"));
        }

        let row = row.to_ascii_uppercase();
        if extent
            .iter()
            .any(|seat| seat.number == number && seat.row == row)
        {
            return Err(DomainError::validation(format!(
                "seat {row}{number} already exists"
            )));
        }

        Ok(extent.push(Self { number, row }))
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn row(&self) -> char {
        self.row
    }
}

impl core::fmt::Display for Seat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Seat {}{}", self.row, self.number)
    }
}
