use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cinema_core::{Clock, DomainError, DomainResult, Extent};

/// A loyalty stamp card.
///
/// Stamps only ever accumulate; reaching [`Stampcard::MAX_STAMPS`] completes
/// the card permanently and further stamps are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stampcard {
    purchased_at: DateTime<Utc>,
    stamps: u8,
    completed: bool,
}

impl Stampcard {
    /// Stamps needed to complete a card.
    pub const MAX_STAMPS: u8 = 10;

    /// Append a fresh card to the extent: zero stamps, not completed.
    pub fn create<'a>(extent: &'a mut Extent<Stampcard>, clock: &dyn Clock) -> &'a mut Stampcard {
        extent.push(Self {
            purchased_at: clock.now(),
            stamps: 0,
            completed: false,
        })
    }

    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    pub fn stamps(&self) -> u8 {
        self.stamps
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Add one stamp. Completing the card is permanent; stamping a completed
    /// card fails and leaves the card unchanged.
    pub fn add_stamp(&mut self) -> DomainResult<()> {
        if self.completed {
            return Err(DomainError::invalid_state(
                "this stamp card is already completed",
            ));
        }

        self.stamps += 1;
        if self.stamps >= Self::MAX_STAMPS {
            self.completed = true;
        }
        Ok(())
    }
}

impl core::fmt::Display for Stampcard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Stampcard - purchased: {}, stamps: {}, completed: {}",
            self.purchased_at.format("%d/%m/%Y"),
            self.stamps,
            self.completed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use cinema_core::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn new_card_starts_empty_and_grows_extent() {
        let mut extent = Extent::new();
        let card = Stampcard::create(&mut extent, &clock());
        assert_eq!(card.stamps(), 0);
        assert!(!card.is_completed());
        assert_eq!(extent.len(), 1);
    }

    #[test]
    fn add_stamp_increments_count() {
        let mut extent = Extent::new();
        let card = Stampcard::create(&mut extent, &clock());
        card.add_stamp().unwrap();
        assert_eq!(card.stamps(), 1);
        assert!(!card.is_completed());
    }

    #[test]
    fn tenth_stamp_completes_the_card() {
        let mut extent = Extent::new();
        let card = Stampcard::create(&mut extent, &clock());
        for _ in 0..10 {
            card.add_stamp().unwrap();
        }
        assert_eq!(card.stamps(), 10);
        assert!(card.is_completed());
    }

    #[test]
    fn eleventh_stamp_fails_and_leaves_state_unchanged() {
        let mut extent = Extent::new();
        let card = Stampcard::create(&mut extent, &clock());
        for _ in 0..10 {
            card.add_stamp().unwrap();
        }

        let err = card.add_stamp().unwrap_err();
        assert!(matches!(err, DomainError::InvalidState(_)));
        assert_eq!(card.stamps(), 10);
        assert!(card.is_completed());
    }

    #[test]
    fn display_includes_stamps_and_completion() {
        let mut extent = Extent::new();
        let card = Stampcard::create(&mut extent, &clock());
        card.add_stamp().unwrap();
        let text = card.to_string();
        assert!(text.contains("stamps: 1"));
        assert!(text.contains("completed: false"));
        assert!(text.contains("01/06/2024"));
    }
}
