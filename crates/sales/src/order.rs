use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cinema_core::{Clock, DomainError, DomainResult, Extent};

/// A purchase order. The timestamp is taken from the clock at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    card_info: String,
    purchased_at: DateTime<Utc>,
}

impl Order {
    /// Validate the card info and append a new order to the extent.
    pub fn create<'a>(
        extent: &'a mut Extent<Order>,
        clock: &dyn Clock,
        card_info: &str,
    ) -> DomainResult<&'a Order> {
        if card_info.trim().is_empty() {
            return Err(DomainError::validation("card information cannot be empty"));
        }

        Ok(extent.push(Self {
            card_info: card_info.to_string(),
            purchased_at: clock.now(),
        }))
    }

    pub fn card_info(&self) -> &str {
        &self.card_info
    }

    pub fn purchased_at(&self) -> DateTime<Utc> {
        self.purchased_at
    }
}

impl core::fmt::Display for Order {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Order made on {}, card info: {}",
            self.purchased_at.format("%d/%m/%Y %H:%M"),
            self.card_info
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
    fn create_valid_order_timestamps_from_clock() {
        let mut extent = Extent::new();
        let order = Order::create(&mut extent, &clock(), "4111-xxxx").unwrap();
        assert_eq!(order.card_info(), "4111-xxxx");
        assert_eq!(order.purchased_at(), clock().now());
        assert_eq!(extent.len(), 1);
    }

    #[test]
    fn create_rejects_blank_card_info() {
        let mut extent = Extent::new();
        let err = Order::create(&mut extent, &clock(), "   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(extent.is_empty());
    }

    #[test]
    fn orders_keep_construction_order() {
        let mut extent = Extent::new();
        Order::create(&mut extent, &clock(), "A").unwrap();
        Order::create(&mut extent, &clock(), "B").unwrap();

        let infos: Vec<&str> = extent.iter().map(Order::card_info).collect();
        assert_eq!(infos, ["A", "B"]);
    }

    #[test]
    fn display_includes_card_info_and_date() {
        let mut extent = Extent::new();
        let order = Order::create(&mut extent, &clock(), "A").unwrap();
        let text = order.to_string();
        assert!(text.contains("card info: A"));
        assert!(text.contains("01/06/2024"));
        assert_eq!(text, order.to_string());
    }
}
