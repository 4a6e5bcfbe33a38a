use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cinema_core::{years_between, Clock, DomainError, DomainResult, Extent, Notifier};

/// A cinema customer.
///
/// The behavioral methods only validate input and emit a notification
/// through the supplied sink; they change no state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    surname: String,
    date_of_birth: NaiveDate,
}

impl Customer {
    /// Validate the fields and append a new customer to the extent.
    pub fn create<'a>(
        extent: &'a mut Extent<Customer>,
        clock: &dyn Clock,
        name: &str,
        surname: &str,
        date_of_birth: NaiveDate,
    ) -> DomainResult<&'a Customer> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if surname.trim().is_empty() {
            return Err(DomainError::validation("surname cannot be empty"));
        }
        if date_of_birth > clock.today() {
            return Err(DomainError::validation(
                "date of birth cannot be in the future",
            ));
        }

        Ok(extent.push(Self {
            name: name.to_string(),
            surname: surname.to_string(),
            date_of_birth,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Age in whole years as of the clock's today.
    pub fn age(&self, clock: &dyn Clock) -> i32 {
        years_between(self.date_of_birth, clock.today())
    }

    pub fn buy_ticket(&self, movie_title: &str, sink: &dyn Notifier) -> DomainResult<()> {
        if movie_title.trim().is_empty() {
            return Err(DomainError::validation("movie title cannot be empty"));
        }
        sink.notify(&format!(
            "{} {} bought a ticket for '{}'.",
            self.name, self.surname, movie_title
        ));
        Ok(())
    }

    pub fn buy_item(&self, item_name: &str, sink: &dyn Notifier) -> DomainResult<()> {
        if item_name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        sink.notify(&format!(
            "{} {} purchased '{}'.",
            self.name, self.surname, item_name
        ));
        Ok(())
    }

    pub fn request_stamp_card(&self, sink: &dyn Notifier) {
        sink.notify(&format!(
            "{} {} requested a new stamp card.",
            self.name, self.surname
        ));
    }

    /// Human-readable one-liner covering all fields, stored and derived.
    pub fn summary(&self, clock: &dyn Clock) -> String {
        format!(
            "{} {}, born {}, age {}",
            self.name,
            self.surname,
            self.date_of_birth,
            self.age(clock)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinema_core::{FixedClock, MemoryNotifier};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn clock() -> FixedClock {
        FixedClock::on(date(2024, 6, 1))
    }

    fn sample(extent: &mut Extent<Customer>) -> &Customer {
        Customer::create(extent, &clock(), "Ada", "Lovelace", date(1990, 12, 10)).unwrap()
    }

    #[test]
    fn create_valid_customer_stores_fields_and_grows_extent() {
        let mut extent = Extent::new();
        let customer = sample(&mut extent);
        assert_eq!(customer.name(), "Ada");
        assert_eq!(customer.surname(), "Lovelace");
        assert_eq!(customer.date_of_birth(), date(1990, 12, 10));
        assert_eq!(extent.len(), 1);
    }

    #[test]
    fn create_rejects_blank_surname() {
        let mut extent = Extent::new();
        let err =
            Customer::create(&mut extent, &clock(), "Ada", " ", date(1990, 12, 10)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(extent.is_empty());
    }

    #[test]
    fn create_rejects_future_date_of_birth() {
        let mut extent = Extent::new();
        let err = Customer::create(&mut extent, &clock(), "Ada", "Lovelace", date(2030, 1, 1))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn buy_ticket_notifies_with_customer_and_title() {
        let mut extent = Extent::new();
        let customer = sample(&mut extent);
        let sink = MemoryNotifier::new();

        customer.buy_ticket("Inception", &sink).unwrap();
        assert_eq!(
            sink.messages(),
            vec!["Ada Lovelace bought a ticket for 'Inception'."]
        );
    }

    #[test]
    fn buy_ticket_rejects_blank_title_without_notifying() {
        let mut extent = Extent::new();
        let customer = sample(&mut extent);
        let sink = MemoryNotifier::new();

        let err = customer.buy_ticket("  ", &sink).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn buy_item_and_stamp_card_request_notify() {
        let mut extent = Extent::new();
        let customer = sample(&mut extent);
        let sink = MemoryNotifier::new();

        customer.buy_item("Popcorn", &sink).unwrap();
        customer.request_stamp_card(&sink);

        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("Popcorn"));
        assert!(messages[1].contains("requested a new stamp card"));
    }

    #[test]
    fn summary_mentions_every_field_and_is_stable() {
        let mut extent = Extent::new();
        let customer = sample(&mut extent);

        let text = customer.summary(&clock());
        assert!(text.contains("Ada"));
        assert!(text.contains("Lovelace"));
        assert!(text.contains("1990-12-10"));
        assert!(text.contains("33"));
        assert_eq!(text, customer.summary(&clock()));
    }

    #[test]
    fn age_respects_anniversary_rule() {
        let mut extent = Extent::new();
        let customer = sample(&mut extent);
        assert_eq!(customer.age(&clock()), 33);
        assert_eq!(customer.age(&FixedClock::on(date(2024, 12, 10))), 34);
    }
}
