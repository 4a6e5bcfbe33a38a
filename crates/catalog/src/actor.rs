use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cinema_core::{years_between, Clock, DomainError, DomainResult, Extent};

/// An actor appearing in screened movies.
///
/// Fields are private; the `Deserialize` derive is the trusted reconstruct
/// path used only when an extent file is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    name: String,
    surname: String,
    gender: String,
    birth_date: NaiveDate,
}

impl Actor {
    /// Validate the fields and append a new actor to the extent.
    pub fn create<'a>(
        extent: &'a mut Extent<Actor>,
        clock: &dyn Clock,
        name: &str,
        surname: &str,
        gender: &str,
        birth_date: NaiveDate,
    ) -> DomainResult<&'a Actor> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if surname.trim().is_empty() {
            return Err(DomainError::validation("surname cannot be empty"));
        }
        if gender.trim().is_empty() {
            return Err(DomainError::validation("gender cannot be empty"));
        }
        if birth_date > clock.today() {
            return Err(DomainError::validation("birth date cannot be in the future"));
        }

        Ok(extent.push(Self {
            name: name.to_string(),
            surname: surname.to_string(),
            gender: gender.to_string(),
            birth_date,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Age in whole years as of the clock's today. Recomputed per call.
    pub fn age(&self, clock: &dyn Clock) -> i32 {
        years_between(self.birth_date, clock.today())
    }

    /// Human-readable one-liner covering all fields, stored and derived.
    pub fn summary(&self, clock: &dyn Clock) -> String {
        format!(
            "{} {}, {}, born {}, age {}",
            self.name,
            self.surname,
            self.gender,
            self.birth_date,
            self.age(clock)
        )
    }
}
