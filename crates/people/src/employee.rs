use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cinema_core::{years_between, Clock, DomainError, DomainResult, Extent, Notifier};

/// A cinema employee, current or former.
///
/// `end_date` is absent for active employees; years of service run to the
/// end date when set, otherwise to today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    surname: String,
    birth_date: NaiveDate,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    salary: f64,
}

impl Employee {
    /// Validate the fields and append a new employee to the extent.
    pub fn create<'a>(
        extent: &'a mut Extent<Employee>,
        clock: &dyn Clock,
        name: &str,
        surname: &str,
        birth_date: NaiveDate,
        start_date: NaiveDate,
        salary: f64,
        end_date: Option<NaiveDate>,
    ) -> DomainResult<&'a Employee> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if surname.trim().is_empty() {
            return Err(DomainError::validation("surname cannot be empty"));
        }
        if birth_date > clock.today() {
            return Err(DomainError::validation("birth date cannot be in the future"));
        }
        if start_date > clock.today() {
            return Err(DomainError::validation("start date cannot be in the future"));
        }
        if let Some(end) = end_date {
            if end < start_date {
                return Err(DomainError::validation(
                    "end date cannot be before start date",
                ));
            }
        }
        // NaN must fail too.
        if !(salary > 0.0) {
            return Err(DomainError::validation("salary must be positive"));
        }

        Ok(extent.push(Self {
            name: name.to_string(),
            surname: surname.to_string(),
            birth_date,
            start_date,
            end_date,
            salary,
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Age in whole years as of the clock's today.
    pub fn age(&self, clock: &dyn Clock) -> i32 {
        years_between(self.birth_date, clock.today())
    }

    /// Completed years of service, up to the end date or today.
    pub fn years_of_service(&self, clock: &dyn Clock) -> i32 {
        let until = self.end_date.unwrap_or_else(|| clock.today());
        years_between(self.start_date, until)
    }

    pub fn access_shift_list(&self, sink: &dyn Notifier) {
        sink.notify(&format!(
            "{} {} is accessing the shift list...",
            self.name, self.surname
        ));
    }

    /// Human-readable one-liner covering all fields, stored and derived.
    pub fn summary(&self, clock: &dyn Clock) -> String {
        let end = self
            .end_date
            .map_or_else(|| "present".to_string(), |d| d.to_string());
        format!(
            "{} {}, age {}, salary {}, started {}, end {}, years of service {}",
            self.name,
            self.surname,
            self.age(clock),
            self.salary,
            self.start_date,
            end,
            self.years_of_service(clock)
        )
    }
}
