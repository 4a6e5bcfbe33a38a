use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use cinema_core::{years_between, Clock, DomainError, DomainResult, Extent};

/// A movie in the screening catalog.
///
/// Directors and genres are multi-valued and must each hold at least one
/// entry. Age-in-years is derived from the release date, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    title: String,
    directors: Vec<String>,
    genres: Vec<String>,
    screening_type: String,
    duration_minutes: u32,
    release_date: NaiveDate,
}

impl Movie {
    /// Validate the fields and append a new movie to the extent.
    pub fn create<'a>(
        extent: &'a mut Extent<Movie>,
        clock: &dyn Clock,
        title: &str,
        directors: Vec<String>,
        genres: Vec<String>,
        screening_type: &str,
        duration_minutes: u32,
        release_date: NaiveDate,
    ) -> DomainResult<&'a Movie> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if directors.is_empty() {
            return Err(DomainError::validation(
                "at least one director must be specified",
            ));
        }
        if genres.is_empty() {
            return Err(DomainError::validation(
                "at least one genre must be specified",
            ));
        }
        if screening_type.trim().is_empty() {
            return Err(DomainError::validation("screening type cannot be empty"));
        }
        if duration_minutes == 0 {
            return Err(DomainError::validation("duration must be positive"));
        }
        if release_date > clock.today() {
            return Err(DomainError::validation(
                "release date cannot be in the future",
            ));
        }

        Ok(extent.push(Self {
            title: title.to_string(),
            directors,
            genres,
            screening_type: screening_type.to_string(),
            duration_minutes,
            release_date,
        }))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn directors(&self) -> &[String] {
        &self.directors
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn screening_type(&self) -> &str {
        &self.screening_type
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn release_date(&self) -> NaiveDate {
        self.release_date
    }

    /// Whole years since release as of the clock's today.
    pub fn age_in_years(&self, clock: &dyn Clock) -> i32 {
        years_between(self.release_date, clock.today())
    }

    /// Human-readable one-liner covering all fields, stored and derived.
    pub fn summary(&self, clock: &dyn Clock) -> String {
        format!(
            "{} ({}) directed by {}, {}, {} min, released {} ({} years ago)",
            self.title,
            self.genres.join(", "),
            self.directors.join(", "),
            self.screening_type,
            self.duration_minutes,
            self.release_date,
            self.age_in_years(clock)
        )
    }
}
